use anyhow::Result;
use booklist_tui::BookListOutcome;
use serde_json::json;

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &BookListOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(book) if book.author.is_empty() => println!("{}", book.title),
		Some(book) => println!("{} by {}", book.title, book.author),
		None => println!("No selection"),
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BookListOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &BookListOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
