mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::BookListWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in booklist_tui::theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	booklist::logging::initialize(resolved.log_level, &resolved.log_file)?;
	run_book_list(cli.output, resolved)
}

/// Run the book list and print the outcome in the chosen format.
fn run_book_list(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = BookListWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
