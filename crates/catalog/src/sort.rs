//! Sort selections and the ordering they produce.
//!
//! A selection is encoded as the same value strings the dropdown uses:
//! `""`, `"publishDate"`, and `"<field> <asc|desc>"` for titles. Values that
//! name anything else parse to [`SortSelection::Unsupported`] and leave the
//! list as it is.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::book::Book;

/// Direction token of a compound sort value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
	Asc,
	Desc,
}

impl SortDirection {
	fn token(self) -> &'static str {
		match self {
			SortDirection::Asc => "asc",
			SortDirection::Desc => "desc",
		}
	}
}

/// The active sort mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SortSelection {
	/// Show books in the order the store supplied them.
	#[default]
	None,
	/// Newest publish date first, unknown dates last.
	MostRecent,
	/// Byte-wise title order.
	Title(SortDirection),
	/// Any other value. Sorting with it keeps the current order.
	Unsupported(String),
}

/// Dropdown entries as `(label, selection)` in display order.
pub const SORT_OPTIONS: [(&str, SortSelection); 4] = [
	("Select", SortSelection::None),
	("Most Recent", SortSelection::MostRecent),
	("Title (asc)", SortSelection::Title(SortDirection::Asc)),
	("Title (desc)", SortSelection::Title(SortDirection::Desc)),
];

impl SortSelection {
	/// Decode a dropdown value string.
	#[must_use]
	pub fn parse(value: &str) -> Self {
		match value {
			"" => SortSelection::None,
			"publishDate" => SortSelection::MostRecent,
			_ => {
				let mut parts = value.split(' ');
				match (parts.next(), parts.next(), parts.next()) {
					(Some("title"), Some("asc"), None) => SortSelection::Title(SortDirection::Asc),
					(Some("title"), Some("desc"), None) => SortSelection::Title(SortDirection::Desc),
					_ => SortSelection::Unsupported(value.to_string()),
				}
			}
		}
	}

	/// Encode back to the dropdown value string.
	#[must_use]
	pub fn value(&self) -> String {
		match self {
			SortSelection::None => String::new(),
			SortSelection::MostRecent => "publishDate".to_string(),
			SortSelection::Title(direction) => format!("title {}", direction.token()),
			SortSelection::Unsupported(raw) => raw.clone(),
		}
	}

	/// Dropdown label, or the raw value for unsupported selections.
	#[must_use]
	pub fn label(&self) -> String {
		SORT_OPTIONS
			.iter()
			.find(|(_, selection)| selection == self)
			.map(|(label, _)| (*label).to_string())
			.unwrap_or_else(|| self.value())
	}

	/// Position of this selection in [`SORT_OPTIONS`].
	#[must_use]
	pub fn option_index(&self) -> Option<usize> {
		SORT_OPTIONS
			.iter()
			.position(|(_, selection)| selection == self)
	}

	/// Order `source` (the store's list) for display.
	///
	/// `current` is what is on screen right now; it is returned unchanged for
	/// unsupported selections. All orderings are stable, so books that compare
	/// equal keep their relative order.
	#[must_use]
	pub fn apply(&self, source: &[Book], current: &[Book]) -> Vec<Book> {
		match self {
			SortSelection::None => source.to_vec(),
			SortSelection::MostRecent => sort_most_recent(source),
			SortSelection::Title(direction) => sort_by_title(source, *direction),
			SortSelection::Unsupported(value) => {
				log::debug!("ignoring unsupported sort selection {value:?}");
				current.to_vec()
			}
		}
	}
}

impl fmt::Display for SortSelection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label())
	}
}

fn sort_by_title(books: &[Book], direction: SortDirection) -> Vec<Book> {
	let mut sorted = books.to_vec();
	sorted.sort_by(|a, b| {
		let ordering = a.title.as_bytes().cmp(b.title.as_bytes());
		match direction {
			SortDirection::Asc => ordering,
			SortDirection::Desc => ordering.reverse(),
		}
	});
	sorted
}

fn sort_most_recent(books: &[Book]) -> Vec<Book> {
	let (dated, undated): (Vec<Book>, Vec<Book>) =
		books.iter().cloned().partition(Book::has_publish_date);

	let mut keyed: Vec<(Option<NaiveDate>, Book)> = dated
		.into_iter()
		.map(|book| (parse_publish_date(&book.publish_date), book))
		.collect();
	keyed.sort_by(|(a, _), (b, _)| newest_first(*a, *b));

	keyed
		.into_iter()
		.map(|(_, book)| book)
		.chain(undated)
		.collect()
}

fn newest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) => b.cmp(&a),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

const DAY_FORMATS: [&str; 5] = ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

/// Parse the publish date shapes Open Library emits.
///
/// Partial dates resolve to the first day of the month or year.
#[must_use]
pub fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
	let raw = raw.trim();
	if raw.is_empty() {
		return None;
	}

	for format in DAY_FORMATS {
		if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
			return Some(date);
		}
	}

	for format in ["%B %Y", "%b %Y", "%Y-%m"] {
		let padded = match format {
			"%Y-%m" => format!("{raw}-01"),
			_ => format!("1 {raw}"),
		};
		let padded_format = match format {
			"%Y-%m" => "%Y-%m-%d".to_string(),
			_ => format!("%d {format}"),
		};
		if let Ok(date) = NaiveDate::parse_from_str(&padded, &padded_format) {
			return Some(date);
		}
	}

	if raw.len() == 4 {
		let year = raw.parse::<i32>().ok()?;
		return NaiveDate::from_ymd_opt(year, 1, 1);
	}

	None
}
