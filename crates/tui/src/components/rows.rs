use booklist_catalog::{Book, Column};
use ratatui::widgets::{Cell, Row};

/// Text shown in `column` for `book`.
///
/// Covers become thumbnail URLs; a book without a cover id gets an empty
/// cell, as does any missing field.
#[must_use]
pub fn cell_text(book: &Book, column: Column, cover_host: &str) -> String {
	match column {
		Column::Cover => book.cover_url(cover_host).unwrap_or_default(),
		other => other.value(book).to_string(),
	}
}

/// Build one table row per book, restricted to the visible columns.
#[must_use]
pub fn build_book_rows(
	books: &[Book],
	visible: &[(usize, Column)],
	cover_host: &str,
) -> Vec<Row<'static>> {
	books
		.iter()
		.map(|book| {
			Row::new(
				visible
					.iter()
					.map(|&(_, column)| Cell::from(cell_text(book, column, cover_host))),
			)
		})
		.collect()
}
