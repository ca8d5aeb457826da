//! The four fixed table columns and the layout that orders and hides them.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;

use crate::book::Book;
use crate::error::ParseColumnError;

/// One of the fixed fields a table column can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
	Title,
	Cover,
	Author,
	PublishDate,
}

impl Column {
	/// Every column in its default order.
	pub const ALL: [Column; 4] = [
		Column::Title,
		Column::Cover,
		Column::Author,
		Column::PublishDate,
	];

	/// The field name used in configuration and shown in headers.
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Column::Title => "title",
			Column::Cover => "cover",
			Column::Author => "author",
			Column::PublishDate => "publishDate",
		}
	}

	/// Raw text value of this column for `book`.
	///
	/// The cover column yields the cover id; callers turn it into a URL.
	#[must_use]
	pub fn value(self, book: &Book) -> &str {
		match self {
			Column::Title => &book.title,
			Column::Cover => book.cover.as_deref().unwrap_or(""),
			Column::Author => &book.author,
			Column::PublishDate => &book.publish_date,
		}
	}
}

impl fmt::Display for Column {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Column {
	type Err = ParseColumnError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		Column::ALL
			.into_iter()
			.find(|column| column.name().eq_ignore_ascii_case(trimmed))
			.or_else(|| {
				matches!(trimmed, "publish_date" | "publish-date").then_some(Column::PublishDate)
			})
			.ok_or_else(|| ParseColumnError {
				name: trimmed.to_string(),
			})
	}
}

/// Column order, the visible subset, and an in-progress header drag.
///
/// The order is always a permutation of [`Column::ALL`]. Visibility is kept
/// separately so hiding a column never changes where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
	order: Vec<Column>,
	visible: IndexSet<Column>,
	drag_source: Option<usize>,
}

impl Default for ColumnLayout {
	fn default() -> Self {
		Self {
			order: Column::ALL.to_vec(),
			visible: Column::ALL.into_iter().collect(),
			drag_source: None,
		}
	}
}

impl ColumnLayout {
	/// Build a layout whose order starts with `preferred`.
	///
	/// Duplicates are ignored and any column not mentioned keeps its default
	/// relative position after the preferred ones. All columns start visible.
	#[must_use]
	pub fn with_order(preferred: &[Column]) -> Self {
		let mut order: IndexSet<Column> = preferred.iter().copied().collect();
		order.extend(Column::ALL);
		Self {
			order: order.into_iter().collect(),
			..Self::default()
		}
	}

	/// Hide `columns`, keeping their position in the order.
	#[must_use]
	pub fn hiding(mut self, columns: &[Column]) -> Self {
		for column in columns {
			self.visible.shift_remove(column);
		}
		self
	}

	#[must_use]
	pub fn order(&self) -> &[Column] {
		&self.order
	}

	#[must_use]
	pub fn is_visible(&self, column: Column) -> bool {
		self.visible.contains(&column)
	}

	/// Columns to render in table order, each with its index in
	/// [`order`](Self::order).
	#[must_use]
	pub fn visible_columns(&self) -> Vec<(usize, Column)> {
		self.order
			.iter()
			.copied()
			.enumerate()
			.filter(|(_, column)| self.is_visible(*column))
			.collect()
	}

	/// Show `column` if hidden, hide it if shown. Hiding the last visible
	/// column is allowed.
	pub fn toggle(&mut self, column: Column) {
		if !self.visible.shift_remove(&column) {
			self.visible.insert(column);
		}
	}

	/// Swap the columns at two positions. Out-of-range indices are ignored.
	pub fn swap(&mut self, a: usize, b: usize) {
		if a < self.order.len() && b < self.order.len() {
			self.order.swap(a, b);
		}
	}

	/// Record the order index where a header drag started.
	pub fn begin_drag(&mut self, index: usize) {
		self.drag_source = Some(index);
	}

	/// Finish a drag over `target`, swapping it with the recorded source.
	///
	/// Returns `true` when a source was pending. The layout is idle afterwards
	/// whether or not anything moved.
	pub fn drop_on(&mut self, target: usize) -> bool {
		let Some(source) = self.drag_source.take() else {
			return false;
		};
		self.swap(source, target);
		true
	}

	/// Abandon a drag released outside any header.
	pub fn cancel_drag(&mut self) {
		self.drag_source = None;
	}

	#[must_use]
	pub fn drag_source(&self) -> Option<usize> {
		self.drag_source
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn shown(layout: &ColumnLayout) -> Vec<Column> {
		layout
			.visible_columns()
			.into_iter()
			.map(|(_, column)| column)
			.collect()
	}

	#[test]
	fn parses_column_names() {
		assert_eq!("title".parse::<Column>(), Ok(Column::Title));
		assert_eq!(" publishDate ".parse::<Column>(), Ok(Column::PublishDate));
		assert_eq!("publish_date".parse::<Column>(), Ok(Column::PublishDate));
		assert_eq!("Author".parse::<Column>(), Ok(Column::Author));
		assert!("isbn".parse::<Column>().is_err());
	}

	#[test]
	fn toggling_twice_restores_visible_set() {
		let mut layout = ColumnLayout::default();
		let before = shown(&layout);

		layout.toggle(Column::Author);
		assert!(!layout.is_visible(Column::Author));
		layout.toggle(Column::Author);

		assert!(Column::ALL.iter().all(|column| layout.is_visible(*column)));
		assert_eq!(shown(&layout), before);
	}

	#[test]
	fn all_columns_can_be_hidden() {
		let mut layout = ColumnLayout::default();
		for column in Column::ALL {
			layout.toggle(column);
		}
		assert!(layout.visible_columns().is_empty());
		assert_eq!(layout.order(), &Column::ALL);
	}

	#[test]
	fn swapping_twice_restores_order() {
		let mut layout = ColumnLayout::default();
		layout.swap(0, 3);
		assert_eq!(
			layout.order(),
			&[
				Column::PublishDate,
				Column::Cover,
				Column::Author,
				Column::Title
			]
		);
		layout.swap(0, 3);
		assert_eq!(layout.order(), &Column::ALL);
	}

	#[test]
	fn drag_and_drop_swaps_rather_than_moves() {
		let mut layout = ColumnLayout::default();
		layout.begin_drag(0);
		assert_eq!(layout.drag_source(), Some(0));
		assert!(layout.drop_on(2));
		assert_eq!(
			layout.order(),
			&[
				Column::Author,
				Column::Cover,
				Column::Title,
				Column::PublishDate
			]
		);
		assert_eq!(layout.drag_source(), None);
	}

	#[test]
	fn drop_on_source_is_a_noop_swap() {
		let mut layout = ColumnLayout::default();
		layout.begin_drag(1);
		assert!(layout.drop_on(1));
		assert_eq!(layout.order(), &Column::ALL);
	}

	#[test]
	fn drop_without_drag_does_nothing() {
		let mut layout = ColumnLayout::default();
		assert!(!layout.drop_on(2));
		assert_eq!(layout.order(), &Column::ALL);

		layout.begin_drag(3);
		layout.cancel_drag();
		assert!(!layout.drop_on(0));
		assert_eq!(layout.order(), &Column::ALL);
	}

	#[test]
	fn out_of_range_drop_returns_to_idle() {
		let mut layout = ColumnLayout::default();
		layout.begin_drag(9);
		assert!(layout.drop_on(0));
		assert_eq!(layout.order(), &Column::ALL);
		assert_eq!(layout.drag_source(), None);
	}

	#[test]
	fn hidden_columns_keep_their_position() {
		let mut layout = ColumnLayout::default();
		layout.toggle(Column::Cover);
		assert_eq!(
			layout.visible_columns(),
			vec![
				(0, Column::Title),
				(2, Column::Author),
				(3, Column::PublishDate)
			]
		);
		layout.toggle(Column::Cover);
		assert_eq!(shown(&layout), Column::ALL.to_vec());
	}

	#[test]
	fn preferred_order_is_completed_with_remaining_columns() {
		let layout = ColumnLayout::with_order(&[Column::Author, Column::Title, Column::Author])
			.hiding(&[Column::Cover]);
		assert_eq!(
			layout.order(),
			&[
				Column::Author,
				Column::Title,
				Column::Cover,
				Column::PublishDate
			]
		);
		assert_eq!(
			shown(&layout),
			vec![Column::Author, Column::Title, Column::PublishDate]
		);
	}
}
