//! The component's view state and the transitions that drive it.

use crate::book::Book;
use crate::column::{Column, ColumnLayout};
use crate::sort::SortSelection;
use crate::store::{BookActions, BookState};

/// Everything the book list shows, held in one record.
///
/// `source` is the store's list as last received; `books` is what is on
/// screen, always a reordering of `source`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookListView {
	source: Vec<Book>,
	books: Vec<Book>,
	search_text: String,
	sort: SortSelection,
	columns: ColumnLayout,
	loading: bool,
}

impl BookListView {
	#[must_use]
	pub fn new(columns: ColumnLayout) -> Self {
		Self {
			columns,
			..Self::default()
		}
	}

	/// Books in display order.
	#[must_use]
	pub fn books(&self) -> &[Book] {
		&self.books
	}

	#[must_use]
	pub fn search_text(&self) -> &str {
		&self.search_text
	}

	#[must_use]
	pub fn sort(&self) -> &SortSelection {
		&self.sort
	}

	#[must_use]
	pub fn columns(&self) -> &ColumnLayout {
		&self.columns
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	pub fn set_search_text(&mut self, text: impl Into<String>) {
		self.search_text = text.into();
	}

	/// Forward the current search text to the store and clear the sort.
	///
	/// The displayed list goes back to store order right away, so results
	/// that arrive unchanged are not left in the previous sort's order.
	/// Returns the id of the dispatched request.
	pub fn submit_search(&mut self, actions: &dyn BookActions) -> u64 {
		let id = actions.fetch_book_details(&self.search_text);
		self.sort = SortSelection::None;
		self.books = self.source.clone();
		id
	}

	/// Switch to `selection` and reorder the displayed list.
	pub fn select_sort(&mut self, selection: SortSelection) {
		self.books = selection.apply(&self.source, &self.books);
		self.sort = selection;
	}

	/// Take a new store snapshot.
	///
	/// The book list is replaced wholesale when it differs from the last one
	/// received, then ordered by the active sort. The loading flag is always
	/// mirrored.
	pub fn receive(&mut self, state: &BookState) {
		self.loading = state.loading;
		if state.books != self.source {
			self.source = state.books.clone();
			self.books = self.sort.apply(&self.source, &self.source);
		}
	}

	pub fn toggle_column(&mut self, column: Column) {
		self.columns.toggle(column);
	}

	pub fn swap_columns(&mut self, a: usize, b: usize) {
		self.columns.swap(a, b);
	}

	pub fn begin_column_drag(&mut self, index: usize) {
		self.columns.begin_drag(index);
	}

	/// Complete a header drag over `target`. See [`ColumnLayout::drop_on`].
	pub fn drop_column(&mut self, target: usize) -> bool {
		self.columns.drop_on(target)
	}

	pub fn cancel_column_drag(&mut self) {
		self.columns.cancel_drag();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::sort::SortDirection;

	#[derive(Default)]
	struct RecordingActions {
		queries: RefCell<Vec<String>>,
	}

	impl BookActions for RecordingActions {
		fn fetch_book_details(&self, query: &str) -> u64 {
			let mut queries = self.queries.borrow_mut();
			queries.push(query.to_string());
			queries.len() as u64
		}
	}

	fn state(books: Vec<Book>, loading: bool) -> BookState {
		BookState::snapshot(books, loading)
	}

	fn sample() -> Vec<Book> {
		vec![
			Book::new("B", "2020-01-01"),
			Book::new("A", ""),
			Book::new("C", "2021-06-01"),
		]
	}

	fn titles(view: &BookListView) -> Vec<&str> {
		view.books().iter().map(|book| book.title.as_str()).collect()
	}

	#[test]
	fn submit_forwards_text_and_resets_sort() {
		let actions = RecordingActions::default();
		let mut view = BookListView::default();
		view.select_sort(SortSelection::MostRecent);
		view.set_search_text("Gatsby");

		assert_eq!(view.submit_search(&actions), 1);

		assert_eq!(*actions.queries.borrow(), vec!["Gatsby".to_string()]);
		assert_eq!(view.sort(), &SortSelection::None);
	}

	#[test]
	fn empty_search_is_forwarded() {
		let actions = RecordingActions::default();
		let mut view = BookListView::default();
		view.submit_search(&actions);
		assert_eq!(*actions.queries.borrow(), vec![String::new()]);
	}

	#[test]
	fn receive_replaces_list_and_mirrors_loading() {
		let mut view = BookListView::default();
		view.receive(&state(Vec::new(), true));
		assert!(view.is_loading());
		assert!(view.books().is_empty());

		view.receive(&state(sample(), false));
		assert!(!view.is_loading());
		assert_eq!(titles(&view), vec!["B", "A", "C"]);
	}

	#[test]
	fn sorting_then_clearing_restores_store_order() {
		let mut view = BookListView::default();
		view.receive(&state(sample(), false));

		view.select_sort(SortSelection::MostRecent);
		assert_eq!(titles(&view), vec!["C", "B", "A"]);
		view.select_sort(SortSelection::Title(SortDirection::Desc));
		assert_eq!(titles(&view), vec!["C", "B", "A"]);
		view.select_sort(SortSelection::Title(SortDirection::Asc));
		assert_eq!(titles(&view), vec!["A", "B", "C"]);

		view.select_sort(SortSelection::None);
		assert_eq!(titles(&view), vec!["B", "A", "C"]);
	}

	#[test]
	fn unsupported_sort_keeps_display_order() {
		let mut view = BookListView::default();
		view.receive(&state(sample(), false));
		view.select_sort(SortSelection::Title(SortDirection::Asc));

		view.select_sort(SortSelection::parse("author desc"));
		assert_eq!(titles(&view), vec!["A", "B", "C"]);
	}

	#[test]
	fn new_store_data_follows_active_sort() {
		let mut view = BookListView::default();
		view.select_sort(SortSelection::MostRecent);
		view.receive(&state(sample(), false));
		assert_eq!(titles(&view), vec!["C", "B", "A"]);
	}

	#[test]
	fn unchanged_store_data_keeps_display_order() {
		let mut view = BookListView::default();
		view.receive(&state(sample(), false));
		view.select_sort(SortSelection::Title(SortDirection::Asc));
		view.receive(&state(sample(), true));
		assert_eq!(titles(&view), vec!["A", "B", "C"]);
	}

	#[test]
	fn submit_restores_store_order_when_results_are_unchanged() {
		let actions = RecordingActions::default();
		let mut view = BookListView::default();
		view.receive(&state(sample(), false));
		view.select_sort(SortSelection::MostRecent);
		assert_eq!(titles(&view), vec!["C", "B", "A"]);

		view.set_search_text("Gatsby");
		view.submit_search(&actions);
		assert_eq!(titles(&view), vec!["B", "A", "C"]);

		view.receive(&state(sample(), true));
		view.receive(&state(sample(), false));
		assert_eq!(view.sort(), &SortSelection::None);
		assert_eq!(titles(&view), vec!["B", "A", "C"]);
	}

	#[test]
	fn submit_shows_new_results_in_store_order() {
		let actions = RecordingActions::default();
		let mut view = BookListView::default();
		view.receive(&state(sample(), false));
		view.select_sort(SortSelection::Title(SortDirection::Desc));

		view.submit_search(&actions);
		view.receive(&state(
			vec![
				Book::new("Y", "1990-01-01"),
				Book::new("Z", "2001-01-01"),
				Book::new("X", ""),
			],
			false,
		));
		assert_eq!(titles(&view), vec!["Y", "Z", "X"]);
	}

	#[test]
	fn column_drag_goes_through_layout() {
		let mut view = BookListView::default();
		view.begin_column_drag(0);
		assert!(view.drop_column(3));
		assert_eq!(view.columns().order()[0], Column::PublishDate);
		assert_eq!(view.columns().order()[3], Column::Title);

		view.begin_column_drag(1);
		view.cancel_column_drag();
		assert!(!view.drop_column(2));
	}
}
