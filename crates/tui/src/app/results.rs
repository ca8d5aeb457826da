//! State management for the results table.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::point_in_rect;
use crate::components::tables::{HeaderCell, TableAreas};

/// Aggregate state for the results table and its interactions.
pub(crate) struct ResultsState {
	/// Selection state for the results table.
	pub table_state: TableState,
	/// Scrollbar state for the results table.
	pub scrollbar_state: ScrollbarState,
	/// Last known results area on screen, border included.
	pub area: Option<Rect>,
	/// Body and header cells from the last render.
	pub areas: TableAreas,
}

impl Default for ResultsState {
	fn default() -> Self {
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		Self {
			table_state,
			scrollbar_state: ScrollbarState::default(),
			area: None,
			areas: TableAreas::default(),
		}
	}
}

impl ResultsState {
	/// Keep the selection inside a list of `len` rows.
	pub fn ensure_selection(&mut self, len: usize) {
		if len == 0 {
			self.table_state.select(None);
			return;
		}
		match self.table_state.selected() {
			Some(index) if index < len => {}
			Some(_) => self.table_state.select(Some(len - 1)),
			None => self.table_state.select(Some(0)),
		}
	}

	/// Move the selection by `delta` rows, clamped to `len`.
	pub fn move_selection(&mut self, delta: isize, len: usize) {
		if len == 0 {
			self.table_state.select(None);
			return;
		}
		let current = self.table_state.selected().unwrap_or(0);
		let next = current.saturating_add_signed(delta).min(len - 1);
		self.table_state.select(Some(next));
	}

	pub fn select_first(&mut self, len: usize) {
		self.table_state.select((len > 0).then_some(0));
	}

	pub fn select_last(&mut self, len: usize) {
		self.table_state.select(len.checked_sub(1));
	}

	/// Rows that fit in the body, at least one.
	pub fn page_size(&self) -> usize {
		usize::from(self.areas.body.height).max(1)
	}

	pub fn contains(&self, column: u16, row: u16) -> bool {
		self.area
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	/// The header cell under the pointer, if any.
	pub fn header_at(&self, column: u16, row: u16) -> Option<HeaderCell> {
		self.areas
			.headers
			.iter()
			.find(|cell| point_in_rect(column, row, cell.area))
			.copied()
	}

	/// Index of the data row under the pointer, if any.
	pub fn row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
		let body = self.areas.body;
		if !point_in_rect(column, row, body) {
			return None;
		}
		let index = self.table_state.offset() + usize::from(row - body.y);
		(index < len).then_some(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selection_is_clamped_to_the_list() {
		let mut results = ResultsState::default();
		results.move_selection(5, 3);
		assert_eq!(results.table_state.selected(), Some(2));
		results.move_selection(-10, 3);
		assert_eq!(results.table_state.selected(), Some(0));

		results.select_last(3);
		results.ensure_selection(1);
		assert_eq!(results.table_state.selected(), Some(0));
		results.ensure_selection(0);
		assert_eq!(results.table_state.selected(), None);
	}

	#[test]
	fn row_hit_test_accounts_for_scroll_offset() {
		let mut results = ResultsState::default();
		results.areas.body = Rect::new(2, 5, 20, 4);
		*results.table_state.offset_mut() = 3;

		assert_eq!(results.row_at(4, 5, 10), Some(3));
		assert_eq!(results.row_at(4, 8, 10), Some(6));
		assert_eq!(results.row_at(4, 8, 5), None);
		assert_eq!(results.row_at(1, 5, 10), None);
	}
}
