use anyhow::Result;
use booklist_catalog::SORT_OPTIONS;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::state::{BookListOutcome, Focus};
use crate::components::point_in_rect;

impl<'a> App<'a> {
	/// Process a keyboard event and return a result if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BookListOutcome>> {
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(Some(self.outcome(false)));
			}
			KeyCode::Esc if self.sort_menu.open => {
				self.sort_menu.open = false;
			}
			KeyCode::Esc => {
				return Ok(Some(self.outcome(false)));
			}
			KeyCode::Tab => self.set_focus(self.focus.next()),
			KeyCode::BackTab => self.set_focus(self.focus.previous()),
			_ => match self.focus {
				Focus::Search => self.handle_search_key(key),
				Focus::Sort => self.handle_sort_key(key),
				Focus::Columns => self.handle_columns_key(key),
				Focus::Table => {
					if key.code == KeyCode::Enter {
						return Ok(Some(self.outcome(true)));
					}
					self.handle_table_key(key);
				}
			},
		}
		Ok(None)
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		if key.code == KeyCode::Enter {
			self.submit_search();
		} else if self.search_input.input(key) {
			self.sync_search_text();
		}
	}

	fn handle_sort_key(&mut self, key: KeyEvent) {
		if self.sort_menu.open {
			let last = SORT_OPTIONS.len() - 1;
			match key.code {
				KeyCode::Up => {
					self.sort_menu.highlighted = self.sort_menu.highlighted.saturating_sub(1);
				}
				KeyCode::Down => {
					self.sort_menu.highlighted = (self.sort_menu.highlighted + 1).min(last);
				}
				KeyCode::Enter | KeyCode::Char(' ') => {
					let selection = SORT_OPTIONS[self.sort_menu.highlighted].1.clone();
					self.sort_menu.open = false;
					self.select_sort(selection);
				}
				_ => {}
			}
			return;
		}

		match key.code {
			KeyCode::Left => self.cycle_sort(false),
			KeyCode::Right | KeyCode::Enter => self.cycle_sort(true),
			KeyCode::Down | KeyCode::Char(' ') => self.open_sort_menu(),
			_ => {}
		}
	}

	fn handle_columns_key(&mut self, key: KeyEvent) {
		let last = self.view.columns().order().len().saturating_sub(1);
		let cursor = self.column_cursor.min(last);
		match key.code {
			KeyCode::Left => self.column_cursor = cursor.saturating_sub(1),
			KeyCode::Right => self.column_cursor = (cursor + 1).min(last),
			KeyCode::Char(' ') | KeyCode::Enter => {
				if let Some(column) = self.view.columns().order().get(cursor).copied() {
					self.view.toggle_column(column);
				}
			}
			KeyCode::Char('<') if cursor > 0 => {
				self.view.swap_columns(cursor, cursor - 1);
				self.column_cursor = cursor - 1;
			}
			KeyCode::Char('>') if cursor < last => {
				self.view.swap_columns(cursor, cursor + 1);
				self.column_cursor = cursor + 1;
			}
			_ => {}
		}
	}

	fn handle_table_key(&mut self, key: KeyEvent) {
		let len = self.view.books().len();
		let page = self.results.page_size() as isize;
		match key.code {
			KeyCode::Up => self.results.move_selection(-1, len),
			KeyCode::Down => self.results.move_selection(1, len),
			KeyCode::PageUp => self.results.move_selection(-page, len),
			KeyCode::PageDown => self.results.move_selection(page, len),
			KeyCode::Home => self.results.select_first(len),
			KeyCode::End => self.results.select_last(len),
			_ => {}
		}
	}

	fn open_sort_menu(&mut self) {
		self.sort_menu.open = true;
		self.sort_menu.highlighted = self.view.sort().option_index().unwrap_or(0);
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);
		let len = self.view.books().len();

		match mouse.kind {
			MouseEventKind::ScrollUp if self.results.contains(column, row) => {
				self.results.move_selection(-1, len);
			}
			MouseEventKind::ScrollDown if self.results.contains(column, row) => {
				self.results.move_selection(1, len);
			}
			MouseEventKind::Down(MouseButton::Left) if self.sort_menu.open => {
				let picked = self
					.hits
					.sort_options
					.iter()
					.position(|area| point_in_rect(column, row, *area));
				self.sort_menu.open = false;
				if let Some(index) = picked {
					self.select_sort(SORT_OPTIONS[index].1.clone());
				}
			}
			MouseEventKind::Down(MouseButton::Left) => self.handle_click(column, row),
			MouseEventKind::Up(MouseButton::Left) => {
				if self.view.columns().drag_source().is_none() {
					return;
				}
				match self.results.header_at(column, row) {
					Some(target) => {
						self.view.drop_column(target.index);
					}
					None => self.view.cancel_column_drag(),
				}
			}
			_ => {}
		}
	}

	fn handle_click(&mut self, column: u16, row: u16) {
		if point_in_rect(column, row, self.hits.button) {
			self.set_focus(Focus::Search);
			self.submit_search();
		} else if point_in_rect(column, row, self.hits.input) {
			self.set_focus(Focus::Search);
		} else if point_in_rect(column, row, self.hits.sort_control) {
			self.set_focus(Focus::Sort);
			self.open_sort_menu();
		} else if let Some(&(_, target)) = self
			.hits
			.checkboxes
			.iter()
			.find(|(area, _)| point_in_rect(column, row, *area))
		{
			self.set_focus(Focus::Columns);
			if let Some(index) = self.view.columns().order().iter().position(|c| *c == target) {
				self.column_cursor = index;
			}
			self.view.toggle_column(target);
		} else if let Some(header) = self.results.header_at(column, row) {
			self.set_focus(Focus::Table);
			self.view.begin_column_drag(header.index);
		} else if let Some(index) = self.results.row_at(column, row, self.view.books().len()) {
			self.set_focus(Focus::Table);
			self.results.table_state.select(Some(index));
		}
	}
}
