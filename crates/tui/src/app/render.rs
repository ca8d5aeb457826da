use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use super::App;
use super::state::Focus;
use crate::components::{
	BookTable, ChecklistContext, InputContext, ProgressState, SortContext, render_book_table,
	render_checklist, render_input, render_sort_control, render_sort_menu,
};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let bounds = frame.area();
		let area = bounds.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let [search_area, sort_area, columns_area, table_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
		])
		.areas(area);

		self.search_input.set_focused(self.focus == Focus::Search);
		let progress_text = self.progress_text();
		let button = self.ui.button_text();
		let prompt = render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				placeholder: &self.ui.placeholder,
				button: &button,
				focused: self.focus == Focus::Search,
				area: search_area,
				theme: &self.theme,
			},
			ProgressState {
				progress_text: &progress_text,
				progress_complete: !self.view.is_loading(),
				throbber_state: &self.throbber_state,
			},
		);
		self.hits.input = prompt.input;
		self.hits.button = prompt.button;

		self.hits.sort_control = render_sort_control(
			frame,
			sort_area,
			SortContext {
				label: &self.ui.sort_label,
				selection: self.view.sort(),
				focused: self.focus == Focus::Sort,
				open: self.sort_menu.open,
				theme: &self.theme,
			},
		);

		self.hits.checkboxes = render_checklist(
			frame,
			columns_area,
			ChecklistContext {
				label: &self.ui.columns_label,
				columns: self.view.columns(),
				cursor: self.column_cursor,
				focused: self.focus == Focus::Columns,
				theme: &self.theme,
			},
		);

		self.results.area = Some(table_area);
		self.results.areas = render_book_table(
			frame,
			table_area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			BookTable {
				books: self.view.books(),
				columns: self.view.columns(),
				cover_host: &self.cover_host,
				loading: self.view.is_loading(),
				loading_label: &self.ui.loading_label,
				title: &self.ui.table_title,
				throbber_state: &self.throbber_state,
				focused: self.focus == Focus::Table,
			},
			&self.theme,
		);

		self.hits.sort_options = if self.sort_menu.open {
			render_sort_menu(
				frame,
				self.hits.sort_control,
				bounds,
				self.sort_menu.highlighted,
				self.view.sort(),
				&self.theme,
			)
		} else {
			Vec::new()
		};
	}

	fn progress_text(&self) -> String {
		if self.view.is_loading() {
			return self.ui.loading_label.clone();
		}
		match self.view.books().len() {
			1 => "1 book".to_string(),
			count => format!("{count} books"),
		}
	}
}
