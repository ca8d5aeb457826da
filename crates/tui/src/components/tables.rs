use booklist_catalog::{Book, Column, ColumnLayout};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::components::render_scrollbar;
use crate::components::rows::build_book_rows;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Everything needed to draw the book table.
pub struct BookTable<'a> {
	/// Books in display order.
	pub books: &'a [Book],
	/// Column order, visibility and any pending header drag.
	pub columns: &'a ColumnLayout,
	/// Host used to build cover thumbnail URLs.
	pub cover_host: &'a str,
	/// When set, the body shows a spinner instead of rows.
	pub loading: bool,
	/// Text next to the spinner.
	pub loading_label: &'a str,
	/// Title of the bordered block.
	pub title: &'a str,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
	/// Whether the table has keyboard focus.
	pub focused: bool,
}

/// A rendered header cell, used to hit-test drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCell {
	/// Screen area of the header text.
	pub area: Rect,
	/// Position of the column in the full column order.
	pub index: usize,
	pub column: Column,
}

/// Screen regions produced by [`render_book_table`].
#[derive(Debug, Clone, Default)]
pub struct TableAreas {
	/// Area holding the data rows.
	pub body: Rect,
	/// Header cells of the visible columns, left to right.
	pub headers: Vec<HeaderCell>,
}

/// Width constraint for a column.
#[must_use]
pub fn column_width(column: Column) -> Constraint {
	match column {
		Column::Title | Column::Cover => Constraint::Fill(3),
		Column::Author | Column::PublishDate => Constraint::Fill(2),
	}
}

/// Lay out header cells for `visible` columns within a table row `area`.
///
/// Mirrors the way [`Table`] splits its width: the highlight symbol column
/// first, then the column constraints separated by [`TABLE_COLUMN_SPACING`].
#[must_use]
pub fn header_cells(area: Rect, visible: &[(usize, Column)]) -> Vec<HeaderCell> {
	if visible.is_empty() || area.width == 0 || area.height == 0 {
		return Vec::new();
	}

	let highlight_width = HIGHLIGHT_SYMBOL.width() as u16;
	let [_selection, columns_area] =
		Layout::horizontal([Constraint::Length(highlight_width), Constraint::Fill(0)])
			.areas(Rect { height: 1, ..area });

	let rects = Layout::horizontal(visible.iter().map(|(_, column)| column_width(*column)))
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area);

	visible
		.iter()
		.zip(rects.iter())
		.map(|(&(index, column), rect)| HeaderCell {
			area: *rect,
			index,
			column,
		})
		.collect()
}

/// Render the bordered book table and report where its parts landed.
pub fn render_book_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	table: BookTable<'_>,
	theme: &Theme,
) -> TableAreas {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.focusable(theme.border_style(), table.focused))
		.title(table.title.to_string());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let visible = table.columns.visible_columns();

	let available_rows = inner.height.saturating_sub(TABLE_HEADER_ROWS) as usize;
	let row_count = if table.loading { 0 } else { table.books.len() };
	let needs_scrollbar = available_rows > 0 && row_count > available_rows;

	let table_area = if needs_scrollbar {
		*scrollbar_state = ScrollbarState::new(row_count)
			.viewport_content_length(available_rows)
			.position(table_state.selected().unwrap_or(0));
		render_scrollbar(frame, inner, scrollbar_state, theme)
	} else {
		*scrollbar_state = ScrollbarState::default();
		inner
	};

	let header = Row::new(visible.iter().map(|&(index, column)| {
		let style = if table.columns.drag_source() == Some(index) {
			theme.drag_source_style()
		} else {
			theme.header
		};
		Cell::from(column.name()).style(style)
	}))
	.style(theme.header)
	.height(1)
	.bottom_margin(1);

	let rows = if table.loading {
		Vec::new()
	} else {
		build_book_rows(table.books, &visible, table.cover_host)
	};
	let widths: Vec<Constraint> = visible
		.iter()
		.map(|(_, column)| column_width(*column))
		.collect();

	let widget = Table::new(rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(widget, table_area, table_state);
	render_header_separator(frame, table_area, theme, 1);

	let body = Rect {
		y: table_area.y.saturating_add(TABLE_HEADER_ROWS),
		height: table_area.height.saturating_sub(TABLE_HEADER_ROWS),
		..table_area
	};

	if table.loading {
		render_loading(frame, body, table.loading_label, table.throbber_state, theme);
	} else if visible.is_empty() {
		render_message(frame, body, "No columns selected", theme);
	} else if table.books.is_empty() {
		render_message(frame, body, "No results", theme);
	}

	TableAreas {
		body,
		headers: header_cells(table_area, &visible),
	}
}

fn render_loading(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.height == 0 || area.width == 0 {
		return;
	}
	let style = theme.empty_style();
	let spinner = Throbber::default().style(style).throbber_style(style);
	let line = Line::from(vec![
		spinner.to_symbol_span(throbber_state),
		Span::styled(label.to_string(), style),
	]);
	let paragraph = Paragraph::new(line).alignment(Alignment::Center);
	frame.render_widget(paragraph, Rect { height: 1, ..area });
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	if area.height == 0 || area.width == 0 {
		return;
	}
	let paragraph = Paragraph::new(message)
		.alignment(Alignment::Center)
		.style(theme.empty_style());
	frame.render_widget(paragraph, Rect { height: 1, ..area });
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let sep_y = area.y + header_height;

	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle_span = Span::styled("─".repeat(width - 2), theme.border_style());
	let spans = vec![Span::raw(" "), middle_span, Span::raw(" ")];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_cells_skip_the_highlight_gutter() {
		let area = Rect::new(1, 1, 42, 10);
		let visible = [(0, Column::Title), (2, Column::Author)];
		let cells = header_cells(area, &visible);

		assert_eq!(cells.len(), 2);
		assert_eq!(cells[0].area.x, 1 + HIGHLIGHT_SYMBOL.width() as u16);
		assert_eq!(cells[0].area.y, 1);
		assert_eq!(cells[0].area.height, 1);
		assert_eq!(cells[1].index, 2);
		assert!(cells[1].area.x > cells[0].area.x + cells[0].area.width);
	}

	#[test]
	fn no_visible_columns_means_no_header_cells() {
		assert!(header_cells(Rect::new(0, 0, 40, 5), &[]).is_empty());
	}
}
