use booklist_catalog::{SORT_OPTIONS, SortSelection};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Argument bundle for the sort dropdown control.
pub struct SortContext<'a> {
	/// Text in front of the control.
	pub label: &'a str,
	/// Active selection.
	pub selection: &'a SortSelection,
	/// Whether the control has keyboard focus.
	pub focused: bool,
	/// Whether the option list is open.
	pub open: bool,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render `Sort By [ <label> ▾ ]` and return the clickable control area.
pub fn render_sort_control(frame: &mut Frame, area: Rect, ctx: SortContext<'_>) -> Rect {
	if area.width == 0 || area.height == 0 {
		return Rect::default();
	}

	let caret = if ctx.open { "▴" } else { "▾" };
	let label = format!("{} ", ctx.label);
	let control = format!("[ {} {caret} ]", ctx.selection.label());
	let control_style = ctx.theme.focusable(ctx.theme.prompt, ctx.focused);

	let line = Line::from(vec![
		Span::styled(label.clone(), ctx.theme.header),
		Span::styled(control.clone(), control_style),
	]);
	frame
		.buffer_mut()
		.set_line(area.x, area.y, &line, area.width);

	let control_x = area.x.saturating_add(label.width() as u16);
	let control_width = (control.width() as u16).min(area.right().saturating_sub(control_x));
	Rect::new(control_x, area.y, control_width, 1)
}

/// Render the open option list below `anchor`, clipped to `bounds`.
///
/// Returns one clickable row per entry of [`SORT_OPTIONS`], in order. Rows
/// that do not fit are returned empty.
pub fn render_sort_menu(
	frame: &mut Frame,
	anchor: Rect,
	bounds: Rect,
	highlighted: usize,
	selection: &SortSelection,
	theme: &Theme,
) -> Vec<Rect> {
	let inner_width = SORT_OPTIONS
		.iter()
		.map(|(label, _)| label.width() as u16 + 2)
		.max()
		.unwrap_or(0);
	let area = Rect {
		x: anchor.x,
		y: anchor.y.saturating_add(1),
		width: inner_width.saturating_add(2),
		height: SORT_OPTIONS.len() as u16 + 2,
	}
	.intersection(bounds);
	if area.is_empty() {
		return vec![Rect::default(); SORT_OPTIONS.len()];
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	let inner = block.inner(area);
	frame.render_widget(Clear, area);
	frame.render_widget(block, area);

	SORT_OPTIONS
		.iter()
		.enumerate()
		.map(|(index, (label, option))| {
			let row = Rect::new(inner.x, inner.y.saturating_add(index as u16), inner.width, 1);
			if row.bottom() > inner.bottom() || inner.width == 0 {
				return Rect::default();
			}
			let marker = if option == selection { "•" } else { " " };
			let style = if index == highlighted {
				theme.row_highlight
			} else {
				theme.prompt
			};
			frame.render_widget(
				Paragraph::new(format!("{marker} {label}")).style(style),
				row,
			);
			row
		})
		.collect()
}
