use booklist_catalog::{Column, ColumnLayout};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Argument bundle for the column checklist.
pub struct ChecklistContext<'a> {
	/// Text in front of the checkboxes.
	pub label: &'a str,
	pub columns: &'a ColumnLayout,
	/// Order index under the keyboard cursor.
	pub cursor: usize,
	/// Whether the checklist has keyboard focus.
	pub focused: bool,
	pub theme: &'a Theme,
}

/// Render `[x] title [x] cover ...` in column order.
///
/// Returns the clickable area of each checkbox with its column.
pub fn render_checklist(
	frame: &mut Frame,
	area: Rect,
	ctx: ChecklistContext<'_>,
) -> Vec<(Rect, Column)> {
	if area.width == 0 || area.height == 0 {
		return Vec::new();
	}

	let label = format!("{} ", ctx.label);
	let mut spans = vec![Span::styled(label.clone(), ctx.theme.header)];
	let mut hits = Vec::new();
	let mut x = area.x.saturating_add(label.width() as u16);

	for (index, column) in ctx.columns.order().iter().copied().enumerate() {
		let mark = if ctx.columns.is_visible(column) { 'x' } else { ' ' };
		let text = format!("[{mark}] {}", column.name());
		let width = text.width() as u16;
		let style = ctx
			.theme
			.focusable(ctx.theme.prompt, ctx.focused && index == ctx.cursor);

		let visible_width = width.min(area.right().saturating_sub(x));
		if visible_width > 0 {
			hits.push((Rect::new(x, area.y, visible_width, 1), column));
		}
		spans.push(Span::styled(text, style));
		spans.push(Span::raw("  "));
		x = x.saturating_add(width + 2);
	}

	frame
		.buffer_mut()
		.set_line(area.x, area.y, &Line::from(spans), area.width);
	hits
}
