use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

const PROMPT_SYMBOL: &str = "> ";

/// Argument bundle for rendering the search row.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a QueryInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: &'a str,
	/// Caption of the submit button, brackets included.
	pub button: &'a str,
	/// Whether the search box has keyboard focus.
	pub focused: bool,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Progress information for the prompt progress indicator.
pub struct ProgressState<'a> {
	/// Text describing the progress state.
	pub progress_text: &'a str,
	/// Whether the operation is complete.
	pub progress_complete: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Where the clickable parts of the search row ended up.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAreas {
	pub input: Rect,
	pub button: Rect,
}

/// Render the search row: prompt, text input, progress and submit button.
pub fn render_input(
	frame: &mut Frame,
	input: InputContext<'_>,
	progress: ProgressState<'_>,
) -> PromptAreas {
	let InputContext {
		search_input,
		placeholder,
		button,
		focused,
		area,
		theme,
	} = input;
	let ProgressState {
		progress_text,
		progress_complete,
		throbber_state,
	} = progress;

	let button_width = button.width() as u16;
	let [prompt_area, input_area, _gap, button_area] = Layout::horizontal([
		Constraint::Length(PROMPT_SYMBOL.width() as u16),
		Constraint::Min(1),
		Constraint::Length(1),
		Constraint::Length(button_width),
	])
	.areas(Rect { height: 1, ..area });

	frame.buffer_mut().set_line(
		prompt_area.x,
		prompt_area.y,
		&Line::from(Span::styled(
			PROMPT_SYMBOL,
			theme.focusable(theme.prompt, focused),
		)),
		prompt_area.width,
	);

	search_input.render_textarea(frame, input_area);

	if search_input.text().is_empty() {
		render_placeholder(frame, input_area, placeholder, theme);
	}

	render_progress(
		frame,
		input_area,
		progress_text,
		progress_complete,
		throbber_state,
		theme,
	);

	frame.buffer_mut().set_line(
		button_area.x,
		button_area.y,
		&Line::from(Span::styled(button.to_string(), theme.prompt)),
		button_area.width,
	);

	PromptAreas {
		input: input_area,
		button: button_area,
	}
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let dimmed_style = theme.empty_style();
	let available_width = area.width as usize;
	let display_text: String = text.chars().take(available_width).collect();
	let buffer = frame.buffer_mut();
	// Leave the first cell for the cursor.
	buffer.set_line(
		area.left().saturating_add(1),
		area.top(),
		&Line::from(Span::styled(display_text, dimmed_style)),
		area.width.saturating_sub(1),
	);
}

fn render_progress(
	frame: &mut Frame,
	area: Rect,
	progress_text: &str,
	progress_complete: bool,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 || progress_text.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let label_span = Span::styled(progress_text.to_string(), muted_style);
	let mut line = Line::default();
	if !progress_complete {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(label_span);

	let line_width = line.width() as u16;
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Never draw over text already in the input row.
	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}

	if let Some(last_x) = last_char_x {
		let min_start = last_x.saturating_add(3);
		if min_start > start_x {
			start_x = min_start;
		}
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area
		.right()
		.saturating_sub(start_x)
		.min(line_width)
		.min(area.width);
	if max_width == 0 {
		return;
	}

	buffer.set_line(start_x, input_row, &line, max_width);
}
