//! Single-line search box backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Search text input. Newlines are never inserted.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current text of the search box.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press to the text area. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input = Input::from(key);
		if matches!(input.key, Key::Enter | Key::Tab) {
			return false;
		}
		self.textarea.input(input)
	}

	/// Show or hide the cursor, depending on whether the box has focus.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_to_initial_text() {
		let mut input = QueryInput::new("Gats");
		assert!(input.input(press(KeyCode::Char('b'))));
		assert!(input.input(press(KeyCode::Char('y'))));
		assert_eq!(input.text(), "Gatsby");
	}

	#[test]
	fn enter_does_not_insert_a_line() {
		let mut input = QueryInput::new("Gatsby");
		assert!(!input.input(press(KeyCode::Enter)));
		assert_eq!(input.text(), "Gatsby");
	}

	#[test]
	fn backspace_edits_text() {
		let mut input = QueryInput::new("Emma!");
		assert!(input.input(press(KeyCode::Backspace)));
		assert_eq!(input.text(), "Emma");
	}
}
