use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the book list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for table headers and borders.
	pub header: Style,
	/// Style for the selected table row.
	pub row_highlight: Style,
	/// Style for the search prompt and button.
	pub prompt: Style,
	/// Style for placeholders, hints and empty states.
	pub empty: Style,
	/// Style for the focused control.
	pub highlight: Style,
}

impl Theme {
	/// Returns the dimmed style used for placeholders and status text.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Returns the header style with a marker for a header being dragged.
	#[must_use]
	pub fn drag_source_style(&self) -> Style {
		self.header.add_modifier(Modifier::REVERSED)
	}

	/// Returns the border color derived from the header style.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::default().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Returns `base` with the focus highlight applied when `focused`.
	#[must_use]
	pub fn focusable(&self, base: Style, focused: bool) -> Style {
		if focused { base.patch(self.highlight) } else { base }
	}
}

/// Describes a theme instance that can be looked up by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring case.
	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
