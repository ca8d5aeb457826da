use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::types::{Theme, ThemeRegistration};

/// Get the default built-in theme.
pub fn default_theme() -> Theme {
	slate()
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration::new("slate", slate()).alias("dark"),
		ThemeRegistration::new("light", light()).alias("day"),
	]
}

fn slate() -> Theme {
	Theme {
		header: Style::new().fg(Color::Rgb(148, 163, 184)).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().bg(Color::Rgb(51, 65, 85)).fg(Color::Rgb(241, 245, 249)),
		prompt: Style::new().fg(Color::Rgb(125, 211, 252)),
		empty: Style::new().fg(Color::Rgb(100, 116, 139)),
		highlight: Style::new().fg(Color::Rgb(250, 204, 21)).add_modifier(Modifier::BOLD),
	}
}

fn light() -> Theme {
	Theme {
		header: Style::new().fg(Color::Rgb(30, 41, 59)).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().bg(Color::Rgb(226, 232, 240)).fg(Color::Rgb(15, 23, 42)),
		prompt: Style::new().fg(Color::Rgb(3, 105, 161)),
		empty: Style::new().fg(Color::Rgb(148, 163, 184)),
		highlight: Style::new().fg(Color::Rgb(194, 65, 12)).add_modifier(Modifier::BOLD),
	}
}
