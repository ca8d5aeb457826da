mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim();
	builtin_themes()
		.into_iter()
		.find(|registration| registration.matches(wanted))
		.map(|registration| registration.theme)
}

/// Names of every built-in theme, default first.
#[must_use]
pub fn names() -> Vec<String> {
	builtin_themes()
		.into_iter()
		.map(|registration| registration.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
