//! Visual styling utilities.
//!
//! Themes are the color schemes applied to the book list. They are looked up
//! by name so configuration files and the command line can pick one.

/// Theme definitions and the built-in set.
pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};
