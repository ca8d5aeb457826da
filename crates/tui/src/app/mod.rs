//! Core application state and behavior for the book list.
//!
//! The [`App`] type aggregates the view state, the last store snapshot and
//! UI-only state such as focus and hit areas. Supporting modules split the
//! implementation into input handling, rendering and the results table.

mod actions;
mod render;
mod results;
mod state;
#[cfg(test)]
mod tests;

pub use state::{App, BookListOutcome, Focus};
