//! Interactive terminal front-end for `booklist`.
//!
//! The crate renders a single book list component: a search row, a sort
//! dropdown, a column checklist and a table whose headers can be dragged to
//! swap columns. State lives in [`booklist_catalog::BookListView`]; the store
//! is injected as a [`booklist_catalog::BookActions`] capability plus a
//! receiver of [`booklist_catalog::StoreEvent`]s.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{App, BookListOutcome, Focus};
pub use config::UiLabels;
pub use input::QueryInput;
pub use runtime::run;
pub use style::{Theme, builtin_themes, by_name as theme_by_name, default_theme, names as theme_names};
