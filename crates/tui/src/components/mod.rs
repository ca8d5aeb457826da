//! UI building blocks shared across rendering and state modules.

/// Column visibility checklist.
pub mod checklist;
/// Search row rendering and progress display.
pub mod prompt;
/// Table row construction.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Sort dropdown control and its option list.
pub mod sort;
/// Table rendering and header geometry.
pub mod tables;

pub use checklist::{ChecklistContext, render_checklist};
pub use prompt::{InputContext, ProgressState, PromptAreas, render_input};
pub use scrollbar::{point_in_rect, render_scrollbar};
pub use sort::{SortContext, render_sort_control, render_sort_menu};
pub use tables::{BookTable, HeaderCell, TableAreas, render_book_table};
