//! Core crate exports for building and running the `booklist` terminal
//! interface.
//!
//! The book list itself lives in [`booklist_tui`] and its domain types in
//! [`booklist_catalog`]; this crate adds the Open Library backend and the
//! process-level plumbing the binary needs.

pub mod app_dirs;
pub mod logging;
pub mod openlibrary;

pub use booklist_catalog::{Book, BookListView, Column, ColumnLayout, SortSelection};
pub use booklist_tui::{App, BookListOutcome, run};
pub use openlibrary::{OpenLibraryClient, OpenLibraryError};
