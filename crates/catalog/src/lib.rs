//! Domain types shared by the `booklist` front-end and its store.
//!
//! Nothing in this crate touches the terminal or the network. The view state
//! is a plain record driven by transition functions, the store is a reducer
//! plus a worker thread, and the two meet through the [`BookActions`] seam.

pub mod book;
pub mod column;
pub mod error;
pub mod sort;
pub mod store;
pub mod view;

pub use book::{Book, DEFAULT_COVER_HOST};
pub use column::{Column, ColumnLayout};
pub use error::ParseColumnError;
pub use sort::{SORT_OPTIONS, SortDirection, SortSelection};
pub use store::{BookActions, BookSource, BookState, StoreEvent, StoreHandle};
pub use view::BookListView;
