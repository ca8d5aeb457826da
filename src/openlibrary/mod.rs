//! Open Library search backend for the book store.

mod client;
mod error;
mod wire;

pub use client::{DEFAULT_BASE_URL, DEFAULT_LIMIT, OpenLibraryClient};
pub use error::OpenLibraryError;
