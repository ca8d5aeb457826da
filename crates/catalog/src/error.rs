use thiserror::Error;

/// Raised when a column name from configuration does not match any of the
/// four fixed columns.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown column '{name}' (expected one of: title, cover, author, publishDate)")]
pub struct ParseColumnError {
	pub name: String,
}
