use booklist_catalog::ParseColumnError;
use thiserror::Error;

/// A configuration value that was read but cannot be used.
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("unknown theme '{name}' (available: {available})")]
	UnknownTheme { name: String, available: String },

	#[error(transparent)]
	Column(#[from] ParseColumnError),

	#[error("invalid log level '{0}' (expected off, error, warn, info, debug or trace)")]
	LogLevel(String),

	#[error("api.limit must be at least 1")]
	ZeroLimit,

	#[error("api.timeout_secs must be at least 1")]
	ZeroTimeout,
}
