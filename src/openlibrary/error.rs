/// Failures talking to the Open Library search API.
#[derive(Debug, thiserror::Error)]
pub enum OpenLibraryError {
	/// The configured base URL cannot be used.
	#[error("invalid Open Library URL: {0}")]
	InvalidUrl(String),

	/// Non-success status from the API.
	#[error("HTTP {status} from {url}")]
	Http { status: u16, url: String },

	/// Transport failure, including timeouts.
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	/// The response body was not the expected JSON.
	#[error("failed to decode search response: {0}")]
	Decode(#[source] reqwest::Error),
}
