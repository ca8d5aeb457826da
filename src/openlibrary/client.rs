use std::time::Duration;

use anyhow::Result;
use booklist_catalog::{Book, BookSource};
use reqwest::blocking::Client;

use super::error::OpenLibraryError;
use super::wire::SearchResponse;

pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
pub const DEFAULT_LIMIT: usize = 50;

/// Blocking client for `GET <base>/search.json?q=<query>&limit=<n>`.
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
	http: Client,
	search_url: String,
	limit: usize,
}

impl OpenLibraryClient {
	pub fn new(base_url: &str, limit: usize, timeout: Duration) -> Result<Self, OpenLibraryError> {
		let search_url = search_url(base_url)?;
		let http = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("booklist/", env!("CARGO_PKG_VERSION")))
			.build()?;
		Ok(Self {
			http,
			search_url,
			limit,
		})
	}

	#[must_use]
	pub fn search_url(&self) -> &str {
		&self.search_url
	}

	/// Run one search. A blank query returns no books without a request.
	pub fn fetch(&self, query: &str) -> Result<Vec<Book>, OpenLibraryError> {
		if query.trim().is_empty() {
			log::debug!("blank query; skipping Open Library request");
			return Ok(Vec::new());
		}

		let limit = self.limit.to_string();
		let response = self
			.http
			.get(&self.search_url)
			.query(&[("q", query), ("limit", limit.as_str())])
			.send()?;

		let status = response.status();
		if !status.is_success() {
			return Err(OpenLibraryError::Http {
				status: status.as_u16(),
				url: response.url().to_string(),
			});
		}

		let body: SearchResponse = response.json().map_err(OpenLibraryError::Decode)?;
		Ok(body.docs.into_iter().map(Book::from).collect())
	}
}

impl BookSource for OpenLibraryClient {
	fn search(&self, query: &str) -> Result<Vec<Book>> {
		Ok(self.fetch(query)?)
	}
}

fn search_url(base_url: &str) -> Result<String, OpenLibraryError> {
	let base = base_url.trim().trim_end_matches('/');
	if !(base.starts_with("http://") || base.starts_with("https://")) {
		return Err(OpenLibraryError::InvalidUrl(base_url.to_string()));
	}
	Ok(format!("{base}/search.json"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn search_url_is_built_from_base() {
		assert_eq!(
			search_url("https://openlibrary.org/").expect("url"),
			"https://openlibrary.org/search.json"
		);
		assert!(matches!(
			search_url("openlibrary.org"),
			Err(OpenLibraryError::InvalidUrl(_))
		));
	}

	#[test]
	fn blank_query_short_circuits() {
		let client = OpenLibraryClient::new("http://127.0.0.1:9", 5, Duration::from_millis(10))
			.expect("client");
		assert!(client.fetch("   ").expect("blank").is_empty());
	}
}
