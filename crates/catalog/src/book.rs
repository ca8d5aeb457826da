use serde::{Deserialize, Serialize};

/// Host serving Open Library cover thumbnails.
pub const DEFAULT_COVER_HOST: &str = "http://covers.openlibrary.org";

/// A single search hit as delivered by the store.
///
/// Every field tolerates being absent on the wire; missing values render as
/// empty cells. An empty `publish_date` means the date is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
	pub title: String,
	pub cover: Option<String>,
	pub author: String,
	pub publish_date: String,
}

impl Book {
	/// Create a [`Book`] with a title and publish date and no other details.
	#[must_use]
	pub fn new(title: impl Into<String>, publish_date: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			publish_date: publish_date.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_author(mut self, author: impl Into<String>) -> Self {
		self.author = author.into();
		self
	}

	#[must_use]
	pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
		self.cover = Some(cover.into());
		self
	}

	/// Build the small cover image URL for this book, if it has a cover id.
	#[must_use]
	pub fn cover_url(&self, host: &str) -> Option<String> {
		let cover = self.cover.as_deref().filter(|id| !id.is_empty())?;
		Some(format!("{}/b/id/{cover}-S.jpg", host.trim_end_matches('/')))
	}

	/// Whether the publish date is known.
	#[must_use]
	pub fn has_publish_date(&self) -> bool {
		!self.publish_date.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cover_url_follows_small_thumbnail_template() {
		let book = Book::new("Gatsby", "").with_cover("8432047");
		assert_eq!(
			book.cover_url(DEFAULT_COVER_HOST).as_deref(),
			Some("http://covers.openlibrary.org/b/id/8432047-S.jpg")
		);
		assert_eq!(
			book.cover_url("https://covers.example/").as_deref(),
			Some("https://covers.example/b/id/8432047-S.jpg")
		);
	}

	#[test]
	fn missing_cover_yields_no_url() {
		assert_eq!(Book::new("Gatsby", "").cover_url(DEFAULT_COVER_HOST), None);
		let empty = Book::new("Gatsby", "").with_cover("");
		assert_eq!(empty.cover_url(DEFAULT_COVER_HOST), None);
	}

	#[test]
	fn missing_fields_deserialize_as_empty() {
		let book: Book = serde_json::from_str(r#"{"title":"Emma"}"#).unwrap();
		assert_eq!(book.title, "Emma");
		assert_eq!(book.author, "");
		assert!(!book.has_publish_date());
		assert_eq!(book.cover, None);

		let dated: Book = serde_json::from_str(r#"{"publishDate":"1815"}"#).unwrap();
		assert_eq!(dated.publish_date, "1815");
	}
}
