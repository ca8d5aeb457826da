//! Response shapes of `/search.json`.

use booklist_catalog::Book;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchResponse {
	pub docs: Vec<SearchDoc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchDoc {
	title: Option<String>,
	cover_i: Option<i64>,
	author_name: Vec<String>,
	publish_date: Vec<String>,
	first_publish_year: Option<i32>,
}

impl From<SearchDoc> for Book {
	fn from(doc: SearchDoc) -> Self {
		let publish_date = doc
			.publish_date
			.into_iter()
			.next()
			.or_else(|| doc.first_publish_year.map(|year| year.to_string()))
			.unwrap_or_default();

		let mut book =
			Book::new(doc.title.unwrap_or_default(), publish_date).with_author(doc.author_name.join(", "));
		if let Some(cover) = doc.cover_i {
			book = book.with_cover(cover.to_string());
		}
		book
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn docs_map_onto_books() {
		let body = r#"{
			"numFound": 2,
			"docs": [
				{
					"title": "The Great Gatsby",
					"cover_i": 10590366,
					"author_name": ["F. Scott Fitzgerald"],
					"publish_date": ["April 10, 1925", "2004"],
					"first_publish_year": 1925
				},
				{
					"title": "Gatsby Annotated",
					"author_name": ["A", "B"],
					"first_publish_year": 2000
				}
			]
		}"#;
		let response: SearchResponse = serde_json::from_str(body).expect("parse");
		let books: Vec<Book> = response.docs.into_iter().map(Book::from).collect();

		assert_eq!(books[0].title, "The Great Gatsby");
		assert_eq!(books[0].cover.as_deref(), Some("10590366"));
		assert_eq!(books[0].publish_date, "April 10, 1925");
		assert_eq!(books[1].author, "A, B");
		assert_eq!(books[1].cover, None);
		assert_eq!(books[1].publish_date, "2000");
	}

	#[test]
	fn missing_fields_become_empty() {
		let response: SearchResponse = serde_json::from_str(r#"{"docs":[{}]}"#).expect("parse");
		let book = Book::from(response.docs.into_iter().next().expect("doc"));
		assert_eq!(book, Book::new("", ""));
	}
}
