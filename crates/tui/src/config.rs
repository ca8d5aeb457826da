/// Text shown around the book list.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Dimmed text shown while the search box is empty.
	pub placeholder: String,
	/// Caption of the submit button.
	pub search_button: String,
	/// Label in front of the sort dropdown.
	pub sort_label: String,
	/// Label in front of the column checklist.
	pub columns_label: String,
	/// Text next to the spinner while a search is running.
	pub loading_label: String,
	/// Title of the bordered results table.
	pub table_title: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			placeholder: "Search Book e.g. Gatsby".to_string(),
			search_button: "Search".to_string(),
			sort_label: "Sort By".to_string(),
			columns_label: "Columns".to_string(),
			loading_label: "Searching".to_string(),
			table_title: "Books".to_string(),
		}
	}
}

impl UiLabels {
	/// Button caption wrapped in brackets as it is drawn.
	#[must_use]
	pub fn button_text(&self) -> String {
		format!("[ {} ]", self.search_button)
	}
}
