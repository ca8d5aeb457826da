use std::path::PathBuf;
use std::time::Duration;

use booklist_catalog::{Column, ColumnLayout};
use booklist_tui::Theme;
use simplelog::LevelFilter;

/// Where and how to reach the search API.
#[derive(Debug, Clone)]
pub struct ApiSettings {
	pub base_url: String,
	/// Host for cover thumbnails, without a trailing slash.
	pub cover_host: String,
	pub limit: usize,
	pub timeout: Duration,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub api: ApiSettings,
	pub theme_name: String,
	pub theme: Theme,
	pub initial_query: String,
	pub columns: ColumnLayout,
	pub log_level: LevelFilter,
	pub log_file: PathBuf,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  API: {}", self.api.base_url);
		println!("  Cover host: {}", self.api.cover_host);
		println!("  Result limit: {}", self.api.limit);
		println!("  Timeout: {}s", self.api.timeout.as_secs());
		println!("  UI theme: {}", self.theme_name);
		println!("  Columns: {}", describe_columns(&self.columns));
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Log level: {}", self.log_level);
		println!("  Log file: {}", self.log_file.display());
	}
}

/// Column order with hidden columns in parentheses.
fn describe_columns(columns: &ColumnLayout) -> String {
	columns
		.order()
		.iter()
		.map(|column: &Column| {
			if columns.is_visible(*column) {
				column.name().to_string()
			} else {
				format!("({})", column.name())
			}
		})
		.collect::<Vec<_>>()
		.join(", ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hidden_columns_are_parenthesised() {
		let columns = ColumnLayout::with_order(&[Column::Author]).hiding(&[Column::Cover]);
		assert_eq!(
			describe_columns(&columns),
			"author, title, (cover), publishDate"
		);
	}
}
