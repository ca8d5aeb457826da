use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use booklist::app_dirs;
use booklist::openlibrary::{DEFAULT_BASE_URL, DEFAULT_LIMIT};
use booklist_catalog::{Column, ColumnLayout, DEFAULT_COVER_HOST};
use serde::Deserialize;
use simplelog::LevelFilter;

use super::error::SettingsError;
use super::resolved::{ApiSettings, ResolvedConfig};
use crate::cli::CliArgs;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_THEME: &str = "slate";
const LOG_FILE_NAME: &str = "booklist.log";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	base_url: Option<String>,
	cover_host: Option<String>,
	limit: Option<usize>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	columns: Option<Vec<String>>,
	hidden_columns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.api.base_url = Some(url);
		}
		if let Some(host) = cli.cover_host.clone() {
			self.api.cover_host = Some(host);
		}
		if let Some(limit) = cli.limit {
			self.api.limit = Some(limit);
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(columns) = &cli.columns {
			self.ui.columns = Some(columns.clone());
		}
		if let Some(hidden) = &cli.hide {
			self.ui.hidden_columns = Some(hidden.clone());
		}
		if let Some(level) = cli.log_level.clone() {
			self.log.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.log.file = Some(file);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let limit = self.api.limit.unwrap_or(DEFAULT_LIMIT);
		if limit == 0 {
			return Err(SettingsError::ZeroLimit.into());
		}
		let timeout_secs = self.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
		if timeout_secs == 0 {
			return Err(SettingsError::ZeroTimeout.into());
		}
		let api = ApiSettings {
			base_url: self
				.api
				.base_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			cover_host: self
				.api
				.cover_host
				.map(|host| host.trim().trim_end_matches('/').to_string())
				.unwrap_or_else(|| DEFAULT_COVER_HOST.to_string()),
			limit,
			timeout: Duration::from_secs(timeout_secs),
		};

		let theme_name = self
			.ui
			.theme
			.map(|name| name.trim().to_ascii_lowercase())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = booklist_tui::theme_by_name(&theme_name).ok_or_else(|| {
			SettingsError::UnknownTheme {
				name: theme_name.clone(),
				available: booklist_tui::theme_names().join(", "),
			}
		})?;

		let order = parse_columns(self.ui.columns.unwrap_or_default())?;
		let hidden = parse_columns(self.ui.hidden_columns.unwrap_or_default())?;
		let columns = ColumnLayout::with_order(&order).hiding(&hidden);

		let level_name = self.log.level.unwrap_or_else(|| "info".to_string());
		let log_level = LevelFilter::from_str(level_name.trim())
			.map_err(|_| SettingsError::LogLevel(level_name.clone()))?;
		let log_file = self.log.file.unwrap_or_else(default_log_file);

		Ok(ResolvedConfig {
			api,
			theme_name,
			theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			columns,
			log_level,
			log_file,
		})
	}
}

fn parse_columns(names: Vec<String>) -> Result<Vec<Column>, SettingsError> {
	names
		.iter()
		.map(|name| name.trim())
		.filter(|name| !name.is_empty())
		.map(|name| Column::from_str(name).map_err(SettingsError::from))
		.collect()
}

fn default_log_file() -> PathBuf {
	match app_dirs::get_cache_dir() {
		Ok(dir) => dir.join(LOG_FILE_NAME),
		Err(_) => env::temp_dir().join(LOG_FILE_NAME),
	}
}
