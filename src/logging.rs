//! File logging for the terminal front-end.
//!
//! The terminal belongs to the UI while it runs, so records go to a file
//! through `simplelog`.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Start logging at `level` into `path`, appending to any previous log.
///
/// `LevelFilter::Off` skips the logger entirely and no file is created.
pub fn initialize(level: LevelFilter, path: &Path) -> Result<()> {
	if level == LevelFilter::Off {
		return Ok(());
	}

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	WriteLogger::init(level, Config::default(), file).context("failed to install logger")?;
	log::info!("booklist {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
	Ok(())
}
