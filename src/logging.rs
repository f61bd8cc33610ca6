//! File-backed logging for the terminal client.
//!
//! The terminal UI owns stdout, so log records are appended to a file instead.
//! Call sites use the `log` macros; [`initialize`] installs `env_logger` as the
//! backend.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Environment variable holding an `env_logger` filter that overrides the
/// configured level.
pub const LOG_FILTER_ENV: &str = "SEATVIEW_LOG";

/// Default log file name inside the cache directory.
pub const LOG_FILE_NAME: &str = "seatview.log";

#[derive(Debug, Clone)]
pub struct LogOptions {
	pub level: LevelFilter,
	pub file: PathBuf,
}

/// Install the global logger, appending to `options.file`.
pub fn initialize(options: &LogOptions) -> Result<()> {
	let file = open_log_file(&options.file)?;

	Builder::new()
		.filter_level(options.level)
		.parse_env(Env::new().filter(LOG_FILTER_ENV))
		.target(Target::Pipe(Box::new(file)))
		.format_timestamp_millis()
		.try_init()
		.context("a global logger is already installed")?;

	log::info!(
		"seatview {} logging at {}",
		env!("CARGO_PKG_VERSION"),
		options.level
	);
	Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

/// Parse a textual level such as `info` or `debug`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	value.trim().parse().ok()
}
