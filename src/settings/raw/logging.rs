use std::env;
use std::path::PathBuf;

use log::LevelFilter;
use serde::Deserialize;

use seatview::app_dirs::AppDir;
use seatview::logging::{LOG_FILE_NAME, LogOptions, parse_level};

use crate::settings::resolved::{ConfigError, ConfigSources};

/// Logging options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LogSection {
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<LogOptions, ConfigError> {
		let level = match self.level {
			Some(value) => parse_level(&value).ok_or_else(|| {
				ConfigError::unrecognized(
					"log.level",
					value.clone(),
					sources.source_for_log_level(),
					"expected one of off, error, warn, info, debug, trace",
				)
			})?,
			None => LevelFilter::Info,
		};

		let file = self.file.unwrap_or_else(default_log_file);
		Ok(LogOptions { level, file })
	}
}

fn default_log_file() -> PathBuf {
	AppDir::Cache
		.file()
		.unwrap_or_else(|_| env::temp_dir().join(LOG_FILE_NAME))
}
