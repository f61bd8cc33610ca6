//! Where seatview keeps its files on disk.
//!
//! seatview owns exactly three files: `config.toml` in the config directory,
//! the theme preference in the data directory and the log in the cache
//! directory. Each directory can be redirected with its `SEATVIEW_*_DIR`
//! variable; otherwise the platform layout from `directories` applies.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::logging::LOG_FILE_NAME;
use crate::preferences::PREFERENCES_FILE;

/// Name of the user-level configuration file inside [`AppDir::Config`].
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
	Config,
	Data,
	Cache,
}

impl AppDir {
	pub const ALL: [AppDir; 3] = [AppDir::Config, AppDir::Data, AppDir::Cache];

	/// Environment variable that replaces the platform directory.
	#[must_use]
	pub fn override_var(self) -> &'static str {
		match self {
			AppDir::Config => "SEATVIEW_CONFIG_DIR",
			AppDir::Data => "SEATVIEW_DATA_DIR",
			AppDir::Cache => "SEATVIEW_CACHE_DIR",
		}
	}

	/// The file seatview keeps in this directory.
	#[must_use]
	pub fn file_name(self) -> &'static str {
		match self {
			AppDir::Config => CONFIG_FILE,
			AppDir::Data => PREFERENCES_FILE,
			AppDir::Cache => LOG_FILE_NAME,
		}
	}

	fn dir(self) -> Result<PathBuf> {
		self.dir_with(|name| env::var_os(name))
	}

	/// Full path of [`AppDir::file_name`] inside this directory.
	pub fn file(self) -> Result<PathBuf> {
		Ok(self.dir()?.join(self.file_name()))
	}

	/// An empty override counts as unset.
	fn dir_with(self, lookup: impl Fn(&str) -> Option<OsString>) -> Result<PathBuf> {
		if let Some(dir) = lookup(self.override_var()).filter(|value| !value.is_empty()) {
			return Ok(PathBuf::from(dir));
		}

		let dirs = ProjectDirs::from("io", "seatview", "seatview")
			.with_context(|| format!("no home directory to hold the seatview {self} directory"))?;
		let dir = match self {
			AppDir::Config => dirs.config_local_dir(),
			AppDir::Data => dirs.data_local_dir(),
			AppDir::Cache => dirs.cache_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

impl fmt::Display for AppDir {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			AppDir::Config => "config",
			AppDir::Data => "data",
			AppDir::Cache => "cache",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn override_variable_replaces_platform_directory() {
		let dir = AppDir::Data
			.dir_with(|name| (name == "SEATVIEW_DATA_DIR").then(|| OsString::from("/srv/seatview")))
			.unwrap();
		assert_eq!(dir, PathBuf::from("/srv/seatview"));
	}

	#[test]
	fn empty_override_falls_back_to_platform_directory() {
		let Ok(dir) = AppDir::Cache.dir_with(|_| Some(OsString::new())) else {
			return;
		};
		assert_ne!(dir, PathBuf::new());
		assert!(dir.to_string_lossy().contains("seatview"));
	}

	#[test]
	fn each_directory_holds_its_own_file() {
		let names: Vec<_> = AppDir::ALL.iter().map(|dir| dir.file_name()).collect();
		assert_eq!(names, [CONFIG_FILE, PREFERENCES_FILE, LOG_FILE_NAME]);
		let vars: Vec<_> = AppDir::ALL.iter().map(|dir| dir.override_var()).collect();
		assert_eq!(vars, ["SEATVIEW_CONFIG_DIR", "SEATVIEW_DATA_DIR", "SEATVIEW_CACHE_DIR"]);
	}
}
