//! Small key/value store for settings that survive restarts.
//!
//! Only the theme is persisted today. Values live in a flat JSON object inside
//! the data directory.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::app_dirs::AppDir;

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PreferenceError {
	#[error("failed to access preferences at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("preferences at {path} are not a JSON object of strings: {source}")]
	Format {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Persistent string values keyed by name.
pub trait PreferenceStore: Send {
	fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
	fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences stored as a JSON object on disk.
#[derive(Debug, Clone)]
pub struct FilePreferences {
	path: PathBuf,
}

impl FilePreferences {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Open the store at its default location in the data directory.
	pub fn in_data_dir() -> anyhow::Result<Self> {
		Ok(Self::new(AppDir::Data.file()?))
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
		let contents = match fs::read_to_string(&self.path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
			Err(source) => {
				return Err(PreferenceError::Io {
					path: self.path.clone(),
					source,
				});
			}
		};
		serde_json::from_str(&contents).map_err(|source| PreferenceError::Format {
			path: self.path.clone(),
			source,
		})
	}

	/// Write a sibling temp file and rename it over the store, so readers only
	/// ever see a complete file.
	fn replace_contents(&self, data: &[u8]) -> io::Result<()> {
		let tmp_path = self.path.with_extension("tmp");
		{
			let mut file = fs::File::create(&tmp_path)?;
			file.write_all(data)?;
			file.sync_all().ok();
		}
		fs::rename(&tmp_path, &self.path).inspect_err(|_| {
			let _ = fs::remove_file(&tmp_path);
		})
	}

	fn io_error(&self, source: io::Error) -> PreferenceError {
		PreferenceError::Io {
			path: self.path.clone(),
			source,
		}
	}
}

impl PreferenceStore for FilePreferences {
	fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
		Ok(self.read()?.remove(key))
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
		// A corrupt file is replaced rather than blocking every future write.
		let mut values = match self.read() {
			Ok(values) => values,
			Err(PreferenceError::Format { .. }) => BTreeMap::new(),
			Err(err) => return Err(err),
		};
		values.insert(key.to_owned(), value.to_owned());

		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
		}
		let serialized = serde_json::to_string_pretty(&values).map_err(|source| {
			PreferenceError::Format {
				path: self.path.clone(),
				source,
			}
		})?;
		self.replace_contents(serialized.as_bytes())
			.map_err(|source| self.io_error(source))
	}
}

/// In-memory store used when no data directory is available and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
	values: BTreeMap<String, String>,
}

impl MemoryPreferences {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with(mut self, key: &str, value: &str) -> Self {
		self.values.insert(key.to_owned(), value.to_owned());
		self
	}
}

impl PreferenceStore for MemoryPreferences {
	fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
		Ok(self.values.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
		self.values.insert(key.to_owned(), value.to_owned());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn missing_file_reads_as_empty() {
		let dir = tempdir().unwrap();
		let store = FilePreferences::new(dir.path().join(PREFERENCES_FILE));
		assert_eq!(store.get("theme").unwrap(), None);
	}

	#[test]
	fn values_round_trip_through_disk() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("nested").join(PREFERENCES_FILE);
		let mut store = FilePreferences::new(&path);

		store.set("theme", "dark").unwrap();
		store.set("other", "value").unwrap();

		let reopened = FilePreferences::new(&path);
		assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
		assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
	}

	#[test]
	fn corrupt_file_reports_format_error_and_is_replaced_on_write() {
		let dir = tempdir().unwrap();
		let path = dir.path().join(PREFERENCES_FILE);
		fs::write(&path, "not json").unwrap();
		let mut store = FilePreferences::new(&path);

		assert!(matches!(
			store.get("theme"),
			Err(PreferenceError::Format { .. })
		));

		store.set("theme", "light").unwrap();
		assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
	}

	#[test]
	fn write_replaces_file_without_leaving_temp_behind() {
		let dir = tempdir().unwrap();
		let path = dir.path().join(PREFERENCES_FILE);
		let tmp_path = path.with_extension("tmp");
		fs::write(&path, r#"{"theme":"light"}"#).unwrap();
		fs::write(&tmp_path, "half-written").unwrap();
		let mut store = FilePreferences::new(&path);

		store.set("theme", "dark").unwrap();

		assert!(!tmp_path.exists());
		let on_disk: BTreeMap<String, String> =
			serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(on_disk.get("theme").map(String::as_str), Some("dark"));
	}
}
