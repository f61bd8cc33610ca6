use std::time::Duration;

use seatview::ClientConfig;
use seatview::logging::LogOptions;
use seatview::ui::{TabId, ThemeMode};

use super::sources::ConfigLayer;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub api: ApiSettings,
	pub ui: UiSettings,
	pub log: LogOptions,
	/// Inputs that contributed, lowest precedence first. Empty means defaults.
	pub(crate) layers: Vec<ConfigLayer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
	pub base_url: String,
	pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
	/// Session theme; `None` keeps the saved preference.
	pub theme: Option<ThemeMode>,
	pub start_tab: TabId,
	pub toast_duration: Duration,
	pub compact_width: u16,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}

	pub fn client_config(&self) -> ClientConfig {
		let config = ClientConfig::new(self.api.base_url.clone());
		match self.api.timeout {
			Some(timeout) => config.with_timeout(timeout),
			None => config,
		}
	}
}
