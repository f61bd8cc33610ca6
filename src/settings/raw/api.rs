use std::time::Duration;

use serde::Deserialize;

use crate::cli::CliArgs;
use crate::settings::resolved::ApiSettings;

pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Seating service connection options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
	}

	pub(super) fn resolve(self) -> ApiSettings {
		let base_url = self
			.base_url
			.map(|url| url.trim().to_owned())
			.filter(|url| !url.is_empty())
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

		ApiSettings {
			base_url,
			timeout: self.timeout_secs.map(Duration::from_secs),
		}
	}
}
