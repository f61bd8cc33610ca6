use std::time::Duration;

use serde::Deserialize;

use seatview::ui::tabs::DEFAULT_COMPACT_WIDTH;
use seatview::ui::{TabId, ThemeMode};

use crate::cli::CliArgs;
use crate::settings::resolved::{ConfigError, ConfigSources, UiSettings};

const DEFAULT_TOAST_MS: u64 = 3000;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) start_tab: Option<String>,
	pub(super) toast_ms: Option<u64>,
	pub(super) compact_width: Option<u16>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme {
			self.theme = Some(theme.as_str().to_owned());
		}
		if let Some(tab) = cli.tab {
			self.start_tab = Some(tab.as_str().to_owned());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<UiSettings, ConfigError> {
		let theme = match self.theme {
			Some(value) => Some(value.parse::<ThemeMode>().map_err(|reason| {
				ConfigError::unrecognized("ui.theme", value.clone(), sources.source_for_theme(), reason)
			})?),
			None => None,
		};

		let start_tab = match self.start_tab {
			Some(value) => value.parse::<TabId>().map_err(|reason| {
				ConfigError::unrecognized(
					"ui.start_tab",
					value.clone(),
					sources.source_for_start_tab(),
					reason,
				)
			})?,
			None => TabId::default(),
		};

		Ok(UiSettings {
			theme,
			start_tab,
			toast_duration: Duration::from_millis(self.toast_ms.unwrap_or(DEFAULT_TOAST_MS)),
			compact_width: self.compact_width.unwrap_or(DEFAULT_COMPACT_WIDTH),
		})
	}
}
