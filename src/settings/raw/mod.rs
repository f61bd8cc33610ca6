use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::sources::ConfigLayer;

mod api;
mod logging;
mod ui;

use api::ApiSection;
use logging::LogSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required. `layers` attributes values to the
	/// environment and is kept on the result.
	pub(super) fn resolve(self, cli: &CliArgs, layers: Vec<ConfigLayer>) -> Result<ResolvedConfig> {
		let source = |cli_flag, value_present, env_var, key| {
			detect_source(&layers, cli_flag, value_present, env_var, key)
		};
		let sources = ConfigSources {
			api_timeout_secs: source(
				None,
				self.api.timeout_secs.is_some(),
				"SEATVIEW__API__TIMEOUT_SECS",
				"api.timeout_secs",
			),
			ui_theme: source(
				cli.theme.map(|_| "--theme"),
				self.ui.theme.is_some(),
				"SEATVIEW__UI__THEME",
				"ui.theme",
			),
			ui_start_tab: source(
				cli.tab.map(|_| "--tab"),
				self.ui.start_tab.is_some(),
				"SEATVIEW__UI__START_TAB",
				"ui.start_tab",
			),
			ui_toast_ms: source(
				None,
				self.ui.toast_ms.is_some(),
				"SEATVIEW__UI__TOAST_MS",
				"ui.toast_ms",
			),
			ui_compact_width: source(
				None,
				self.ui.compact_width.is_some(),
				"SEATVIEW__UI__COMPACT_WIDTH",
				"ui.compact_width",
			),
			log_level: source(
				None,
				self.log.level.is_some(),
				"SEATVIEW__LOG__LEVEL",
				"log.level",
			),
		};

		let config = ResolvedConfig {
			api: self.api.resolve(),
			ui: self.ui.resolve(&sources)?,
			log: self.log.resolve(&sources)?,
			layers,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	layers: &[ConfigLayer],
	cli_flag: Option<&'static str>,
	value_present: bool,
	env_var: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if let Some(flag) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	if layers.iter().any(|layer| layer.sets_variable(env_var)) {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
