use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_timeout_secs: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) ui_start_tab: Option<SettingSource>,
	pub(crate) ui_toast_ms: Option<SettingSource>,
	pub(crate) ui_compact_width: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(&self.api_timeout_secs, "api.timeout_secs")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.ui_theme, "ui.theme")
	}

	pub(crate) fn source_for_start_tab(&self) -> SettingSource {
		or_key(&self.ui_start_tab, "ui.start_tab")
	}

	pub(crate) fn source_for_toast_ms(&self) -> SettingSource {
		or_key(&self.ui_toast_ms, "ui.toast_ms")
	}

	pub(crate) fn source_for_compact_width(&self) -> SettingSource {
		or_key(&self.ui_compact_width, "ui.compact_width")
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		or_key(&self.log_level, "log.level")
	}
}
