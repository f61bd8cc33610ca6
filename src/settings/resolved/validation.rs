use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.api.timeout.is_some_and(|timeout| timeout.is_zero()) {
		return Err(ConfigError::Zero {
			key: "api.timeout_secs",
			origin: sources.source_for_timeout(),
		});
	}

	if config.ui.toast_duration.is_zero() {
		return Err(ConfigError::Zero {
			key: "ui.toast_ms",
			origin: sources.source_for_toast_ms(),
		});
	}

	if config.ui.compact_width == 0 {
		return Err(ConfigError::Zero {
			key: "ui.compact_width",
			origin: sources.source_for_compact_width(),
		});
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use log::LevelFilter;
	use seatview::logging::LogOptions;
	use seatview::ui::TabId;

	use super::super::{ApiSettings, SettingSource, UiSettings};
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			api: ApiSettings {
				base_url: "http://127.0.0.1:8000".into(),
				timeout: None,
			},
			ui: UiSettings {
				theme: None,
				start_tab: TabId::Student,
				toast_duration: Duration::from_millis(3000),
				compact_width: 64,
			},
			log: LogOptions {
				level: LevelFilter::Info,
				file: PathBuf::from("/tmp/seatview.log"),
			},
			layers: Vec::new(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let mut config = config();
		config.api.timeout = Some(Duration::ZERO);
		let sources = ConfigSources {
			api_timeout_secs: Some(SettingSource::Environment("SEATVIEW__API__TIMEOUT_SECS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "api.timeout_secs");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_zero_toast_duration() {
		let mut config = config();
		config.ui.toast_duration = Duration::ZERO;

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key(), "ui.toast_ms");
		assert!(err.to_string().contains("configuration key `ui.toast_ms`"));
	}

	#[test]
	fn validation_rejects_zero_compact_width() {
		let mut config = config();
		config.ui.compact_width = 0;

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key(), "ui.compact_width");
	}
}
