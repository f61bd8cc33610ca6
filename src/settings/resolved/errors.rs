use thiserror::Error;

use super::SettingSource;

/// A configuration value that cannot be used, naming where it came from.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	/// A name that matches no theme, tab or log level.
	#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
	Unrecognized {
		key: &'static str,
		value: String,
		origin: SettingSource,
		reason: String,
	},
	/// A duration or width of zero.
	#[error("invalid value for {key} from {origin}: must be greater than zero (value: 0)")]
	Zero {
		key: &'static str,
		origin: SettingSource,
	},
}

impl ConfigError {
	pub(crate) fn unrecognized(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self::Unrecognized {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}

	#[cfg(test)]
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::Unrecognized { key, .. } | Self::Zero { key, .. } => key,
		}
	}
}
