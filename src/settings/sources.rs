use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File, Map};
use seatview::app_dirs::AppDir;

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "SEATVIEW";
const ENV_SEPARATOR: &str = "__";
const LOCAL_CONFIG_FILES: [&str; 2] = [".seatview.toml", "seatview.toml"];

/// One input that contributed to the effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLayer {
	File(PathBuf),
	/// `SEATVIEW__*` variables, sorted by name.
	Environment(Vec<String>),
	Flags(Vec<&'static str>),
}

impl ConfigLayer {
	/// Whether this layer is the environment and it sets `var`.
	pub(crate) fn sets_variable(&self, var: &str) -> bool {
		matches!(self, ConfigLayer::Environment(names) if names.iter().any(|name| name == var))
	}
}

impl fmt::Display for ConfigLayer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigLayer::File(path) => write!(f, "file {}", path.display()),
			ConfigLayer::Environment(names) => write!(f, "environment {}", names.join(", ")),
			ConfigLayer::Flags(flags) => write!(f, "flags {}", flags.join(" ")),
		}
	}
}

/// Merged configuration plus the layers it was built from, lowest precedence
/// first.
pub(super) struct LayeredConfig {
	pub(super) config: Config,
	pub(super) layers: Vec<ConfigLayer>,
}

/// Combine default files, `--config` files, the environment and CLI flags.
pub(super) fn build_config(cli: &CliArgs) -> Result<LayeredConfig> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	layer_sources(cli, defaults, env::vars())
}

fn layer_sources(
	cli: &CliArgs,
	defaults: Vec<PathBuf>,
	vars: impl IntoIterator<Item = (String, String)>,
) -> Result<LayeredConfig> {
	let mut builder = Config::builder();
	let mut layers = Vec::new();

	for path in defaults.into_iter().filter(|path| path.is_file()) {
		builder = builder.add_source(File::from(path.clone()).required(false));
		layers.push(ConfigLayer::File(path));
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
		layers.push(ConfigLayer::File(path.clone()));
	}

	let key_prefix = format!("{ENV_PREFIX}{ENV_SEPARATOR}");
	let env_vars: Map<String, String> = vars
		.into_iter()
		.filter(|(name, _)| name.starts_with(&key_prefix))
		.collect();
	if !env_vars.is_empty() {
		let mut names: Vec<String> = env_vars.keys().cloned().collect();
		names.sort();
		layers.push(ConfigLayer::Environment(names));
	}
	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true)
			.source(Some(env_vars)),
	);

	let flags = override_flags(cli);
	if !flags.is_empty() {
		layers.push(ConfigLayer::Flags(flags));
	}

	let config = builder.build().context("failed to read configuration")?;
	Ok(LayeredConfig { config, layers })
}

/// Flags that override configuration values, as opposed to selecting files.
fn override_flags(cli: &CliArgs) -> Vec<&'static str> {
	[
		cli.base_url.as_ref().map(|_| "--base-url"),
		cli.theme.map(|_| "--theme"),
		cli.tab.map(|_| "--tab"),
	]
	.into_iter()
	.flatten()
	.collect()
}

/// The user config file followed by the per-project files in the working
/// directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	candidate_files(AppDir::Config.file().ok(), env::current_dir().ok())
}

fn candidate_files(user_file: Option<PathBuf>, current_dir: Option<PathBuf>) -> Vec<PathBuf> {
	let mut files: Vec<PathBuf> = user_file.into_iter().collect();
	if let Some(dir) = current_dir {
		files.extend(LOCAL_CONFIG_FILES.iter().map(|name| dir.join(name)));
	}
	files
}
