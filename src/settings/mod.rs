//! Configuration loading and resolution.
//!
//! Config files, `SEATVIEW__*` environment variables and CLI flags are layered
//! with the `config` crate, in that order of precedence, and resolved into a
//! validated [`ResolvedConfig`] that remembers which layers contributed.

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};

use crate::cli::CliArgs;
use raw::RawConfig;
pub use resolved::ResolvedConfig;
use sources::{LayeredConfig, build_config};

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let LayeredConfig { config, layers } = build_config(cli)?;
	let mut raw: RawConfig = config
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli, layers)
}
