use anyhow::{Result, anyhow};
use config::Config;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load the settings the UI starts with: files, then `CLOUDTERM__*`
/// variables, then CLI flags.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	resolve_merged(build_config(cli, None)?, cli)
}

fn resolve_merged(merged: Config, cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = merged
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}
