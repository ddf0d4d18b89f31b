use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File, Map};

use crate::cli::CliArgs;
use cloudterm::app_dirs;

/// Variables look like `CLOUDTERM__SESSION__PROFILE` or
/// `CLOUDTERM__UI__NOTIFICATION_SECONDS`.
const ENV_PREFIX: &str = "cloudterm";
const ENV_SEPARATOR: &str = "__";

/// Merge the default files, every `--config` file and the `CLOUDTERM__*`
/// variables, later sources winning.
///
/// `vars` stands in for the process environment when given.
pub(super) fn build_config(cli: &CliArgs, vars: Option<Map<String, String>>) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	// Explicit files must exist.
	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true)
			.source(vars),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// `config.toml` in the config directory, then `.cloudterm.toml` and
/// `cloudterm.toml` in the working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".cloudterm.toml"));
		files.push(current_dir.join("cloudterm.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with("config.toml")));
		assert!(files.iter().any(|path| path.ends_with(".cloudterm.toml")));
		assert!(files.iter().any(|path| path.ends_with("cloudterm.toml")));
	}
}
