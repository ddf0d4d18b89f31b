//! File logging.
//!
//! The terminal belongs to the UI, so events go to
//! `{data_dir}/logs/cloudterm.log` without colour codes.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

/// Filter taken from the environment before the configured level.
pub const LOG_ENV: &str = "CLOUDTERM_LOG";
pub const LOG_FILE: &str = "cloudterm.log";

/// Directives for `level`, keeping the SDK's own chatter at warnings.
#[must_use]
pub fn default_directives(level: &str) -> String {
	format!("cloudterm={level},aws_config=warn,aws_smithy_runtime=warn,hyper=warn")
}

fn env_filter(level: &str) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Install the global subscriber and return the log file path.
pub fn initialize(level: &str) -> Result<PathBuf> {
	let dir = app_dirs::get_data_dir()?.join("logs");
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::registry()
		.with(env_filter(level))
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(true)
				.with_ansi(false)
				.with_writer(Mutex::new(file)),
		)
		.try_init()
		.context("failed to install the log subscriber")?;

	tracing::info!(pid = std::process::id(), log = %path.display(), "cloudterm starting");
	Ok(path)
}
