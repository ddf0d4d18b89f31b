use std::time::Duration;

use anyhow::{Result, bail, ensure};
use serde::Deserialize;

use cloudterm::ServicePath;
use cloudterm::ui::pages::CloudFormationOptions;
use cloudterm::ui::style::{self, Theme};

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "default";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_NOTIFICATION_SECONDS: u64 = 5;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration as read from files and the environment, before CLI
/// overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	session: SessionSection,
	ui: UiSection,
	cloudformation: CloudFormationSection,
	logging: LoggingSection,
}

/// Starting selection; all three parts make the app start on that page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SessionSection {
	profile: Option<String>,
	region: Option<String>,
	service: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	notification_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CloudFormationSection {
	hide_deleted: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(profile) = cli.profile.clone() {
			self.session.profile = Some(profile);
		}
		if let Some(region) = cli.region.clone() {
			self.session.region = Some(region);
		}
		if let Some(service) = cli.service.clone() {
			self.session.service = Some(service);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Validate the merged values and fill in defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let RawConfig {
			session,
			ui,
			cloudformation,
			logging,
		} = self;

		let theme_name = ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = resolve_theme(&theme_name)?;

		let seconds = ui
			.notification_seconds
			.unwrap_or(DEFAULT_NOTIFICATION_SECONDS);
		ensure!(seconds > 0, "ui.notification_seconds must be greater than zero");

		let log_level = logging
			.level
			.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
			.to_ascii_lowercase();
		ensure!(
			LOG_LEVELS.contains(&log_level.as_str()),
			"unknown log level '{log_level}' (expected one of: {})",
			LOG_LEVELS.join(", ")
		);

		let defaults = CloudFormationOptions::default();
		Ok(ResolvedConfig {
			session: ServicePath::from_parts(session.profile, session.region, session.service),
			theme_name,
			theme,
			notification_timeout: Duration::from_secs(seconds),
			cloudformation: CloudFormationOptions {
				hide_deleted: cloudformation.hide_deleted.unwrap_or(defaults.hide_deleted),
			},
			log_level,
		})
	}
}

fn resolve_theme(name: &str) -> Result<Theme> {
	match style::by_name(name) {
		Some(theme) => Ok(theme),
		None => bail!(
			"unknown theme '{name}' (available: {})",
			style::names().join(", ")
		),
	}
}
