use std::time::Duration;

use cloudterm::ServicePath;
use cloudterm::ui::pages::CloudFormationOptions;
use cloudterm::ui::style::Theme;

/// Configuration after merging every layer and validating the values.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub session: ServicePath,
	pub theme_name: String,
	pub theme: Theme,
	pub notification_timeout: Duration,
	pub cloudformation: CloudFormationOptions,
	pub log_level: String,
}

impl ResolvedConfig {
	/// True when the session names a page to open straight away.
	#[must_use]
	pub fn standalone(&self) -> bool {
		self.session.completed()
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Profile: {}", self.session.profile().unwrap_or("(none)"));
		println!("  Region: {}", self.session.region().unwrap_or("(none)"));
		println!("  Service: {}", self.session.service().unwrap_or("(none)"));
		println!("  Standalone: {}", bool_to_word(self.standalone()));
		println!("  UI theme: {}", self.theme_name);
		println!(
			"  Notification timeout: {}s",
			self.notification_timeout.as_secs()
		);
		println!(
			"  Hide deleted stacks: {}",
			bool_to_word(self.cloudformation.hide_deleted)
		);
		println!("  Log level: {}", self.log_level);
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn standalone_needs_every_part() {
		let mut config = ResolvedConfig {
			session: ServicePath::from_parts(Some("dev".into()), None, Some("s3".into())),
			theme_name: "default".into(),
			theme: Theme::default(),
			notification_timeout: Duration::from_secs(5),
			cloudformation: CloudFormationOptions::default(),
			log_level: "info".into(),
		};
		assert!(!config.standalone());
		config.print_summary();

		config.session = ServicePath::new("dev", "us-east-1", "s3");
		assert!(config.standalone());
	}
}
