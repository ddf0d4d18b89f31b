use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use cloudterm::app_dirs;

/// Version banner with the directories the binary reads from and writes to.
fn long_version() -> &'static str {
	let describe = |dir: anyhow::Result<PathBuf>| match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let config_dir = describe(app_dirs::get_config_dir());
	let data_dir = describe(app_dirs::get_data_dir());
	let cache_dir = describe(app_dirs::get_cache_dir());

	let mut details = format!("cloudterm {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");
	let _ = writeln!(details, "cache directory: {cache_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Green.on_default())
}

pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "cloudterm",
	version,
	long_version = long_version(),
	about = "Terminal console for AWS profiles, regions and services",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `cloudterm` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long,
		value_name = "NAME",
		help = "AWS profile to select (default: none)"
	)]
	pub(crate) profile: Option<String>,
	#[arg(
		short,
		long,
		value_name = "REGION",
		help = "AWS region to select (default: none)"
	)]
	pub(crate) region: Option<String>,
	#[arg(
		short,
		long,
		value_name = "SERVICE",
		help = "Service to open; with a profile and region the app starts on that page"
	)]
	pub(crate) service: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CLOUDTERM_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files"
	)]
	pub(crate) no_config: bool,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: default)")]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log level for the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(long = "print-config", help = "Print the effective configuration before starting")]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List the available themes and exit")]
	pub(crate) list_themes: bool,
}
