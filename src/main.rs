mod cli;
mod settings;

use anyhow::Result;
use cloudterm::systems::cloud::CloudRuntime;
use cloudterm::ui::pages::default_registry;
use cloudterm::ui::style;
use cloudterm::{AppConfig, ItemSources, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = cli::parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Err(err) = logging::initialize(&resolved.log_level) {
		eprintln!("cloudterm: logging disabled: {err:#}");
	}

	run_console(resolved)
}

/// Start the SDK runtime and hand the resolved settings to the UI.
fn run_console(settings: ResolvedConfig) -> Result<()> {
	let runtime = CloudRuntime::new()?;
	tracing::info!(
		path = %settings.session,
		standalone = settings.standalone(),
		"starting console"
	);

	cloudterm::run(AppConfig {
		sources: ItemSources::aws(),
		registry: default_registry(runtime.handle(), settings.cloudformation),
		initial_path: settings.session,
		theme: settings.theme,
		notification_timeout: settings.notification_timeout,
	})
}
