mod cli;
mod settings;

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use cli::{Command, OutputFormat, parse_cli, print_json, print_plain};
use log::{info, warn};
use seatview::preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
use seatview::{
	AppOptions, HttpSeatingClient, LookupRows, QueryKind, SeatingApi, ThemeController, logging,
	normalize_key,
};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Err(err) = logging::initialize(&resolved.log) {
		eprintln!("seatview: continuing without logging: {err:#}");
	}

	for layer in &resolved.layers {
		info!("configuration layer: {layer}");
	}

	let client = HttpSeatingClient::new(resolved.client_config())
		.context("failed to set up the seating service client")?;
	info!("using seating service at {}", client.base_url());

	match cli.command {
		Some(Command::Student { roll_no, output }) => {
			run_lookup(&client, QueryKind::Student, &roll_no, output)
		}
		Some(Command::Course {
			course_code,
			output,
		}) => run_lookup(&client, QueryKind::Faculty, &course_code, output),
		None => run_interface(client, &resolved),
	}
}

/// Perform a single lookup and print it in the chosen format.
fn run_lookup(api: &dyn SeatingApi, kind: QueryKind, input: &str, format: OutputFormat) -> Result<()> {
	let key =
		normalize_key(input).ok_or_else(|| anyhow!("the {} must not be blank", kind.key_label()))?;

	let rows = match kind {
		QueryKind::Student => api.student(&key).map(LookupRows::Student),
		QueryKind::Faculty => api.faculty(&key).map(LookupRows::Faculty),
	}
	.with_context(|| format!("{kind} lookup for {key} failed"))?;

	match format {
		OutputFormat::Plain => print_plain(&key, &rows),
		OutputFormat::Json => print_json(&rows)?,
	}

	Ok(())
}

fn run_interface(client: HttpSeatingClient, settings: &ResolvedConfig) -> Result<()> {
	let store: Box<dyn PreferenceStore> = match FilePreferences::in_data_dir() {
		Ok(store) => {
			info!("theme preference stored at {}", store.path().display());
			Box::new(store)
		}
		Err(err) => {
			warn!("preferences will not be saved: {err:#}");
			Box::new(MemoryPreferences::new())
		}
	};

	let options = AppOptions {
		start_tab: settings.ui.start_tab,
		theme: ThemeController::load(store).with_override(settings.ui.theme),
		toast_duration: settings.ui.toast_duration,
		compact_width: settings.ui.compact_width,
	};

	seatview::run(Arc::new(client), options)
}
