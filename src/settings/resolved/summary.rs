use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", format_summary(config));
}

fn format_summary(config: &ResolvedConfig) -> String {
	let timeout = match config.api.timeout {
		Some(timeout) => format!("{}s", timeout.as_secs()),
		None => "(transport default)".to_owned(),
	};
	let theme = config
		.ui
		.theme
		.map(|mode| mode.as_str())
		.unwrap_or("(saved preference)");

	let mut lines = vec![
		"Effective configuration:".to_owned(),
		format!("  Base URL: {}", config.api.base_url),
		format!("  Timeout: {timeout}"),
		format!("  Theme: {theme}"),
		format!("  Start tab: {}", config.ui.start_tab),
		format!("  Toast duration: {}ms", config.ui.toast_duration.as_millis()),
		format!("  Compact below: {} columns", config.ui.compact_width),
		format!("  Log level: {}", config.log.level),
		format!("  Log file: {}", config.log.file.display()),
	];
	if config.layers.is_empty() {
		lines.push("  Loaded from: built-in defaults".to_owned());
	} else {
		lines.extend(
			config
				.layers
				.iter()
				.map(|layer| format!("  Loaded from: {layer}")),
		);
	}

	let mut out = lines.join("\n");
	out.push('\n');
	out
}
