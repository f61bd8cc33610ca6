use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use seatview::app_dirs::AppDir;

/// Produce the full version banner listing the config, preferences and log files.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("seatview {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	for dir in AppDir::ALL {
		let _ = writeln!(details, "{}: {}", describe_role(dir), describe_file(dir));
	}

	Box::leak(details.into_boxed_str())
}

fn describe_role(dir: AppDir) -> &'static str {
	match dir {
		AppDir::Config => "config file",
		AppDir::Data => "preferences file",
		AppDir::Cache => "log file",
	}
}

fn describe_file(dir: AppDir) -> String {
	match dir.file() {
		Ok(path) => format!("{} (override with {})", path.display(), dir.override_var()),
		Err(err) => format!("unavailable ({err})"),
	}
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
