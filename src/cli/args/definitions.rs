use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::{OutputFormat, TabArg, ThemeArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `seatview` binary.
#[derive(Parser, Debug)]
#[command(
	name = "seatview",
	version,
	long_version = long_version(),
	about = "Look up exam seating by roll number or course code",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SEATVIEW_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'b',
		long = "base-url",
		value_name = "URL",
		global = true,
		help = "Seating service base URL (default: http://127.0.0.1:8000)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long,
		value_enum,
		help = "Colour scheme for this session (default: last saved choice)"
	)]
	pub(crate) theme: Option<ThemeArg>,
	#[arg(
		short = 't',
		long,
		value_enum,
		help = "Tab to open on start (default: student)"
	)]
	pub(crate) tab: Option<TabArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
}

/// One-shot lookups that print their result and exit.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// Print the exam seats of a student.
	Student {
		#[arg(value_name = "ROLL")]
		roll_no: String,
		#[arg(
			short = 'o',
			long = "output",
			value_enum,
			default_value_t = OutputFormat::Plain,
			help = "Choose how to print the result"
		)]
		output: OutputFormat,
	},
	/// Print the rooms allocated to a course.
	Course {
		#[arg(value_name = "CODE")]
		course_code: String,
		#[arg(
			short = 'o',
			long = "output",
			value_enum,
			default_value_t = OutputFormat::Plain,
			help = "Choose how to print the result"
		)]
		output: OutputFormat,
	},
}
