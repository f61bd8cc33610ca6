use clap::ValueEnum;

/// Colour schemes selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
	Light,
	Dark,
}

impl ThemeArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ThemeArg::Light => "light",
			ThemeArg::Dark => "dark",
		}
	}
}

/// Tabs the interface can open on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TabArg {
	Student,
	Faculty,
}

impl TabArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			TabArg::Student => "student",
			TabArg::Faculty => "faculty",
		}
	}
}

/// Output formats supported by the one-shot lookups.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	#[default]
	Plain,
	Json,
}
