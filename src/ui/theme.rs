//! Light/dark palettes and the persisted theme preference.

use std::fmt;
use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::preferences::PreferenceStore;

/// Preference key the theme is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
	#[default]
	Light,
	Dark,
}

impl ThemeMode {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	/// Interpret a stored preference. Only the exact `dark` marker selects
	/// dark mode; anything else, including a missing value, is light.
	#[must_use]
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			Some("dark") => ThemeMode::Dark,
			_ => ThemeMode::Light,
		}
	}

	#[must_use]
	pub fn palette(self) -> Theme {
		match self {
			ThemeMode::Light => LIGHT,
			ThemeMode::Dark => DARK,
		}
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ThemeMode {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(ThemeMode::Light),
			"dark" => Ok(ThemeMode::Dark),
			other => Err(format!("unknown theme `{other}` (expected `light` or `dark`)")),
		}
	}
}

/// Owns the active mode and writes every toggle back to the store.
pub struct ThemeController {
	mode: ThemeMode,
	store: Box<dyn PreferenceStore>,
}

impl ThemeController {
	/// Restore the mode from `store`. Read failures fall back to light.
	pub fn load(store: Box<dyn PreferenceStore>) -> Self {
		let stored = match store.get(THEME_KEY) {
			Ok(value) => value,
			Err(err) => {
				warn!("ignoring unreadable theme preference: {err}");
				None
			}
		};
		let mode = ThemeMode::from_stored(stored.as_deref());
		Self { mode, store }
	}

	/// Use `mode` for this session without touching the stored preference.
	pub fn with_override(mut self, mode: Option<ThemeMode>) -> Self {
		if let Some(mode) = mode {
			self.mode = mode;
		}
		self
	}

	#[must_use]
	pub fn mode(&self) -> ThemeMode {
		self.mode
	}

	/// Flip the mode and persist it. Write failures are logged and ignored.
	pub fn toggle(&mut self) -> ThemeMode {
		self.mode = self.mode.toggled();
		if let Err(err) = self.store.set(THEME_KEY, self.mode.as_str()) {
			warn!("failed to persist theme preference: {err}");
		}
		self.mode
	}
}

/// Styles used across the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub base: Style,
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	pub toast: Style,
	pub toast_error: Style,
}

impl Theme {
	#[must_use]
	pub fn base_style(&self) -> Style {
		self.base
	}

	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn toast_style(&self, is_error: bool) -> Style {
		if is_error { self.toast_error } else { self.toast }
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn row_highlight_bg(&self) -> Color {
		self.row_highlight.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header_fg())
			.bg(self.row_highlight_bg())
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new().bg(self.header_bg())
	}
}

impl Default for Theme {
	fn default() -> Self {
		LIGHT
	}
}

pub const LIGHT: Theme = Theme {
	base: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(248, 250, 252)),
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	toast: Style::new()
		.fg(Color::Rgb(248, 250, 252))
		.bg(Color::Rgb(30, 41, 59)),
	toast_error: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(185, 28, 28))
		.add_modifier(Modifier::BOLD),
};

pub const DARK: Theme = Theme {
	base: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(2, 6, 23)),
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	toast: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	toast_error: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(220, 38, 38))
		.add_modifier(Modifier::BOLD),
};
