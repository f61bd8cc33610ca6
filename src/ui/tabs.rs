//! Tab identity, activation and responsive labels.

use std::fmt;
use std::str::FromStr;

use seatview_api::QueryKind;

/// Terminal width, in columns, below which tabs use their short labels.
pub const DEFAULT_COMPACT_WIDTH: u16 = 64;

/// The two lookup views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
	#[default]
	Student,
	Faculty,
}

impl TabId {
	pub const ALL: [TabId; 2] = [TabId::Student, TabId::Faculty];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			TabId::Student => "student",
			TabId::Faculty => "faculty",
		}
	}

	/// Route queried from this tab's form.
	#[must_use]
	pub fn query_kind(self) -> QueryKind {
		match self {
			TabId::Student => QueryKind::Student,
			TabId::Faculty => QueryKind::Faculty,
		}
	}

	#[must_use]
	pub fn from_query_kind(kind: QueryKind) -> Self {
		match kind {
			QueryKind::Student => TabId::Student,
			QueryKind::Faculty => TabId::Faculty,
		}
	}

	#[must_use]
	pub fn labels(self) -> TabLabels {
		match self {
			TabId::Student => TabLabels::new("Student Search", "Student"),
			TabId::Faculty => TabLabels::new("Faculty Search", "Faculty"),
		}
	}

	fn index(self) -> usize {
		match self {
			TabId::Student => 0,
			TabId::Faculty => 1,
		}
	}
}

impl fmt::Display for TabId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TabId {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"student" => Ok(TabId::Student),
			"faculty" | "course" => Ok(TabId::Faculty),
			other => Err(format!(
				"unknown tab `{other}` (expected `student` or `faculty`)"
			)),
		}
	}
}

/// Long and short forms of a tab label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLabels {
	pub long: &'static str,
	pub short: &'static str,
}

impl TabLabels {
	#[must_use]
	pub const fn new(long: &'static str, short: &'static str) -> Self {
		Self { long, short }
	}

	#[must_use]
	pub fn for_layout(self, layout: LabelLayout) -> &'static str {
		match layout {
			LabelLayout::Full => self.long,
			LabelLayout::Compact => self.short,
		}
	}
}

/// Which label form the current terminal width calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelLayout {
	#[default]
	Full,
	Compact,
}

impl LabelLayout {
	/// Pick the layout for a terminal `width` given the compact breakpoint.
	#[must_use]
	pub fn for_width(width: u16, breakpoint: u16) -> Self {
		if width < breakpoint {
			LabelLayout::Compact
		} else {
			LabelLayout::Full
		}
	}
}

/// Keeps exactly one tab active.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabController {
	active: TabId,
}

impl TabController {
	#[must_use]
	pub fn new(active: TabId) -> Self {
		Self { active }
	}

	#[must_use]
	pub fn active(&self) -> TabId {
		self.active
	}

	#[must_use]
	pub fn is_active(&self, tab: TabId) -> bool {
		self.active == tab
	}

	/// Make `tab` the sole active tab. Returns whether anything changed.
	pub fn activate(&mut self, tab: TabId) -> bool {
		let changed = self.active != tab;
		self.active = tab;
		changed
	}

	pub fn next(&mut self) {
		let index = (self.active.index() + 1) % TabId::ALL.len();
		self.active = TabId::ALL[index];
	}

	pub fn previous(&mut self) {
		let len = TabId::ALL.len();
		let index = (self.active.index() + len - 1) % len;
		self.active = TabId::ALL[index];
	}
}
