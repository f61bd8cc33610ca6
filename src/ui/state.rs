use std::sync::Arc;
use std::time::Duration;

use seatview_api::SeatingApi;
use throbber_widgets_tui::ThrobberState;

use super::input::QueryInput;
use super::notify::{BusyIndicator, DEFAULT_TOAST_DURATION, ToastState};
use super::panel::Panel;
use super::tabs::{DEFAULT_COMPACT_WIDTH, LabelLayout, TabController, TabId};
use super::theme::{Theme, ThemeController};
use crate::lookup::LookupRuntime;
use crate::preferences::MemoryPreferences;

/// Settings the interface starts with.
pub struct AppOptions {
	pub start_tab: TabId,
	pub theme: ThemeController,
	pub toast_duration: Duration,
	pub compact_width: u16,
}

impl Default for AppOptions {
	fn default() -> Self {
		Self {
			start_tab: TabId::default(),
			theme: ThemeController::load(Box::new(MemoryPreferences::new())),
			toast_duration: DEFAULT_TOAST_DURATION,
			compact_width: DEFAULT_COMPACT_WIDTH,
		}
	}
}

/// Centrally owned interface state. Rendering reads it; key handling and
/// lookup results are the only writers.
pub struct UiState {
	pub tabs: TabController,
	pub theme: ThemeController,
	pub busy: BusyIndicator,
	pub toasts: ToastState,
	pub layout: LabelLayout,
	pub compact_width: u16,
}

impl UiState {
	/// Recompute tab label layout for a terminal `width`.
	pub fn apply_width(&mut self, width: u16) {
		self.layout = LabelLayout::for_width(width, self.compact_width);
	}
}

pub struct App<'a> {
	pub state: UiState,
	pub(crate) student: Panel,
	pub(crate) faculty: Panel,
	pub(crate) student_input: QueryInput<'a>,
	pub(crate) faculty_input: QueryInput<'a>,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) should_quit: bool,
	pub(super) lookups: LookupRuntime,
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.lookups.shutdown();
	}
}

impl<'a> App<'a> {
	pub fn new(api: Arc<dyn SeatingApi>, options: AppOptions) -> Self {
		let AppOptions {
			start_tab,
			theme,
			toast_duration,
			compact_width,
		} = options;

		Self {
			state: UiState {
				tabs: TabController::new(start_tab),
				theme,
				busy: BusyIndicator::default(),
				toasts: ToastState::new(toast_duration),
				layout: LabelLayout::Full,
				compact_width,
			},
			student: Panel::new(TabId::Student),
			faculty: Panel::new(TabId::Faculty),
			student_input: QueryInput::new("e.g. 2302MC05"),
			faculty_input: QueryInput::new("e.g. CS2207"),
			throbber_state: ThrobberState::default(),
			should_quit: false,
			lookups: LookupRuntime::spawn(api),
		}
	}

	#[must_use]
	pub fn active_tab(&self) -> TabId {
		self.state.tabs.active()
	}

	#[must_use]
	pub fn panel(&self, tab: TabId) -> &Panel {
		match tab {
			TabId::Student => &self.student,
			TabId::Faculty => &self.faculty,
		}
	}

	pub(crate) fn panel_mut(&mut self, tab: TabId) -> &mut Panel {
		match tab {
			TabId::Student => &mut self.student,
			TabId::Faculty => &mut self.faculty,
		}
	}

	#[must_use]
	pub fn input(&self, tab: TabId) -> &QueryInput<'a> {
		match tab {
			TabId::Student => &self.student_input,
			TabId::Faculty => &self.faculty_input,
		}
	}

	pub fn input_mut(&mut self, tab: TabId) -> &mut QueryInput<'a> {
		match tab {
			TabId::Student => &mut self.student_input,
			TabId::Faculty => &mut self.faculty_input,
		}
	}

	#[must_use]
	pub fn theme(&self) -> Theme {
		self.state.theme.mode().palette()
	}

	#[must_use]
	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	pub fn activate_tab(&mut self, tab: TabId) {
		self.state.tabs.activate(tab);
	}

	pub fn toggle_theme(&mut self) {
		let mode = self.state.theme.toggle();
		log::debug!("theme switched to {mode}");
	}

	pub fn on_resize(&mut self, width: u16) {
		self.state.apply_width(width);
	}
}
