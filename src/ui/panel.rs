use ratatui::widgets::TableState;

use super::tabs::TabId;
use crate::lookup::LookupRows;

/// Which part of a panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelOutcome {
	/// Nothing has been searched yet.
	#[default]
	Idle,
	/// The results table is shown.
	Results,
	/// The "no results" placeholder is shown.
	NoResults,
}

/// Content panel owned by one tab: the echoed search term, the outcome of
/// the last applied lookup, and the rows it produced.
#[derive(Debug, Clone)]
pub struct Panel {
	tab: TabId,
	search_term: Option<String>,
	outcome: PanelOutcome,
	rows: LookupRows,
	pub(crate) table_state: TableState,
}

impl Panel {
	#[must_use]
	pub fn new(tab: TabId) -> Self {
		Self {
			tab,
			search_term: None,
			outcome: PanelOutcome::Idle,
			rows: empty_rows(tab),
			table_state: TableState::default(),
		}
	}

	#[must_use]
	pub fn tab(&self) -> TabId {
		self.tab
	}

	#[must_use]
	pub fn search_term(&self) -> Option<&str> {
		self.search_term.as_deref()
	}

	#[must_use]
	pub fn outcome(&self) -> PanelOutcome {
		self.outcome
	}

	#[must_use]
	pub fn rows(&self) -> &LookupRows {
		&self.rows
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Replace the table with `rows`. An empty result shows the placeholder.
	pub fn show_results(&mut self, term: String, rows: LookupRows) {
		self.search_term = Some(term);
		self.outcome = if rows.is_empty() {
			PanelOutcome::NoResults
		} else {
			PanelOutcome::Results
		};
		self.rows = rows;
		self.reset_selection();
	}

	/// Clear the table and show the placeholder.
	pub fn show_failure(&mut self, term: String) {
		self.search_term = Some(term);
		self.outcome = PanelOutcome::NoResults;
		self.rows = empty_rows(self.tab);
		self.reset_selection();
	}

	pub(crate) fn select_offset(&mut self, delta: isize) {
		let len = self.len();
		if len == 0 {
			self.table_state.select(None);
			return;
		}
		let current = self.table_state.selected().unwrap_or(0);
		let next = current.saturating_add_signed(delta).min(len - 1);
		self.table_state.select(Some(next));
	}

	pub(crate) fn select_first(&mut self) {
		if !self.is_empty() {
			self.table_state.select(Some(0));
		}
	}

	pub(crate) fn select_last(&mut self) {
		if let Some(last) = self.len().checked_sub(1) {
			self.table_state.select(Some(last));
		}
	}

	fn reset_selection(&mut self) {
		self.table_state = TableState::default();
		if !self.is_empty() {
			self.table_state.select(Some(0));
		}
	}
}

fn empty_rows(tab: TabId) -> LookupRows {
	match tab {
		TabId::Student => LookupRows::Student(Vec::new()),
		TabId::Faculty => LookupRows::Faculty(Vec::new()),
	}
}

#[cfg(test)]
mod tests {
	use seatview_api::SeatingAssignment;

	use super::*;

	fn assignment(room: &str) -> SeatingAssignment {
		SeatingAssignment {
			course_code: "CS101".into(),
			day: "Mon".into(),
			shift: "M".into(),
			date: "2024-01-01".into(),
			room_no: room.into(),
			course_name: "-".into(),
		}
	}

	#[test]
	fn results_replace_previous_rows() {
		let mut panel = Panel::new(TabId::Faculty);
		panel.show_results(
			"CS101".into(),
			LookupRows::Faculty(vec![assignment("A1"), assignment("A2")]),
		);
		panel.show_results("CS102".into(), LookupRows::Faculty(vec![assignment("B1")]));

		assert_eq!(panel.len(), 1);
		assert_eq!(panel.search_term(), Some("CS102"));
		assert_eq!(panel.outcome(), PanelOutcome::Results);
		assert_eq!(panel.table_state.selected(), Some(0));
	}

	#[test]
	fn failure_clears_rows_and_shows_placeholder() {
		let mut panel = Panel::new(TabId::Faculty);
		panel.show_results("CS101".into(), LookupRows::Faculty(vec![assignment("A1")]));
		panel.show_failure("CS999".into());

		assert!(panel.is_empty());
		assert_eq!(panel.outcome(), PanelOutcome::NoResults);
		assert_eq!(panel.search_term(), Some("CS999"));
		assert_eq!(panel.table_state.selected(), None);
	}

	#[test]
	fn empty_success_shows_placeholder() {
		let mut panel = Panel::new(TabId::Student);
		panel.show_results("R1".into(), LookupRows::Student(Vec::new()));
		assert_eq!(panel.outcome(), PanelOutcome::NoResults);
	}

	#[test]
	fn selection_is_clamped() {
		let mut panel = Panel::new(TabId::Faculty);
		panel.show_results(
			"CS101".into(),
			LookupRows::Faculty(vec![assignment("A1"), assignment("A2")]),
		);
		panel.select_offset(10);
		assert_eq!(panel.table_state.selected(), Some(1));
		panel.select_offset(-10);
		assert_eq!(panel.table_state.selected(), Some(0));
		panel.select_last();
		assert_eq!(panel.table_state.selected(), Some(1));
		panel.select_first();
		assert_eq!(panel.table_state.selected(), Some(0));
	}
}
