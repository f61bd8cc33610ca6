//! Pure mapping from UI state to what should be drawn.
//!
//! Nothing here touches the terminal, so every state transition can be checked
//! by comparing views.

use seatview_api::{SeatingAssignment, SeatingRecord};

use super::panel::{Panel, PanelOutcome};
use super::state::UiState;
use super::tabs::TabId;
use super::theme::ThemeMode;
use crate::lookup::LookupRows;

pub const STUDENT_HEADERS: [&str; 7] = [
	"Roll No",
	"Day",
	"Course Code",
	"Date",
	"Shift",
	"Room No",
	"Course Name",
];

pub const FACULTY_HEADERS: [&str; 6] = [
	"Course Code",
	"Day",
	"Shift",
	"Date",
	"Room No",
	"Course Name",
];

/// Header and cell text for a results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
	pub headers: Vec<&'static str>,
	pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
	Idle { hint: &'static str },
	Results { caption: String, table: TableView },
	NoResults { caption: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
	pub tab: TabId,
	pub label: &'static str,
	pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
	pub message: String,
	pub is_error: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
	pub tabs: Vec<TabView>,
	pub theme: ThemeMode,
	pub busy: bool,
	pub toast: Option<ToastView>,
	pub prompt: &'static str,
	pub panel: PanelView,
}

#[must_use]
pub fn student_cells(record: &SeatingRecord) -> Vec<String> {
	vec![
		record.roll_no.clone(),
		record.exam_day.clone(),
		record.course_code.clone(),
		record.date.clone(),
		record.shift.clone(),
		record.room_no.clone(),
		record.course_name.clone(),
	]
}

#[must_use]
pub fn faculty_cells(assignment: &SeatingAssignment) -> Vec<String> {
	vec![
		assignment.course_code.clone(),
		assignment.day.clone(),
		assignment.shift.clone(),
		assignment.date.clone(),
		assignment.room_no.clone(),
		assignment.course_name.clone(),
	]
}

/// Build the table for `rows`, one table row per record in input order.
#[must_use]
pub fn table_view(rows: &LookupRows) -> TableView {
	match rows {
		LookupRows::Student(records) => TableView {
			headers: STUDENT_HEADERS.to_vec(),
			rows: records.iter().map(student_cells).collect(),
		},
		LookupRows::Faculty(assignments) => TableView {
			headers: FACULTY_HEADERS.to_vec(),
			rows: assignments.iter().map(faculty_cells).collect(),
		},
	}
}

#[must_use]
pub fn prompt_for(tab: TabId) -> &'static str {
	match tab {
		TabId::Student => "Roll No",
		TabId::Faculty => "Course Code",
	}
}

fn idle_hint(tab: TabId) -> &'static str {
	match tab {
		TabId::Student => "Type a roll number and press Enter to see your exam seats.",
		TabId::Faculty => "Type a course code and press Enter to see its exam rooms.",
	}
}

#[must_use]
pub fn panel_view(panel: &Panel) -> PanelView {
	let term = panel.search_term().unwrap_or_default();
	match panel.outcome() {
		PanelOutcome::Idle => PanelView::Idle {
			hint: idle_hint(panel.tab()),
		},
		PanelOutcome::Results => PanelView::Results {
			caption: format!("Results for {term}"),
			table: table_view(panel.rows()),
		},
		PanelOutcome::NoResults => PanelView::NoResults {
			caption: format!("No results found for {term}"),
		},
	}
}

#[must_use]
pub fn screen_view(state: &UiState, panel: &Panel) -> ScreenView {
	let active = state.tabs.active();
	let tabs = TabId::ALL
		.iter()
		.map(|&tab| TabView {
			tab,
			label: tab.labels().for_layout(state.layout),
			active: state.tabs.is_active(tab),
		})
		.collect();
	let toast = state.toasts.current().map(|toast| ToastView {
		message: toast.message.clone(),
		is_error: toast.is_error,
	});

	ScreenView {
		tabs,
		theme: state.theme.mode(),
		busy: state.busy.is_visible(),
		toast,
		prompt: prompt_for(active),
		panel: panel_view(panel),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(course: &str, name: &str) -> SeatingRecord {
		SeatingRecord {
			roll_no: "2302MC05".into(),
			exam_day: "Thursday".into(),
			course_code: course.into(),
			date: "2025-02-27".into(),
			shift: "Evening".into(),
			room_no: "408".into(),
			course_name: name.into(),
		}
	}

	#[test]
	fn student_table_keeps_order_and_columns() {
		let view = table_view(&LookupRows::Student(vec![
			record("MA2204", "Engineering Mechanics"),
			record("CS2207", "-"),
		]));

		assert_eq!(view.headers, STUDENT_HEADERS.to_vec());
		assert_eq!(view.rows.len(), 2);
		assert_eq!(
			view.rows[0],
			vec![
				"2302MC05",
				"Thursday",
				"MA2204",
				"2025-02-27",
				"Evening",
				"408",
				"Engineering Mechanics"
			]
		);
		assert_eq!(view.rows[1][2], "CS2207");
		assert_eq!(view.rows[1][6], "-");
	}

	#[test]
	fn faculty_table_repeats_shared_fields() {
		let rows = ["A1", "A2", "A3"]
			.iter()
			.map(|room| SeatingAssignment {
				course_code: "CS101".into(),
				day: "Mon".into(),
				shift: "M".into(),
				date: "2024-01-01".into(),
				room_no: (*room).into(),
				course_name: "-".into(),
			})
			.collect();
		let view = table_view(&LookupRows::Faculty(rows));

		assert_eq!(view.headers, FACULTY_HEADERS.to_vec());
		assert_eq!(view.rows.len(), 3);
		for (row, room) in view.rows.iter().zip(["A1", "A2", "A3"]) {
			assert_eq!(row, &vec!["CS101", "Mon", "M", "2024-01-01", room, "-"]);
		}
	}

	#[test]
	fn panel_views_follow_outcome() {
		let mut panel = Panel::new(TabId::Student);
		assert!(matches!(panel_view(&panel), PanelView::Idle { .. }));

		panel.show_results("2302MC05".into(), LookupRows::Student(vec![record("MA2204", "-")]));
		match panel_view(&panel) {
			PanelView::Results { caption, table } => {
				assert_eq!(caption, "Results for 2302MC05");
				assert_eq!(table.rows.len(), 1);
			}
			other => panic!("unexpected view {other:?}"),
		}

		panel.show_failure("NOBODY".into());
		assert_eq!(
			panel_view(&panel),
			PanelView::NoResults {
				caption: "No results found for NOBODY".into()
			}
		);
	}
}
