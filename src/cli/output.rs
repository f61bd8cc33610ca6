use std::fmt::Write;

use anyhow::Result;
use seatview::LookupRows;
use seatview::ui::view::{TableView, table_view};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

/// Print the lookup result as an aligned text table.
pub(crate) fn print_plain(key: &str, rows: &LookupRows) {
	if rows.is_empty() {
		println!("No results found for {key}");
		return;
	}
	print!("{}", format_table(&table_view(rows)));
}

/// Render `view` as left-aligned columns with a dashed rule under the header.
pub(crate) fn format_table(view: &TableView) -> String {
	let mut widths: Vec<usize> = view.headers.iter().map(|header| header.width()).collect();
	for row in &view.rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.width());
		}
	}

	let mut out = String::new();
	push_row(&mut out, view.headers.iter().copied(), &widths);
	let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
	push_row(&mut out, rule.iter().map(String::as_str), &widths);
	for row in &view.rows {
		push_row(&mut out, row.iter().map(String::as_str), &widths);
	}
	out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
	let mut line = String::new();
	for (index, (cell, width)) in cells.zip(widths).enumerate() {
		if index > 0 {
			line.push_str(COLUMN_GAP);
		}
		line.push_str(cell);
		let pad = width.saturating_sub(cell.width());
		line.extend(std::iter::repeat_n(' ', pad));
	}
	let _ = writeln!(out, "{}", line.trim_end());
}

/// Format the lookup result as pretty-printed JSON.
pub(crate) fn format_rows_json(rows: &LookupRows) -> Result<String> {
	let json = match rows {
		LookupRows::Student(records) => serde_json::to_string_pretty(records)?,
		LookupRows::Faculty(assignments) => serde_json::to_string_pretty(assignments)?,
	};
	Ok(json)
}

/// Print the JSON representation of the lookup result.
pub(crate) fn print_json(rows: &LookupRows) -> Result<()> {
	println!("{}", format_rows_json(rows)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use seatview::SeatingAssignment;
	use serde_json::Value;

	use super::*;

	fn rooms() -> LookupRows {
		LookupRows::Faculty(
			["A1", "LT-204"]
				.into_iter()
				.map(|room| SeatingAssignment {
					course_code: "CS101".into(),
					day: "Mon".into(),
					shift: "M".into(),
					date: "2024-01-01".into(),
					room_no: room.into(),
					course_name: "-".into(),
				})
				.collect(),
		)
	}

	#[test]
	fn plain_table_aligns_columns() {
		let text = format_table(&table_view(&rooms()));
		let lines: Vec<&str> = text.lines().collect();

		assert_eq!(lines.len(), 4);
		assert_eq!(
			lines[0],
			"Course Code  Day  Shift  Date        Room No  Course Name"
		);
		assert!(lines[1].starts_with("-----------  ---  -----"));
		assert_eq!(lines[2], "CS101        Mon  M      2024-01-01  A1       -");
		assert_eq!(lines[3], "CS101        Mon  M      2024-01-01  LT-204   -");
	}

	#[test]
	fn json_lists_every_room() {
		let json = format_rows_json(&rooms()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");

		assert_eq!(value.as_array().map(Vec::len), Some(2));
		assert_eq!(value[1]["room_no"], "LT-204");
		assert_eq!(value[0]["course_name"], "-");
	}
}
