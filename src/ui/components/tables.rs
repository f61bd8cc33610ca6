use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;
use crate::ui::view::TableView;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADER_HEIGHT: u16 = 1;

/// Render a results table with a styled header and separator line.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	view: &TableView,
	theme: &Theme,
) {
	let header_cells = view.headers.iter().map(|header| Cell::from(*header));
	let header = Row::new(header_cells)
		.style(theme.header_style())
		.height(HEADER_HEIGHT)
		.bottom_margin(1);

	let rows = view
		.rows
		.iter()
		.map(|cells| Row::new(cells.iter().map(|cell| Cell::from(cell.as_str()))));

	let table = Table::new(rows, column_widths(view))
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme, HEADER_HEIGHT);
}

/// Size every column to its widest cell; the last column takes the slack.
pub fn column_widths(view: &TableView) -> Vec<Constraint> {
	let count = view.headers.len();
	if count == 0 {
		return vec![Constraint::Fill(1)];
	}

	let mut widths: Vec<usize> = view.headers.iter().map(|header| header.width()).collect();
	for row in &view.rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.width());
		}
	}

	widths
		.into_iter()
		.enumerate()
		.map(|(index, width)| {
			let width = u16::try_from(width).unwrap_or(u16::MAX);
			if index + 1 == count {
				Constraint::Min(width)
			} else {
				Constraint::Length(width)
			}
		})
		.collect()
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let sep_y = area.y + header_height;
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	let header_bg = theme.header_bg();
	let base_style = Style::new().bg(header_bg);
	if width <= 2 {
		let para = Paragraph::new(" ".repeat(width)).style(base_style);
		frame.render_widget(para, sep_rect);
		return;
	}

	let middle = "─".repeat(width - 2);
	let middle_style = Style::new().bg(header_bg).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled(middle, middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}
