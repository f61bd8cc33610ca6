use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::QueryInput;
use crate::ui::theme::Theme;
use crate::ui::view::TabView;

const BUSY_LABEL: &str = "Loading";

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub prompt: &'a str,
	pub tabs: &'a [TabView],
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Busy indicator shown at the right edge of the input.
pub struct BusyState<'a> {
	pub busy: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, the query input, and the tabs on the right.
pub fn render_input_with_tabs(frame: &mut Frame, input: InputContext<'_>, busy: BusyState<'_>) {
	let InputContext {
		input,
		prompt,
		tabs,
		area,
		theme,
	} = input;

	let tabs_width = calculate_tabs_width(tabs);
	let prompt_width = calculate_prompt_width(prompt);
	let constraints = layout_constraints(!prompt.is_empty(), prompt_width, tabs_width);

	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(constraints)
		.split(area);

	if !prompt.is_empty() {
		let prompt_widget = Paragraph::new(format!("{prompt} > ")).style(theme.prompt_style());
		frame.render_widget(prompt_widget, horizontal[0]);
	}

	let input_index = usize::from(!prompt.is_empty());
	let input_area = horizontal[input_index];
	input.render_textarea(frame, input_area);
	if busy.busy {
		render_busy(frame, input_area, busy.throbber_state, theme);
	}

	let tabs_area = horizontal[horizontal.len() - 1];
	let tabs_inner = Rect {
		x: tabs_area.x.saturating_add(1),
		width: tabs_area.width.saturating_sub(1),
		..tabs_area
	};
	let selected = selected_tab_index(tabs);
	let widget = Tabs::new(build_tab_titles(theme, tabs))
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(widget, tabs_inner);
}

fn calculate_prompt_width(prompt: &str) -> u16 {
	if prompt.is_empty() {
		0
	} else {
		u16::try_from(prompt.width()).unwrap_or(u16::MAX).saturating_add(3)
	}
}

fn layout_constraints(has_prompt: bool, prompt_width: u16, tabs_width: u16) -> Vec<Constraint> {
	if has_prompt {
		vec![
			Constraint::Length(prompt_width),
			Constraint::Min(1),
			Constraint::Length(tabs_width),
		]
	} else {
		vec![Constraint::Min(1), Constraint::Length(tabs_width)]
	}
}

fn selected_tab_index(tabs: &[TabView]) -> usize {
	tabs.iter().position(|tab| tab.active).unwrap_or(0)
}

fn build_tab_titles(theme: &Theme, tabs: &[TabView]) -> Vec<Line<'static>> {
	let active = theme.header_style();
	let inactive = theme.tab_inactive_style();
	tabs.iter()
		.map(|tab| {
			let style = if tab.active { active } else { inactive };
			Line::from(format!(" {} ", tab.label)).style(style)
		})
		.collect()
}

fn calculate_tabs_width(tabs: &[TabView]) -> u16 {
	let mut width = 0u16;
	for tab in tabs {
		let label_len = u16::try_from(tab.label.width()).unwrap_or(u16::MAX);
		width = width.saturating_add(label_len.saturating_add(3));
	}
	width.max(12)
}

/// Draw the throbber and label right-aligned inside the input row.
fn render_busy(frame: &mut Frame, area: Rect, throbber_state: &ThrobberState, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let muted_style = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted_style)
		.throbber_style(muted_style);
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(throbber_state));
	line.spans.push(Span::styled(BUSY_LABEL, muted_style));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	let width = line_width.min(area.width);
	let start_x = area.right().saturating_sub(width);
	frame
		.buffer_mut()
		.set_line(start_x, area.top(), &line, width);
}
