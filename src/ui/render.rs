use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::App;
use super::components::{BusyState, InputContext, render_input_with_tabs, render_table, render_toast};
use super::tabs::LabelLayout;
use super::theme::Theme;
use super::view::{PanelView, ScreenView, screen_view};

const NO_RESULTS: &str = "No seating information to show.";

impl App<'_> {
	/// Build the view for the active tab without drawing anything.
	#[must_use]
	pub fn view(&self) -> ScreenView {
		screen_view(&self.state, self.panel(self.active_tab()))
	}

	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let view = self.view();
		let theme = view.theme.palette();
		let active = self.active_tab();

		let full = frame.area();
		frame.render_widget(Block::default().style(theme.base_style()), full);
		let area = full.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		self.input_mut(active).set_style(theme.base_style());
		render_input_with_tabs(
			frame,
			InputContext {
				input: self.input(active),
				prompt: view.prompt,
				tabs: &view.tabs,
				area: layout[0],
				theme: &theme,
			},
			BusyState {
				busy: view.busy,
				throbber_state: &self.throbber_state,
			},
		);

		match &view.panel {
			PanelView::Idle { hint } => {
				render_message(frame, layout[2], hint, &theme);
			}
			PanelView::Results { caption, table } => {
				render_caption(frame, layout[1], caption, &theme);
				let panel = self.panel_mut(active);
				render_table(frame, layout[2], &mut panel.table_state, table, &theme);
			}
			PanelView::NoResults { caption } => {
				render_caption(frame, layout[1], caption, &theme);
				render_message(frame, layout[2], NO_RESULTS, &theme);
			}
		}

		render_footer(frame, layout[3], self.state.layout, &theme);

		if let Some(toast) = &view.toast {
			render_toast(frame, full, toast, &theme);
		}
	}
}

fn render_caption(frame: &mut Frame, area: Rect, caption: &str, theme: &Theme) {
	let line = Line::from(Span::styled(caption.to_owned(), theme.highlight_style()));
	frame.render_widget(Paragraph::new(line), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	if area.height == 0 {
		return;
	}
	let message_area = Rect {
		y: area.y + area.height / 3,
		height: 1,
		..area
	};
	let paragraph = Paragraph::new(message)
		.alignment(Alignment::Center)
		.style(theme.empty_style());
	frame.render_widget(paragraph, message_area);
}

fn render_footer(frame: &mut Frame, area: Rect, layout: LabelLayout, theme: &Theme) {
	let help = match layout {
		LabelLayout::Full => {
			"Enter search · Tab switch · ↑↓ PgUp PgDn rows · Ctrl+Home/End first/last · Ctrl+T theme · Esc quit"
		}
		LabelLayout::Compact => "Enter · Tab · Ctrl+T · Esc",
	};
	frame.render_widget(Paragraph::new(help).style(theme.empty_style()), area);
}
