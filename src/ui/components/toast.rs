use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;
use crate::ui::view::ToastView;

const MAX_TOAST_WIDTH: u16 = 60;

/// Draw `toast` as a banner anchored to the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &ToastView, theme: &Theme) {
	let rect = toast_area(area, &toast.message);
	if rect.width == 0 || rect.height == 0 {
		return;
	}

	let style = theme.toast_style(toast.is_error);
	let block = Block::bordered().style(style);
	let message = Paragraph::new(toast.message.as_str())
		.style(style)
		.alignment(Alignment::Left)
		.wrap(Wrap { trim: true })
		.block(block);

	frame.render_widget(Clear, rect);
	frame.render_widget(message, rect);
}

/// Compute the banner rectangle: as wide as the message allows, wrapped to
/// at most [`MAX_TOAST_WIDTH`] columns, one row above the bottom edge.
pub fn toast_area(area: Rect, message: &str) -> Rect {
	if area.width < 4 || area.height < 3 {
		return Rect::default();
	}

	let text_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
	let width = text_width
		.saturating_add(2)
		.clamp(4, MAX_TOAST_WIDTH)
		.min(area.width);
	let inner_width = width.saturating_sub(2).max(1);
	let lines = text_width.div_ceil(inner_width).max(1);
	let height = lines.saturating_add(2).min(area.height.saturating_sub(1)).max(3);

	Rect {
		x: area.right().saturating_sub(width),
		y: area.bottom().saturating_sub(height.saturating_add(1)).max(area.y),
		width,
		height: height.min(area.height),
	}
}
