use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line text field backing a lookup form.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> QueryInput<'a> {
	pub fn new(placeholder: &str) -> Self {
		let mut textarea = TextArea::default();
		textarea.set_cursor_line_style(Style::default());
		if !placeholder.is_empty() {
			textarea.set_placeholder_text(placeholder);
		}
		Self { textarea }
	}

	/// Current text of the field.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Forward a key to the field. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	pub fn set_text(&mut self, text: &str) {
		self.textarea.select_all();
		self.textarea.cut();
		self.textarea.insert_str(text);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn press(input: &mut QueryInput<'_>, code: KeyCode) -> bool {
		input.input(KeyEvent::new(code, KeyModifiers::NONE))
	}

	#[test]
	fn typing_updates_text() {
		let mut input = QueryInput::new("roll number");
		assert_eq!(input.text(), "");
		assert!(press(&mut input, KeyCode::Char('c')));
		assert!(press(&mut input, KeyCode::Char('s')));
		assert_eq!(input.text(), "cs");
		assert!(press(&mut input, KeyCode::Backspace));
		assert_eq!(input.text(), "c");
	}

	#[test]
	fn set_text_replaces_content() {
		let mut input = QueryInput::default();
		input.set_text("old");
		input.set_text("  cs101  ");
		assert_eq!(input.text(), "  cs101  ");
	}
}
