use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::tabs::TabId;

const PAGE_ROWS: isize = 10;

impl App<'_> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => self.should_quit = true,
			KeyCode::Char('c' | 'q') if ctrl => self.should_quit = true,
			KeyCode::Char('t') if ctrl => self.toggle_theme(),
			KeyCode::Enter => {
				self.submit();
			}
			KeyCode::Tab => self.state.tabs.next(),
			KeyCode::BackTab => self.state.tabs.previous(),
			KeyCode::F(1) => self.activate_tab(TabId::Student),
			KeyCode::F(2) => self.activate_tab(TabId::Faculty),
			KeyCode::Up => self.active_panel_mut().select_offset(-1),
			KeyCode::Down => self.active_panel_mut().select_offset(1),
			KeyCode::PageUp => self.active_panel_mut().select_offset(-PAGE_ROWS),
			KeyCode::PageDown => self.active_panel_mut().select_offset(PAGE_ROWS),
			KeyCode::Home if ctrl => self.active_panel_mut().select_first(),
			KeyCode::End if ctrl => self.active_panel_mut().select_last(),
			_ => {
				let tab = self.active_tab();
				self.input_mut(tab).input(key);
			}
		}
	}

	fn active_panel_mut(&mut self) -> &mut super::panel::Panel {
		let tab = self.active_tab();
		self.panel_mut(tab)
	}
}
