use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use super::App;
use super::components::ListEvent;
use super::pages::welcome::field_for_list;
use crate::navigation::ActiveTab;

impl App {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			match key.code {
				KeyCode::Char('c' | 'q') => {
					self.should_quit = true;
					return;
				}
				KeyCode::Char('g') => {
					self.open_selected();
					return;
				}
				KeyCode::Char('w') => {
					self.navigator.close_active();
					return;
				}
				KeyCode::Right => {
					self.navigator.next_tab();
					return;
				}
				KeyCode::Left => {
					self.navigator.previous_tab();
					return;
				}
				_ => {}
			}
		}

		if *self.navigator.active() == ActiveTab::Welcome {
			if let Some(event) = self.welcome.handle_key(key) {
				self.apply_list_event(event);
			}
		} else if let Some(page) = self.navigator.active_view_mut() {
			page.handle_key(key);
		}
	}

	pub(crate) fn open_selected(&mut self) {
		match self.navigator.open_selected() {
			Ok(outcome) => debug!(key = outcome.key(), "open action"),
			Err(err) => self.notify_navigation_error(&err),
		}
	}

	pub(crate) fn apply_list_event(&mut self, event: ListEvent) {
		match event {
			ListEvent::Selected { list, item } => {
				let Some(field) = field_for_list(list) else {
					return;
				};
				info!(field = field.label(), value = %item.id, "selection changed");
				self.navigator.select(field, item.id);
			}
			ListEvent::SourceFailed { list, error } => {
				let what = field_for_list(list).map_or(list.0, |field| field.label());
				self.notifications
					.error(format!("Can't load {what} list: {error}"));
			}
		}
	}
}
