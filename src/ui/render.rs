use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use super::App;
use super::components::{render_footer, render_tab_bar};
use super::pages::{DrawContext, tab_label};
use crate::navigation::ActiveTab;

const WELCOME_LABEL: &str = "Welcome";

impl App {
	pub(crate) fn tab_labels(&self) -> Vec<String> {
		self.navigator
			.tab_order()
			.into_iter()
			.map(|tab| match tab {
				ActiveTab::Welcome => WELCOME_LABEL.to_string(),
				ActiveTab::Service(key) => self
					.navigator
					.view(&key)
					.map(|page| tab_label(&**page))
					.unwrap_or(key),
			})
			.collect()
	}

	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(frame.area());

		let labels = self.tab_labels();
		render_tab_bar(
			frame,
			rows[0],
			&labels,
			self.navigator.active_index(),
			&self.theme,
		);

		let ctx = DrawContext {
			theme: &self.theme,
			throbber_state: &self.throbber_state,
		};
		if *self.navigator.active() == ActiveTab::Welcome {
			self.welcome.draw(frame, rows[1], &ctx);
		} else if let Some(page) = self.navigator.active_view_mut() {
			page.draw(frame, rows[1], &ctx);
		}

		render_footer(frame, rows[2], self.navigator.footer_path(), &self.theme);
		self.notifications.draw(frame, rows[1], &self.theme);
	}
}
