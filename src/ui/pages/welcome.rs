//! The welcome tab: logo, help line and the three selection lists.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use tracing::debug;

use super::DrawContext;
use crate::model::{PathField, ServicePath};
use crate::sources::ItemSources;
use crate::ui::components::{LOGO_HEIGHT, ListEvent, ListId, SearchableList, render_logo};
use crate::ui::style::Theme;

pub const PROFILE_LIST: ListId = ListId("profile-list");
pub const REGION_LIST: ListId = ListId("region-list");
pub const SERVICE_LIST: ListId = ListId("service-list");

pub const HELP_TEXT: &str =
	"Select profile, region and service, then press Ctrl+G to open service.";

/// Path field set by selections in `list`.
#[must_use]
pub fn field_for_list(list: ListId) -> Option<PathField> {
	match list {
		PROFILE_LIST => Some(PathField::Profile),
		REGION_LIST => Some(PathField::Region),
		SERVICE_LIST => Some(PathField::Service),
		_ => None,
	}
}

fn list_for_field(field: PathField) -> usize {
	match field {
		PathField::Profile => 0,
		PathField::Region => 1,
		PathField::Service => 2,
	}
}

pub struct WelcomePage {
	lists: [SearchableList<'static>; 3],
	focus: usize,
}

impl WelcomePage {
	#[must_use]
	pub fn new(sources: &ItemSources, theme: &Theme) -> Self {
		let mut page = Self {
			lists: [
				SearchableList::with_theme(
					PROFILE_LIST,
					"Profile",
					sources.profiles.clone(),
					theme,
				),
				SearchableList::with_theme(REGION_LIST, "Region", sources.regions.clone(), theme),
				SearchableList::with_theme(
					SERVICE_LIST,
					"Service",
					sources.services.clone(),
					theme,
				),
			],
			focus: 0,
		};
		page.lists[0].set_focused(true);
		page
	}

	/// Start loading every list. Safe to call repeatedly.
	pub fn mount(&mut self) {
		for list in &mut self.lists {
			list.mount();
		}
	}

	/// Mark the lists' selections from an already known path.
	pub fn preselect(&mut self, path: &ServicePath) {
		for field in PathField::ALL {
			if let Some(value) = path.get(field) {
				self.lists[list_for_field(field)].preselect(value);
			}
		}
	}

	#[must_use]
	pub fn focused(&self) -> ListId {
		self.lists[self.focus].id()
	}

	#[must_use]
	pub fn list(&self, id: ListId) -> Option<&SearchableList<'static>> {
		self.lists.iter().find(|list| list.id() == id)
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.lists.iter().any(|list| list.is_loading())
	}

	fn set_focus(&mut self, index: usize) {
		self.lists[self.focus].set_focused(false);
		self.focus = index % self.lists.len();
		self.lists[self.focus].set_focused(true);
		debug!(list = self.focused().0, "focus moved");
	}

	pub fn focus_next(&mut self) {
		self.set_focus(self.focus + 1);
	}

	pub fn focus_previous(&mut self) {
		self.set_focus(self.focus + self.lists.len() - 1);
	}

	/// Collect events from every list.
	pub fn pump(&mut self) -> Vec<ListEvent> {
		self.lists.iter_mut().flat_map(|list| list.pump()).collect()
	}

	pub fn handle_key(&mut self, key: KeyEvent) -> Option<ListEvent> {
		match key.code {
			KeyCode::Tab => {
				self.focus_next();
				None
			}
			KeyCode::BackTab => {
				self.focus_previous();
				None
			}
			_ => self.lists[self.focus].handle_key(key),
		}
	}

	pub fn draw(&mut self, frame: &mut Frame, area: Rect, ctx: &DrawContext<'_>) {
		let show_logo = area.height >= LOGO_HEIGHT + 12;
		let logo_height = if show_logo { LOGO_HEIGHT + 1 } else { 0 };
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(logo_height),
				Constraint::Length(2),
				Constraint::Min(3),
			])
			.split(area);

		if show_logo {
			render_logo(frame, rows[0]);
		}
		frame.render_widget(
			Paragraph::new(HELP_TEXT)
				.alignment(Alignment::Center)
				.style(ctx.theme.prompt_style()),
			rows[1],
		);

		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Ratio(1, 3); 3])
			.split(rows[2]);
		let focus = self.focus;
		for (index, list) in self.lists.iter_mut().enumerate() {
			list.draw(
				frame,
				columns[index],
				index == focus,
				ctx.theme,
				ctx.throbber_state,
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;
	use std::thread;
	use std::time::{Duration, Instant};

	use ratatui::crossterm::event::KeyModifiers;
	use ratatui::{Terminal, backend::TestBackend};
	use throbber_widgets_tui::ThrobberState;

	use crate::model::Item;
	use crate::sources::{ItemSource, SourceError};

	fn fixed(titles: &'static [&'static str]) -> Arc<dyn ItemSource> {
		Arc::new(move || -> Result<Vec<Item>, SourceError> {
			Ok(titles.iter().map(|title| Item::labelled(*title)).collect())
		})
	}

	fn sources() -> ItemSources {
		ItemSources {
			profiles: fixed(&["default", "admin"]),
			regions: fixed(&["us-east-1", "eu-west-1"]),
			services: Arc::new(|| -> Result<Vec<Item>, SourceError> {
				Err(SourceError::Other("catalogue unavailable".into()))
			}),
		}
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn settle(page: &mut WelcomePage) -> Vec<ListEvent> {
		let deadline = Instant::now() + Duration::from_secs(5);
		let mut events = Vec::new();
		loop {
			events.extend(page.pump());
			if !page.is_loading() {
				return events;
			}
			assert!(Instant::now() < deadline, "welcome lists did not load in time");
			thread::sleep(Duration::from_millis(5));
		}
	}

	#[test]
	fn lists_map_to_path_fields() {
		assert_eq!(field_for_list(PROFILE_LIST), Some(PathField::Profile));
		assert_eq!(field_for_list(REGION_LIST), Some(PathField::Region));
		assert_eq!(field_for_list(SERVICE_LIST), Some(PathField::Service));
		assert_eq!(field_for_list(ListId("other")), None);
	}

	#[test]
	fn tab_cycles_focus_through_the_lists() {
		let mut page = WelcomePage::new(&sources(), &Theme::default());
		assert_eq!(page.focused(), PROFILE_LIST);
		page.handle_key(key(KeyCode::Tab));
		assert_eq!(page.focused(), REGION_LIST);
		page.handle_key(key(KeyCode::BackTab));
		page.handle_key(key(KeyCode::BackTab));
		assert_eq!(page.focused(), SERVICE_LIST);
	}

	#[test]
	fn enter_selects_from_the_focused_list() {
		let mut page = WelcomePage::new(&sources(), &Theme::default());
		page.mount();
		let events = settle(&mut page);
		assert!(matches!(
			events.as_slice(),
			[ListEvent::SourceFailed { list: SERVICE_LIST, .. }]
		));

		page.handle_key(key(KeyCode::Tab));
		page.handle_key(key(KeyCode::Down));
		match page.handle_key(key(KeyCode::Enter)) {
			Some(ListEvent::Selected { list, item }) => {
				assert_eq!(list, REGION_LIST);
				assert_eq!(item.id, "eu-west-1");
			}
			other => panic!("unexpected event: {other:?}"),
		}
	}

	#[test]
	fn preselect_marks_known_parts() {
		let mut page = WelcomePage::new(&sources(), &Theme::default());
		page.preselect(&ServicePath::from_parts(
			Some("admin".into()),
			None,
			Some("s3".into()),
		));
		assert_eq!(page.list(PROFILE_LIST).unwrap().selected_id(), Some("admin"));
		assert_eq!(page.list(REGION_LIST).unwrap().selected_id(), None);
		assert_eq!(page.list(SERVICE_LIST).unwrap().selected_id(), Some("s3"));
	}

	#[test]
	fn draw_shows_help_and_lists() {
		let mut page = WelcomePage::new(&sources(), &Theme::default());
		page.mount();
		settle(&mut page);

		let theme = Theme::default();
		let throbber_state = ThrobberState::default();
		let ctx = DrawContext {
			theme: &theme,
			throbber_state: &throbber_state,
		};
		let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
		terminal
			.draw(|frame| page.draw(frame, frame.area(), &ctx))
			.unwrap();

		let view = terminal.backend().to_string();
		assert!(view.contains("Ctrl+G to open service"));
		assert!(view.contains("Profile"));
		assert!(view.contains("admin"));
		assert!(view.contains("2/2"));
	}
}
