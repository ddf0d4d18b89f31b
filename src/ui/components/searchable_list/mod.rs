//! A text-filterable list of items with single selection.
//!
//! The list loads its items once from an [`ItemSource`] when mounted, then
//! filters them on its own worker thread as the query changes. The cursor
//! (highlight) and the committed selection are tracked separately; selection
//! is kept by item id so it survives refiltering.

mod render;
mod runtime;

use std::sync::Arc;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;
use tracing::{debug, trace};

use self::runtime::FilterRuntime;
use crate::model::Item;
use crate::sources::{ItemSource, SourceError};
use crate::systems::filter::{FilterResult, normalize_query};
use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

const PAGE_STEP: isize = 10;

/// Identifies a list in the events it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(pub &'static str);

/// Emitted when the user commits a row or the item source fails.
#[derive(Debug)]
pub enum ListEvent {
	Selected { list: ListId, item: Item },
	SourceFailed { list: ListId, error: SourceError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadState {
	Idle,
	Loading,
	Ready,
	Failed,
}

pub struct SearchableList<'a> {
	id: ListId,
	title: String,
	input: QueryInput<'a>,
	items: Arc<[Item]>,
	visible: Vec<usize>,
	cursor: ListState,
	selected_id: Option<String>,
	state: LoadState,
	runtime: FilterRuntime,
}

impl<'a> SearchableList<'a> {
	#[must_use]
	pub fn new(id: ListId, title: impl Into<String>, source: Arc<dyn ItemSource>) -> Self {
		Self::with_theme(id, title, source, &Theme::default())
	}

	#[must_use]
	pub fn with_theme(
		id: ListId,
		title: impl Into<String>,
		source: Arc<dyn ItemSource>,
		theme: &Theme,
	) -> Self {
		let title = title.into();
		Self {
			id,
			input: QueryInput::new("", &title, theme.empty_style()),
			title,
			items: Arc::from(Vec::new()),
			visible: Vec::new(),
			cursor: ListState::default(),
			selected_id: None,
			state: LoadState::Idle,
			runtime: FilterRuntime::spawn(id.0, source),
		}
	}

	#[must_use]
	pub fn id(&self) -> ListId {
		self.id
	}

	#[must_use]
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Start loading the items. Later calls do nothing.
	pub fn mount(&mut self) {
		if self.runtime.request_load() {
			debug!(list = self.id.0, "mounting list");
			self.state = LoadState::Loading;
		}
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.state == LoadState::Loading || self.runtime.is_in_flight()
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	pub fn set_focused(&mut self, focused: bool) {
		self.input.set_focused(focused);
	}

	/// Replace the query and refilter.
	pub fn set_query(&mut self, text: &str) {
		if self.input.set_text(text) {
			self.query_changed();
		}
	}

	fn query_changed(&mut self) {
		// Queries typed while loading are applied once the items arrive.
		if self.state == LoadState::Ready {
			let query = self.query().to_string();
			self.runtime.issue_filter(query);
		}
	}

	/// Apply every result the worker has produced so far.
	pub fn pump(&mut self) -> Vec<ListEvent> {
		let mut events = Vec::new();
		while let Ok(result) = self.runtime.try_recv() {
			if let Some(event) = self.apply_result(result) {
				events.push(event);
			}
		}
		events
	}

	pub(crate) fn apply_result(&mut self, result: FilterResult) -> Option<ListEvent> {
		match result {
			FilterResult::Loaded(Ok(items)) => {
				self.visible = (0..items.len()).collect();
				self.items = items;
				self.state = LoadState::Ready;
				self.ensure_cursor();
				if normalize_query(self.query()).is_some() {
					self.query_changed();
				}
				None
			}
			FilterResult::Loaded(Err(error)) => {
				self.state = LoadState::Failed;
				Some(ListEvent::SourceFailed {
					list: self.id,
					error,
				})
			}
			FilterResult::Matches { id, indices } => {
				if !self.runtime.matches_latest(id) {
					trace!(list = self.id.0, id, "ignoring stale filter result");
					return None;
				}
				self.runtime.record_applied();
				self.visible = indices;
				self.ensure_cursor();
				None
			}
		}
	}

	/// Handle a key while the list has focus.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<ListEvent> {
		match key.code {
			KeyCode::Enter => return self.commit_highlighted(),
			KeyCode::Up => self.move_cursor(-1),
			KeyCode::Down => self.move_cursor(1),
			KeyCode::PageUp => self.move_cursor(-PAGE_STEP),
			KeyCode::PageDown => self.move_cursor(PAGE_STEP),
			KeyCode::Home => self.cursor.select(self.first_row()),
			KeyCode::End => self.cursor.select(self.visible.len().checked_sub(1)),
			_ => {
				if self.input.input(key) {
					self.query_changed();
				}
			}
		}
		None
	}

	/// Mark the highlighted row as selected, clearing any previous selection.
	pub fn commit_highlighted(&mut self) -> Option<ListEvent> {
		let item = self.highlighted()?.clone();
		debug!(list = self.id.0, item = %item.id, "item selected");
		self.selected_id = Some(item.id.clone());
		Some(ListEvent::Selected {
			list: self.id,
			item,
		})
	}

	/// Mark an item as selected without emitting an event.
	pub fn preselect(&mut self, id: impl Into<String>) {
		self.selected_id = Some(id.into());
	}

	#[must_use]
	pub fn highlighted(&self) -> Option<&Item> {
		let row = self.cursor.selected()?;
		let index = *self.visible.get(row)?;
		self.items.get(index)
	}

	#[must_use]
	pub fn selected(&self) -> Option<&Item> {
		let id = self.selected_id.as_deref()?;
		self.items.iter().find(|item| item.id == id)
	}

	#[must_use]
	pub fn selected_id(&self) -> Option<&str> {
		self.selected_id.as_deref()
	}

	pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
		self.visible.iter().filter_map(|index| self.items.get(*index))
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.visible.len()
	}

	#[must_use]
	pub fn total_len(&self) -> usize {
		self.items.len()
	}

	/// `"{visible}/{total}"`.
	#[must_use]
	pub fn footer(&self) -> String {
		format!("{}/{}", self.visible.len(), self.items.len())
	}

	fn first_row(&self) -> Option<usize> {
		(!self.visible.is_empty()).then_some(0)
	}

	fn ensure_cursor(&mut self) {
		let len = self.visible.len();
		match self.cursor.selected() {
			_ if len == 0 => self.cursor.select(None),
			Some(row) if row >= len => self.cursor.select(Some(len - 1)),
			Some(_) => {}
			None => self.cursor.select(Some(0)),
		}
	}

	fn move_cursor(&mut self, delta: isize) {
		let len = self.visible.len();
		if len == 0 {
			self.cursor.select(None);
			return;
		}
		let current = self.cursor.selected().unwrap_or(0) as isize;
		let next = (current + delta).clamp(0, len as isize - 1);
		self.cursor.select(Some(next as usize));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::thread;
	use std::time::{Duration, Instant};

	use ratatui::crossterm::event::KeyModifiers;
	use ratatui::{Terminal, backend::TestBackend};
	use throbber_widgets_tui::ThrobberState;

	const PROFILES: ListId = ListId("profile-list");

	fn source(titles: &'static [&'static str]) -> Arc<dyn ItemSource> {
		Arc::new(move || -> Result<Vec<Item>, SourceError> {
			Ok(titles.iter().map(|title| Item::labelled(*title)).collect())
		})
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn pump_until(
		list: &mut SearchableList<'_>,
		done: impl Fn(&SearchableList<'_>) -> bool,
	) -> Vec<ListEvent> {
		let deadline = Instant::now() + Duration::from_secs(5);
		let mut events = Vec::new();
		loop {
			events.extend(list.pump());
			if done(list) {
				return events;
			}
			assert!(Instant::now() < deadline, "list did not settle in time");
			thread::sleep(Duration::from_millis(5));
		}
	}

	fn titles(list: &SearchableList<'_>) -> Vec<String> {
		list.visible_items().map(|item| item.title.clone()).collect()
	}

	fn loaded(titles: &'static [&'static str]) -> SearchableList<'static> {
		let mut list = SearchableList::new(PROFILES, "Profile", source(titles));
		list.mount();
		pump_until(&mut list, |list| list.state == LoadState::Ready);
		list
	}

	#[test]
	fn filtering_narrows_and_clearing_restores() {
		let mut list = loaded(&["default", "admin"]);
		assert_eq!(list.footer(), "2/2");

		list.set_query("ad");
		pump_until(&mut list, |list| !list.runtime.is_in_flight());
		assert_eq!(titles(&list), vec!["admin"]);
		assert_eq!(list.footer(), "1/2");

		list.set_query("");
		pump_until(&mut list, |list| !list.runtime.is_in_flight());
		assert_eq!(titles(&list), vec!["default", "admin"]);
		assert_eq!(list.footer(), "2/2");
	}

	#[test]
	fn empty_sources_and_misses_show_zero_rows() {
		let empty = loaded(&[]);
		assert_eq!(empty.footer(), "0/0");
		assert!(empty.highlighted().is_none());

		let mut list = loaded(&["default", "admin"]);
		list.set_query("zzz");
		pump_until(&mut list, |list| !list.runtime.is_in_flight());
		assert_eq!(list.footer(), "0/2");
		assert!(list.highlighted().is_none());
	}

	#[test]
	fn typing_before_the_items_arrive_is_reapplied() {
		let mut list = SearchableList::new(PROFILES, "Profile", source(&["default", "admin"]));
		list.set_query("ADM");
		list.mount();
		pump_until(&mut list, |list| {
			list.state == LoadState::Ready && !list.runtime.is_in_flight()
		});
		assert_eq!(titles(&list), vec!["admin"]);
	}

	#[test]
	fn keystrokes_edit_the_query() {
		let mut list = loaded(&["default", "admin"]);
		assert!(list.handle_key(key(KeyCode::Char('d'))).is_none());
		assert!(list.handle_key(key(KeyCode::Char('e'))).is_none());
		assert_eq!(list.query(), "de");
		pump_until(&mut list, |list| !list.runtime.is_in_flight());
		assert_eq!(titles(&list), vec!["default"]);
	}

	#[test]
	fn stale_results_are_ignored() {
		let mut list = loaded(&["default", "admin"]);
		list.set_query("def");
		list.set_query("adm");

		let stale = list.apply_result(FilterResult::Matches {
			id: 1,
			indices: vec![0],
		});
		assert!(stale.is_none());
		assert_eq!(list.footer(), "2/2");

		list.apply_result(FilterResult::Matches {
			id: 2,
			indices: vec![1],
		});
		assert_eq!(titles(&list), vec!["admin"]);
	}

	#[test]
	fn one_row_is_selected_at_a_time() {
		let mut list = loaded(&["default", "admin", "readonly"]);

		match list.handle_key(key(KeyCode::Enter)) {
			Some(ListEvent::Selected { list: id, item }) => {
				assert_eq!(id, PROFILES);
				assert_eq!(item.id, "default");
			}
			other => panic!("unexpected event: {other:?}"),
		}

		list.handle_key(key(KeyCode::Down));
		list.commit_highlighted();
		assert_eq!(list.selected_id(), Some("admin"));

		list.handle_key(key(KeyCode::End));
		assert_eq!(list.highlighted().unwrap().id, "readonly");
		assert_eq!(list.selected().unwrap().id, "admin");
	}

	#[test]
	fn selection_survives_refiltering() {
		let mut list = loaded(&["default", "admin"]);
		list.handle_key(key(KeyCode::Down));
		list.commit_highlighted();

		list.set_query("def");
		pump_until(&mut list, |list| !list.runtime.is_in_flight());
		assert_eq!(list.highlighted().unwrap().id, "default");
		assert_eq!(list.selected_id(), Some("admin"));
	}

	#[test]
	fn sources_are_invoked_once() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let source: Arc<dyn ItemSource> = Arc::new(move || -> Result<Vec<Item>, SourceError> {
			counter.fetch_add(1, Ordering::SeqCst);
			Ok(vec![Item::labelled("default")])
		});

		let mut list = SearchableList::new(PROFILES, "Profile", source);
		list.mount();
		list.mount();
		pump_until(&mut list, |list| list.state == LoadState::Ready);
		list.mount();
		list.set_query("x");
		pump_until(&mut list, |list| !list.runtime.is_in_flight());

		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn source_failures_become_events() {
		let failing: Arc<dyn ItemSource> = Arc::new(|| -> Result<Vec<Item>, SourceError> {
			Err(SourceError::NoHome)
		});
		let mut list = SearchableList::new(PROFILES, "Profile", failing);
		list.mount();
		let events = pump_until(&mut list, |list| list.state == LoadState::Failed);

		assert_eq!(events.len(), 1);
		assert!(matches!(
			&events[0],
			ListEvent::SourceFailed { list, error: SourceError::NoHome } if *list == PROFILES
		));
		assert_eq!(list.footer(), "0/0");
	}

	#[test]
	fn rendering_shows_rows_and_counter() {
		let mut list = loaded(&["default", "admin"]);
		list.commit_highlighted();

		let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
		terminal
			.draw(|frame| {
				list.draw(
					frame,
					frame.area(),
					true,
					&Theme::default(),
					&ThrobberState::default(),
				)
			})
			.unwrap();

		let view = terminal.backend().to_string();
		assert!(view.contains("Profile"));
		assert!(view.contains("default"));
		assert!(view.contains("admin"));
		assert!(view.contains("2/2"));
	}

	#[test]
	fn empty_query_shows_the_label_as_placeholder() {
		let mut list = loaded(&["default"]);
		let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
		terminal
			.draw(|frame| {
				list.draw(
					frame,
					frame.area(),
					false,
					&Theme::default(),
					&ThrobberState::default(),
				)
			})
			.unwrap();

		let view = terminal.backend().to_string();
		let query_row = view.lines().nth(1).unwrap_or_default();
		assert!(query_row.contains("Profile"), "query row was {query_row}");
	}
}
