use indexmap::IndexMap;
use tracing::{debug, info};

use super::error::NavigationError;
use super::registry::{BoundView, PageRegistry};
use crate::model::{PathField, ServicePath};

/// The tab currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveTab {
	Welcome,
	Service(String),
}

/// Result of a successful open action; carries the view key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
	Opened(String),
	Reused(String),
}

impl OpenOutcome {
	#[must_use]
	pub fn key(&self) -> &str {
		match self {
			OpenOutcome::Opened(key) | OpenOutcome::Reused(key) => key,
		}
	}
}

/// Owns the live selection and every open detail view.
///
/// Views are keyed by [`ServicePath::id`] and kept in opening order, which is
/// also the tab order after the welcome tab.
pub struct Navigator<P> {
	selection: ServicePath,
	views: IndexMap<String, P>,
	active: ActiveTab,
	welcome_visible: bool,
	registry: PageRegistry<P>,
}

impl<P: BoundView> Navigator<P> {
	#[must_use]
	pub fn new(registry: PageRegistry<P>) -> Self {
		Self {
			selection: ServicePath::default(),
			views: IndexMap::new(),
			active: ActiveTab::Welcome,
			welcome_visible: true,
			registry,
		}
	}

	#[must_use]
	pub fn selection(&self) -> &ServicePath {
		&self.selection
	}

	/// Record a committed list choice; re-selection overwrites.
	pub fn select(&mut self, field: PathField, value: impl Into<String>) {
		let value = value.into();
		debug!(field = field.label(), %value, "selection changed");
		self.selection.set(field, value);
	}

	pub fn set_selection(&mut self, path: ServicePath) {
		self.selection = path;
	}

	/// Open (or reuse) the view for the live selection.
	pub fn open_selected(&mut self) -> Result<OpenOutcome, NavigationError> {
		let path = self.selection.clone();
		self.open(&path)
	}

	/// Open (or reuse) the view for `path`.
	///
	/// The view is bound to a clone of `path`; nothing changes on error.
	pub fn open(&mut self, path: &ServicePath) -> Result<OpenOutcome, NavigationError> {
		if !path.completed() {
			return Err(NavigationError::Incomplete);
		}

		let key = path.id();
		if self.views.contains_key(&key) {
			debug!(%key, "reusing open view");
			self.active = ActiveTab::Service(key.clone());
			return Ok(OpenOutcome::Reused(key));
		}

		let service = path.service().unwrap_or_default().to_owned();
		let view = self
			.registry
			.build(path.clone())
			.ok_or(NavigationError::NoPage { service })??;

		info!(%key, "opened view");
		self.views.insert(key.clone(), view);
		self.active = ActiveTab::Service(key.clone());
		Ok(OpenOutcome::Opened(key))
	}

	#[must_use]
	pub fn active(&self) -> &ActiveTab {
		&self.active
	}

	#[must_use]
	pub fn active_view(&self) -> Option<&P> {
		match &self.active {
			ActiveTab::Service(key) => self.views.get(key),
			ActiveTab::Welcome => None,
		}
	}

	pub fn active_view_mut(&mut self) -> Option<&mut P> {
		match &self.active {
			ActiveTab::Service(key) => self.views.get_mut(key),
			ActiveTab::Welcome => None,
		}
	}

	#[must_use]
	pub fn view(&self, key: &str) -> Option<&P> {
		self.views.get(key)
	}

	pub fn views(&self) -> impl Iterator<Item = (&str, &P)> {
		self.views.iter().map(|(key, view)| (key.as_str(), view))
	}

	pub fn views_mut(&mut self) -> impl Iterator<Item = &mut P> {
		self.views.values_mut()
	}

	#[must_use]
	pub fn view_count(&self) -> usize {
		self.views.len()
	}

	#[must_use]
	pub fn welcome_visible(&self) -> bool {
		self.welcome_visible
	}

	/// Hide the welcome tab; ignored while no view is open.
	pub fn hide_welcome(&mut self) {
		if self.views.is_empty() {
			return;
		}
		self.welcome_visible = false;
		if self.active == ActiveTab::Welcome {
			self.active = self.tab_order().into_iter().next().unwrap_or(ActiveTab::Welcome);
		}
	}

	pub fn show_welcome(&mut self) {
		self.welcome_visible = true;
		self.active = ActiveTab::Welcome;
	}

	/// Tabs in display order: welcome (when visible), then views by opening order.
	#[must_use]
	pub fn tab_order(&self) -> Vec<ActiveTab> {
		let welcome = self.welcome_visible.then_some(ActiveTab::Welcome);
		welcome
			.into_iter()
			.chain(self.views.keys().cloned().map(ActiveTab::Service))
			.collect()
	}

	#[must_use]
	pub fn active_index(&self) -> usize {
		self.tab_order()
			.iter()
			.position(|tab| *tab == self.active)
			.unwrap_or(0)
	}

	pub fn next_tab(&mut self) {
		self.step_tab(1);
	}

	pub fn previous_tab(&mut self) {
		self.step_tab(-1);
	}

	fn step_tab(&mut self, delta: isize) {
		let order = self.tab_order();
		if order.is_empty() {
			return;
		}
		let len = order.len() as isize;
		let next = (self.active_index() as isize + delta).rem_euclid(len);
		self.active = order[next as usize].clone();
	}

	/// Close the active view and return it. The welcome tab cannot be closed.
	pub fn close_active(&mut self) -> Option<P> {
		let ActiveTab::Service(key) = self.active.clone() else {
			return None;
		};
		let index = self.active_index();
		let removed = self.views.shift_remove(&key)?;
		info!(%key, "closed view");

		if self.views.is_empty() {
			self.show_welcome();
		} else {
			let order = self.tab_order();
			let next = index.saturating_sub(1).min(order.len() - 1);
			self.active = order[next].clone();
		}
		Some(removed)
	}

	/// The path the footer shows: the live selection on the welcome tab, the
	/// bound snapshot on a service tab.
	#[must_use]
	pub fn footer_path(&self) -> &ServicePath {
		self.active_view()
			.map(BoundView::service_path)
			.unwrap_or(&self.selection)
	}
}
