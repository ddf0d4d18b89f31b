use std::time::{Duration, Instant};

use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info};

use super::components::Notifications;
use super::pages::{BoxedPage, WelcomePage};
use super::style::Theme;
use crate::model::ServicePath;
use crate::navigation::{NavigationError, Navigator, PageRegistry};
use crate::sources::ItemSources;

/// Everything the shell needs to start.
pub struct AppConfig {
	pub sources: ItemSources,
	pub registry: PageRegistry<BoxedPage>,
	/// Selection to start from; a completed path opens its page straight away.
	pub initial_path: ServicePath,
	pub theme: Theme,
	pub notification_timeout: Duration,
}

pub struct App {
	pub(crate) navigator: Navigator<BoxedPage>,
	pub(crate) welcome: WelcomePage,
	pub(crate) notifications: Notifications,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) should_quit: bool,
}

impl App {
	#[must_use]
	pub fn new(config: AppConfig) -> Self {
		let AppConfig {
			sources,
			registry,
			initial_path,
			theme,
			notification_timeout,
		} = config;

		let mut app = Self {
			navigator: Navigator::new(registry),
			welcome: WelcomePage::new(&sources, &theme),
			notifications: Notifications::new(notification_timeout),
			theme,
			throbber_state: ThrobberState::default(),
			should_quit: false,
		};
		app.start(initial_path);
		app
	}

	/// Open a completed initial path in standalone mode, otherwise (or when
	/// that fails) show the welcome tab with the known parts filled in.
	fn start(&mut self, initial: ServicePath) {
		if initial.completed() {
			match self.navigator.open(&initial) {
				Ok(outcome) => {
					info!(key = outcome.key(), "starting in standalone mode");
					self.navigator.hide_welcome();
					return;
				}
				Err(err) => self.notify_navigation_error(&err),
			}
		}

		if !initial.is_empty() {
			debug!(path = %initial, "prefilling selection");
			self.welcome.preselect(&initial);
			self.navigator.set_selection(initial);
		}
		self.welcome.mount();
	}

	pub(crate) fn notify_navigation_error(&mut self, err: &NavigationError) {
		match err {
			NavigationError::Page(_) => self.notifications.error(err.to_string()),
			_ => self.notifications.warning(err.to_string()),
		}
	}

	/// Apply background results from the welcome lists and every open page.
	pub(crate) fn pump(&mut self) {
		if self.navigator.welcome_visible() {
			self.welcome.mount();
		}
		for event in self.welcome.pump() {
			self.apply_list_event(event);
		}
		for page in self.navigator.views_mut() {
			page.pump(&mut self.notifications);
		}
		self.notifications.prune(Instant::now());
	}

	#[must_use]
	pub fn navigator(&self) -> &Navigator<BoxedPage> {
		&self.navigator
	}

	#[must_use]
	pub fn notifications(&self) -> &Notifications {
		&self.notifications
	}

	#[must_use]
	pub fn should_quit(&self) -> bool {
		self.should_quit
	}
}
