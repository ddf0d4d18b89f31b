//! Tab contents: the welcome page and the per-service detail pages.

pub mod cloudformation;
pub mod welcome;

use std::sync::Arc;

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;
use tokio::runtime::Handle;

use crate::model::{PathField, ServicePath};
use crate::navigation::{BoundView, PageError, PageRegistry};
use crate::systems::cloud::AwsStackClient;
use crate::ui::components::Notifications;
use crate::ui::style::Theme;

pub use cloudformation::{CloudFormationOptions, CloudFormationPage, DetailTab};
pub use welcome::WelcomePage;

/// Shared rendering inputs handed to pages each frame.
pub struct DrawContext<'a> {
	pub theme: &'a Theme,
	pub throbber_state: &'a ThrobberState,
}

/// A detail page bound to one service path.
pub trait ServicePage: BoundView {
	/// Name of the service the page shows.
	fn title(&self) -> &str;

	fn handle_key(&mut self, key: KeyEvent);

	/// Apply background results; failures are reported as notifications.
	fn pump(&mut self, notifications: &mut Notifications);

	fn draw(&mut self, frame: &mut Frame, area: Rect, ctx: &DrawContext<'_>);

	/// True while the page waits on its worker.
	fn is_busy(&self) -> bool {
		false
	}
}

pub type BoxedPage = Box<dyn ServicePage>;

/// Tab label for a page: its title plus the profile and region it is bound to.
#[must_use]
pub fn tab_label(page: &dyn ServicePage) -> String {
	let path = page.service_path();
	format!(
		"{} {}@{}",
		page.title(),
		path.get(PathField::Profile).unwrap_or("-"),
		path.get(PathField::Region).unwrap_or("-")
	)
}

/// Pages shipped with the console, backed by the AWS SDK.
#[must_use]
pub fn default_registry(
	handle: Handle,
	options: CloudFormationOptions,
) -> PageRegistry<BoxedPage> {
	let mut registry = PageRegistry::new();
	registry.register(cloudformation::SERVICE_KEY, move |path: ServicePath| {
		let (Some(profile), Some(region)) = (path.profile(), path.region()) else {
			return Err(PageError::InvalidPath {
				page: "CloudFormation",
				path: path.id(),
			});
		};
		let client = AwsStackClient::new(handle.clone(), profile, region);
		let page = CloudFormationPage::new(path, Arc::new(client), options)?;
		Ok(Box::new(page) as BoxedPage)
	});
	registry
}
