//! CloudFormation stack browser.
//!
//! Lists the stacks of the bound profile and region, and describes the one
//! the user picks. Calls run on the page's own worker; each request kind keeps
//! its own id so a slow answer never overwrites a newer one.

mod render;
mod worker;

use std::sync::Arc;

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use tracing::{debug, trace};

use self::worker::{StackResult, StackRuntime};
use super::{DrawContext, ServicePage};
use crate::model::ServicePath;
use crate::navigation::{BoundView, PageError};
use crate::systems::cloud::{StackClient, StackDetails, StackSummaryRow};
use crate::ui::components::Notifications;

pub use render::detail_rows;

pub const SERVICE_KEY: &str = "cloudformation";
const TITLE: &str = "CloudFormation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudFormationOptions {
	/// Hide stacks in `DELETE_COMPLETE`.
	pub hide_deleted: bool,
}

impl Default for CloudFormationOptions {
	fn default() -> Self {
		Self { hide_deleted: true }
	}
}

/// Sub-tabs of the stack detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
	Properties,
	Parameters,
	Outputs,
	Tags,
	Response,
}

impl DetailTab {
	pub const ALL: [DetailTab; 5] = [
		DetailTab::Properties,
		DetailTab::Parameters,
		DetailTab::Outputs,
		DetailTab::Tags,
		DetailTab::Response,
	];

	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			DetailTab::Properties => "Properties",
			DetailTab::Parameters => "Parameters",
			DetailTab::Outputs => "Outputs",
			DetailTab::Tags => "Tags",
			DetailTab::Response => "Response",
		}
	}

	fn index(self) -> usize {
		Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
	}

	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.index() + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
	}
}

pub struct CloudFormationPage {
	path: ServicePath,
	options: CloudFormationOptions,
	runtime: StackRuntime,
	stacks: Vec<StackSummaryRow>,
	table: TableState,
	details: Option<StackDetails>,
	detail_tab: DetailTab,
	detail_scroll: u16,
	started: bool,
}

impl CloudFormationPage {
	/// Bind a page to `path`, which must be a completed CloudFormation path.
	pub fn new(
		path: ServicePath,
		client: Arc<dyn StackClient>,
		options: CloudFormationOptions,
	) -> Result<Self, PageError> {
		if !path.completed() || path.service() != Some(SERVICE_KEY) {
			return Err(PageError::InvalidPath {
				page: TITLE,
				path: path.id(),
			});
		}

		Ok(Self {
			path,
			options,
			runtime: StackRuntime::new(client),
			stacks: Vec::new(),
			table: TableState::default(),
			details: None,
			detail_tab: DetailTab::Properties,
			detail_scroll: 0,
			started: false,
		})
	}

	/// Re-list the stacks.
	pub fn refresh(&mut self) {
		self.started = true;
		let id = self.runtime.request_list();
		debug!(id, path = %self.path.id(), "requested stack list");
	}

	/// Describe the highlighted stack.
	pub fn describe_highlighted(&mut self) {
		let Some(stack) = self.highlighted() else {
			return;
		};
		let key = stack.lookup_key().to_owned();
		let id = self.runtime.request_describe(key);
		debug!(id, "requested stack description");
	}

	#[must_use]
	pub fn stacks(&self) -> &[StackSummaryRow] {
		&self.stacks
	}

	#[must_use]
	pub fn highlighted(&self) -> Option<&StackSummaryRow> {
		self.stacks.get(self.table.selected()?)
	}

	#[must_use]
	pub fn details(&self) -> Option<&StackDetails> {
		self.details.as_ref()
	}

	#[must_use]
	pub fn detail_tab(&self) -> DetailTab {
		self.detail_tab
	}

	fn apply(&mut self, result: StackResult, notifications: &mut Notifications) {
		match result {
			StackResult::Listed { id, result } => {
				if !self.runtime.accept_list(id) {
					trace!(id, "ignoring stale stack list");
					return;
				}
				match result {
					Ok(rows) => self.set_stacks(rows),
					Err(err) => notifications.error(err.to_string()),
				}
			}
			StackResult::Described { id, result } => {
				if !self.runtime.accept_describe(id) {
					trace!(id, "ignoring stale stack description");
					return;
				}
				match result {
					Ok(details) => {
						self.details = Some(details);
						self.detail_scroll = 0;
					}
					Err(err) => notifications.error(err.to_string()),
				}
			}
		}
	}

	fn set_stacks(&mut self, rows: Vec<StackSummaryRow>) {
		let previous = self.highlighted().map(|row| row.name.clone());
		self.stacks = rows
			.into_iter()
			.filter(|row| !(self.options.hide_deleted && row.is_deleted()))
			.collect();
		debug!(count = self.stacks.len(), "stack list updated");

		let row = previous
			.and_then(|name| self.stacks.iter().position(|stack| stack.name == name))
			.or((!self.stacks.is_empty()).then_some(0));
		self.table.select(row);
	}

	fn move_cursor(&mut self, delta: isize) {
		let len = self.stacks.len();
		if len == 0 {
			return;
		}
		let current = self.table.selected().unwrap_or(0) as isize;
		let next = (current + delta).clamp(0, len as isize - 1);
		self.table.select(Some(next as usize));
	}
}

impl BoundView for CloudFormationPage {
	fn service_path(&self) -> &ServicePath {
		&self.path
	}
}

impl ServicePage for CloudFormationPage {
	fn title(&self) -> &str {
		TITLE
	}

	fn handle_key(&mut self, key: KeyEvent) {
		if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
			return;
		}
		match key.code {
			KeyCode::Up => self.move_cursor(-1),
			KeyCode::Down => self.move_cursor(1),
			KeyCode::Home => self.table.select((!self.stacks.is_empty()).then_some(0)),
			KeyCode::End => self.table.select(self.stacks.len().checked_sub(1)),
			KeyCode::Enter => self.describe_highlighted(),
			KeyCode::Char('r') => self.refresh(),
			KeyCode::Left => self.detail_tab = self.detail_tab.previous(),
			KeyCode::Right | KeyCode::Tab => self.detail_tab = self.detail_tab.next(),
			KeyCode::BackTab => self.detail_tab = self.detail_tab.previous(),
			KeyCode::PageDown => self.detail_scroll = self.detail_scroll.saturating_add(10),
			KeyCode::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(10),
			_ => {}
		}
	}

	fn pump(&mut self, notifications: &mut Notifications) {
		if !self.started {
			self.refresh();
		}
		while let Ok(result) = self.runtime.try_recv() {
			self.apply(result, notifications);
		}
	}

	fn draw(&mut self, frame: &mut Frame, area: Rect, ctx: &DrawContext<'_>) {
		self.render(frame, area, ctx);
	}

	fn is_busy(&self) -> bool {
		self.runtime.is_listing() || self.runtime.is_describing()
	}
}
