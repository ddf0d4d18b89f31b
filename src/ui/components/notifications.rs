use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use tracing::{info, warn};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

const MAX_VISIBLE: usize = 4;
const MAX_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Information,
	Warning,
	Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub message: String,
	pub severity: Severity,
	posted_at: Instant,
}

/// Toasts stacked in the top-right corner until they expire.
#[derive(Debug, Clone)]
pub struct Notifications {
	entries: VecDeque<Notification>,
	timeout: Duration,
}

impl Default for Notifications {
	fn default() -> Self {
		Self::new(Duration::from_secs(5))
	}
}

impl Notifications {
	#[must_use]
	pub fn new(timeout: Duration) -> Self {
		Self {
			entries: VecDeque::new(),
			timeout,
		}
	}

	pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
		let message = message.into();
		match severity {
			Severity::Information => info!(%message, "notification"),
			Severity::Warning | Severity::Error => warn!(%message, ?severity, "notification"),
		}
		self.entries.push_back(Notification {
			message,
			severity,
			posted_at: Instant::now(),
		});
		while self.entries.len() > MAX_VISIBLE {
			self.entries.pop_front();
		}
	}

	pub fn info(&mut self, message: impl Into<String>) {
		self.push(message, Severity::Information);
	}

	pub fn warning(&mut self, message: impl Into<String>) {
		self.push(message, Severity::Warning);
	}

	pub fn error(&mut self, message: impl Into<String>) {
		self.push(message, Severity::Error);
	}

	/// Drop notifications older than the timeout.
	pub fn prune(&mut self, now: Instant) {
		let timeout = self.timeout;
		self.entries
			.retain(|entry| now.saturating_duration_since(entry.posted_at) < timeout);
	}

	pub fn iter(&self) -> impl Iterator<Item = &Notification> {
		self.entries.iter()
	}

	#[must_use]
	pub fn latest(&self) -> Option<&Notification> {
		self.entries.back()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let mut y = area.top();
		for entry in self.entries.iter().rev() {
			let style = match entry.severity {
				Severity::Information => theme.notice_info,
				Severity::Warning => theme.notice_warning,
				Severity::Error => theme.notice_error,
			};
			let text_width = entry.message.width() as u16;
			let width = text_width
				.saturating_add(4)
				.min(MAX_WIDTH)
				.min(area.width);
			let inner_width = width.saturating_sub(4).max(1);
			let lines = text_width.div_ceil(inner_width).max(1);
			let height = lines.saturating_add(2);
			if width < 5 || y.saturating_add(height) > area.bottom() {
				break;
			}

			let toast = Rect {
				x: area.right().saturating_sub(width),
				y,
				width,
				height,
			};
			let block = Block::default()
				.borders(Borders::ALL)
				.border_type(BorderType::Rounded)
				.border_style(style);
			let body = Paragraph::new(Line::from(entry.message.as_str()))
				.style(style)
				.wrap(Wrap { trim: true })
				.block(block.padding(Padding::horizontal(1)));
			frame.render_widget(Clear, toast);
			frame.render_widget(body, toast);
			y = y.saturating_add(height);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ratatui::{Terminal, backend::TestBackend};

	#[test]
	fn expired_notifications_are_pruned() {
		let mut notifications = Notifications::new(Duration::from_secs(5));
		notifications.error("Can't get list of stacks.");
		assert_eq!(notifications.len(), 1);

		notifications.prune(Instant::now());
		assert_eq!(notifications.len(), 1);

		notifications.prune(Instant::now() + Duration::from_secs(6));
		assert!(notifications.is_empty());
	}

	#[test]
	fn only_the_most_recent_notifications_are_kept() {
		let mut notifications = Notifications::default();
		for index in 0..6 {
			notifications.info(format!("message {index}"));
		}
		assert_eq!(notifications.len(), MAX_VISIBLE);
		assert_eq!(notifications.latest().unwrap().message, "message 5");
		assert_eq!(notifications.iter().next().unwrap().message, "message 2");
	}

	#[test]
	fn toasts_render_in_the_corner() {
		let mut notifications = Notifications::default();
		notifications.warning("Select profile, region and service first.");

		let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
		terminal
			.draw(|frame| notifications.draw(frame, frame.area(), &Theme::default()))
			.unwrap();
		let view = terminal.backend().to_string();
		assert!(view.contains("Select profile, region and service first."));
	}
}
