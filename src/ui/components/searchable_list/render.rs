use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use throbber_widgets_tui::ThrobberState;

use super::{LoadState, SearchableList};
use crate::ui::components::progress::render_progress;
use crate::ui::style::Theme;

const SELECTED_MARKER: &str = "● ";
const UNSELECTED_MARKER: &str = "  ";

impl SearchableList<'_> {
	/// Draw the list inside a rounded box: query row, separator, rows, counter.
	pub fn draw(
		&mut self,
		frame: &mut Frame,
		area: Rect,
		focused: bool,
		theme: &Theme,
		throbber_state: &ThrobberState,
	) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(theme.border_style(focused))
			.title(Line::from(format!(" {} ", self.title)).centered());
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if inner.height < 3 || inner.width == 0 {
			return;
		}

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(inner);

		self.input.render(frame, rows[0]);
		if self.state == LoadState::Loading {
			render_progress(frame, rows[0], "loading", false, throbber_state, theme);
		}

		let separator = "─".repeat(rows[1].width as usize);
		frame.render_widget(
			Paragraph::new(separator).style(theme.border_style(focused)),
			rows[1],
		);

		self.draw_rows(frame, rows[2], theme);

		frame.render_widget(
			Paragraph::new(self.footer())
				.alignment(Alignment::Right)
				.style(theme.empty_style()),
			rows[3],
		);
	}

	fn draw_rows(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let placeholder = match self.state {
			LoadState::Failed => Some("unavailable"),
			LoadState::Ready if self.visible.is_empty() => Some("No results"),
			_ => None,
		};
		if let Some(text) = placeholder {
			frame.render_widget(
				Paragraph::new(text)
					.alignment(Alignment::Center)
					.style(theme.empty_style()),
				area,
			);
			return;
		}

		let selected_id = self.selected_id.as_deref();
		let rows: Vec<ListItem> = self
			.visible
			.iter()
			.filter_map(|index| self.items.get(*index))
			.map(|item| {
				if selected_id == Some(item.id.as_str()) {
					ListItem::new(Line::from(vec![
						Span::raw(SELECTED_MARKER),
						Span::raw(item.title.as_str()),
					]))
					.style(theme.selected_style())
				} else {
					ListItem::new(Line::from(vec![
						Span::raw(UNSELECTED_MARKER),
						Span::raw(item.title.as_str()),
					]))
				}
			})
			.collect();

		let list = List::new(rows).highlight_style(theme.row_highlight_style());
		frame.render_stateful_widget(list, area, &mut self.cursor);
	}
}
