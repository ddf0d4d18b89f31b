use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::model::ServicePath;
use crate::ui::style::Theme;

pub const VERSION_LABEL: &str = concat!("cloudterm ", env!("CARGO_PKG_VERSION"));

const KEY_HINTS: &str = "^G open  ^←/^→ tabs  ^W close  ^Q quit";

/// Bottom bar: the session path on the left, key hints and version on the right.
pub fn render_footer(frame: &mut Frame, area: Rect, path: &ServicePath, theme: &Theme) {
	if area.height == 0 {
		return;
	}

	let right = format!("{KEY_HINTS}  {VERSION_LABEL} ");
	let right_width = (right.width() as u16).min(area.width / 2);
	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Min(1), Constraint::Length(right_width)])
		.split(area);

	let session = Line::from(vec![
		Span::styled(" ", theme.header_style()),
		Span::styled(path.to_string(), theme.header_style()),
		Span::styled(" ", theme.header_style()),
	]);
	frame.render_widget(Paragraph::new(session).style(theme.empty_style()), columns[0]);
	frame.render_widget(
		Paragraph::new(Line::from(right).right_aligned()).style(theme.empty_style()),
		columns[1],
	);
}
