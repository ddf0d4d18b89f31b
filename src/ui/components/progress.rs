use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::style::Theme;

/// Draw a right-aligned status label on the first row of `area`, preceded by
/// a spinner while `complete` is false.
///
/// The label keeps two columns clear of any text already drawn on the row
/// and is dropped entirely when there is no room left.
pub fn render_progress(
	frame: &mut Frame,
	area: Rect,
	text: &str,
	complete: bool,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if !complete {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(Span::styled(text.to_string(), muted_style));

	let line_width = line.width() as u16;
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	let row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}

	if let Some(last_x) = last_char_x {
		let min_start = last_x.saturating_add(3);
		if min_start > start_x {
			start_x = min_start;
		}
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area
		.right()
		.saturating_sub(start_x)
		.min(line_width)
		.min(area.width);
	if max_width == 0 {
		return;
	}

	buffer.set_line(start_x, row, &line, max_width);
}

#[cfg(test)]
mod tests {
	use super::*;
	use ratatui::{Terminal, backend::TestBackend, widgets::Paragraph};

	#[test]
	fn label_is_right_aligned() {
		let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
		terminal
			.draw(|frame| {
				render_progress(
					frame,
					frame.area(),
					"2/2",
					true,
					&ThrobberState::default(),
					&Theme::default(),
				);
			})
			.unwrap();
		let row: String = (0..20u16)
			.map(|x| terminal.backend().buffer()[(x, 0)].symbol().to_string())
			.collect();
		assert_eq!(row, format!("{}2/2", " ".repeat(17)));
	}

	#[test]
	fn label_is_dropped_when_text_fills_the_row() {
		let mut terminal = Terminal::new(TestBackend::new(8, 1)).unwrap();
		terminal
			.draw(|frame| {
				let area = frame.area();
				frame.render_widget(Paragraph::new("profile"), area);
				render_progress(
					frame,
					area,
					"loading",
					false,
					&ThrobberState::default(),
					&Theme::default(),
				);
			})
			.unwrap();
		let row: String = (0..8u16)
			.map(|x| terminal.backend().buffer()[(x, 0)].symbol().to_string())
			.collect();
		assert_eq!(row, "profile ");
	}
}
