use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Tabs};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

pub const APP_TITLE: &str = "Cloud Management In Terminal";

/// Render the application title on the left and the open tabs on the right.
pub fn render_tab_bar(
	frame: &mut Frame,
	area: Rect,
	labels: &[String],
	selected: usize,
	theme: &Theme,
) {
	let title = format!(" {APP_TITLE} ");
	let title_width = (title.width() as u16).min(area.width / 3);
	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Length(title_width), Constraint::Min(1)])
		.split(area);

	frame.render_widget(Paragraph::new(title).style(theme.prompt_style()), columns[0]);

	let tabs_area = Rect {
		x: columns[1].x.saturating_add(1),
		width: columns[1].width.saturating_sub(1),
		..columns[1]
	};
	let tabs = Tabs::new(build_tab_titles(theme, selected, labels))
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(tabs, tabs_area);
}

fn build_tab_titles(theme: &Theme, selected: usize, labels: &[String]) -> Vec<Line<'static>> {
	let active = theme.header_style();
	let inactive = theme.tab_inactive_style();
	labels
		.iter()
		.enumerate()
		.map(|(index, label)| {
			let style = if index == selected { active } else { inactive };
			Line::from(format!(" {label} ")).style(style)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tab_titles_mark_the_selected_tab() {
		let theme = Theme::default();
		let labels = vec!["Welcome".to_string(), "CloudFormation dev@us-east-1".to_string()];
		let titles = build_tab_titles(&theme, 1, &labels);

		assert_eq!(titles.len(), 2);
		assert_eq!(titles[0].spans[0].content.as_ref().trim(), "Welcome");
		assert_eq!(titles[0].style, theme.tab_inactive_style());
		assert_eq!(titles[1].style, theme.header_style());
	}
}
