use ratatui::style::{Color, Modifier, Style};

use crate::systems::cloud::StatusTone;

/// Colours used by every widget of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub selected: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	pub border: Style,
	pub border_focused: Style,
	pub status_complete: Style,
	pub status_in_progress: Style,
	pub status_failed: Style,
	pub notice_info: Style,
	pub notice_warning: Style,
	pub notice_error: Style,
}

impl Default for Theme {
	fn default() -> Self {
		DEFAULT
	}
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn selected_style(&self) -> Style {
		self.selected
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused {
			self.border_focused
		} else {
			self.border
		}
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn row_highlight_bg(&self) -> Color {
		self.row_highlight.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header_fg())
			.bg(self.row_highlight_bg())
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new().bg(self.header_bg())
	}

	#[must_use]
	pub fn status_style(&self, tone: StatusTone) -> Style {
		match tone {
			StatusTone::Complete => self.status_complete,
			StatusTone::InProgress => self.status_in_progress,
			StatusTone::Failed => self.status_failed,
			StatusTone::Neutral => Style::new(),
		}
	}
}

/// A built-in theme and the extra names it answers to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

const DEFAULT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(17, 24, 39))
		.bg(Color::Rgb(254, 166, 43)),
	row_highlight: Style::new()
		.bg(Color::Rgb(55, 65, 81))
		.fg(Color::Rgb(249, 250, 251)),
	selected: Style::new()
		.fg(Color::Rgb(254, 166, 43))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(255, 207, 86)),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Rgb(255, 228, 107))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(75, 85, 99)),
	border_focused: Style::new().fg(Color::Rgb(254, 166, 43)),
	status_complete: Style::new().fg(Color::Green),
	status_in_progress: Style::new().fg(Color::Yellow),
	status_failed: Style::new().fg(Color::Red),
	notice_info: Style::new().fg(Color::Rgb(147, 197, 253)),
	notice_warning: Style::new().fg(Color::Rgb(253, 224, 71)),
	notice_error: Style::new()
		.fg(Color::Rgb(248, 113, 113))
		.add_modifier(Modifier::BOLD),
};

const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	selected: Style::new()
		.fg(Color::LightCyan)
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(51, 65, 85)),
	border_focused: Style::new().fg(Color::LightCyan),
	status_complete: Style::new().fg(Color::LightGreen),
	status_in_progress: Style::new().fg(Color::Yellow),
	status_failed: Style::new().fg(Color::LightRed),
	notice_info: Style::new().fg(Color::LightCyan),
	notice_warning: Style::new().fg(Color::Yellow),
	notice_error: Style::new()
		.fg(Color::LightRed)
		.add_modifier(Modifier::BOLD),
};

const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(37, 99, 235)),
	row_highlight: Style::new()
		.bg(Color::Rgb(219, 234, 254))
		.fg(Color::Rgb(30, 64, 175)),
	selected: Style::new()
		.fg(Color::Rgb(37, 99, 235))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(30, 64, 175)),
	empty: Style::new().fg(Color::Gray),
	highlight: Style::new()
		.fg(Color::Rgb(194, 65, 12))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Gray),
	border_focused: Style::new().fg(Color::Rgb(37, 99, 235)),
	status_complete: Style::new().fg(Color::Rgb(21, 128, 61)),
	status_in_progress: Style::new().fg(Color::Rgb(161, 98, 7)),
	status_failed: Style::new().fg(Color::Rgb(185, 28, 28)),
	notice_info: Style::new().fg(Color::Rgb(30, 64, 175)),
	notice_warning: Style::new().fg(Color::Rgb(161, 98, 7)),
	notice_error: Style::new()
		.fg(Color::Rgb(185, 28, 28))
		.add_modifier(Modifier::BOLD),
};

/// Themes bundled with the console.
pub const THEMES: &[ThemeDefinition] = &[
	ThemeDefinition::new("default", DEFAULT).with_aliases(&["aws", "dark"]),
	ThemeDefinition::new("slate", SLATE).with_aliases(&["tailwind-slate"]),
	ThemeDefinition::new("light", LIGHT).with_aliases(&["day"]),
];

#[must_use]
pub fn default_theme() -> Theme {
	DEFAULT
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	THEMES
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = THEMES.iter().map(|definition| definition.name).collect();
	names.sort_unstable();
	names
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn themes_resolve_by_name_and_alias() {
		assert_eq!(by_name("slate"), Some(SLATE));
		assert_eq!(by_name(" Tailwind-Slate "), Some(SLATE));
		assert_eq!(by_name("DAY"), Some(LIGHT));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn names_are_sorted() {
		assert_eq!(names(), vec!["default", "light", "slate"]);
	}

	#[test]
	fn status_tones_map_to_styles() {
		let theme = default_theme();
		assert_eq!(theme.status_style(StatusTone::Failed), theme.status_failed);
		assert_eq!(theme.status_style(StatusTone::Neutral), Style::new());
	}
}
