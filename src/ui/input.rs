use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line query editor backed by `tui-textarea`.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>, placeholder: &str, placeholder_style: Style) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(placeholder);
		textarea.set_placeholder_style(placeholder_style);
		textarea.move_cursor(CursorMove::End);
		let mut input = Self { textarea };
		input.set_focused(false);
		input
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	pub fn set_focused(&mut self, focused: bool) {
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
	}

	/// Feed a key to the editor and report whether the text changed.
	///
	/// Keys that would add lines or move between them are ignored; `Ctrl+U`
	/// clears the query.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('u') {
			return self.clear();
		}
		match key.code {
			KeyCode::Enter
			| KeyCode::Tab
			| KeyCode::BackTab
			| KeyCode::Up
			| KeyCode::Down
			| KeyCode::PageUp
			| KeyCode::PageDown
			| KeyCode::Esc => false,
			_ if key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')) =>
			{
				false
			}
			_ => self.textarea.input(key),
		}
	}

	/// Replace the query; returns whether the text changed.
	pub fn set_text(&mut self, text: &str) -> bool {
		if self.text() == text {
			return false;
		}
		self.textarea.select_all();
		self.textarea.cut();
		self.textarea.insert_str(text);
		true
	}

	pub fn clear(&mut self) -> bool {
		self.set_text("")
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_edits_the_single_line() {
		let mut input = QueryInput::new("", "Search", Style::default());
		assert!(input.input(key(KeyCode::Char('a'))));
		assert!(input.input(key(KeyCode::Char('d'))));
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "ad");

		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "a");
	}

	#[test]
	fn ctrl_u_clears_the_query() {
		let mut input = QueryInput::new("admin", "Search", Style::default());
		assert!(input.input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "");
		assert!(!input.clear());
	}

	#[test]
	fn set_text_replaces_the_query() {
		let mut input = QueryInput::new("", "Search", Style::default());
		assert!(input.set_text("us-east"));
		assert_eq!(input.text(), "us-east");
		assert!(!input.set_text("us-east"));
	}
}
