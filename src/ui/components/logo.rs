use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

const LOGO: [&str; 5] = [
	r"    _____  __      __  _________   .___         ___________                    ",
	r"   /  _  \/  \    /  \/   _____/   |   | ____   \__    ___/__________  _____   ",
	r"  /  /_\  \   \/\/   /\_____  \    |   |/    \    |    |_/ __ \_  __ \/     \  ",
	r" /    |    \        / /        \   |   |   |  \   |    |\  ___/|  | \/  Y Y  \ ",
	r"/_____|____/\__/\__/ /_________/   |___|___| _/   |____| \____ |__|  |__|_|__/ ",
];

/// Top to bottom, light to dark.
const GRADIENT: [Color; 5] = [
	Color::Rgb(255, 228, 107),
	Color::Rgb(255, 207, 86),
	Color::Rgb(255, 186, 65),
	Color::Rgb(254, 166, 43),
	Color::Rgb(231, 146, 13),
];

pub const LOGO_HEIGHT: u16 = LOGO.len() as u16;

pub fn render_logo(frame: &mut Frame, area: Rect) {
	let lines: Vec<Line> = LOGO
		.iter()
		.zip(GRADIENT)
		.map(|(text, color)| Line::styled(*text, Style::new().fg(color)))
		.collect();
	frame.render_widget(Paragraph::new(lines).centered(), area);
}
