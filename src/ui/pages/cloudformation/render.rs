use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, BorderType, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, Tabs,
};

use super::{CloudFormationPage, DetailTab};
use crate::systems::cloud::StackDetails;
use crate::ui::components::render_progress;
use crate::ui::pages::DrawContext;
use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const EMPTY: &str = "-";

fn detail_headers(tab: DetailTab) -> &'static [&'static str] {
	match tab {
		DetailTab::Properties => &["Property", "Value"],
		DetailTab::Parameters => &["Key", "Value", "Resolved value"],
		DetailTab::Outputs => &["Key", "Value", "Description", "Export name"],
		DetailTab::Tags => &["Key", "Value"],
		DetailTab::Response => &["Response"],
	}
}

fn detail_widths(tab: DetailTab) -> Vec<Constraint> {
	match tab {
		DetailTab::Properties | DetailTab::Tags => {
			vec![Constraint::Percentage(35), Constraint::Percentage(65)]
		}
		DetailTab::Parameters => vec![
			Constraint::Percentage(30),
			Constraint::Percentage(35),
			Constraint::Percentage(35),
		],
		DetailTab::Outputs => vec![Constraint::Percentage(25); 4],
		DetailTab::Response => vec![Constraint::Percentage(100)],
	}
}

fn or_empty(value: Option<&str>) -> String {
	value.unwrap_or(EMPTY).to_string()
}

/// Cell text of a detail sub-tab, one inner vector per row. The response tab
/// yields one single-cell row per line of indented JSON.
#[must_use]
pub fn detail_rows(details: &StackDetails, tab: DetailTab) -> Vec<Vec<String>> {
	match tab {
		DetailTab::Properties => details
			.properties
			.iter()
			.map(|property| vec![property.label.to_string(), or_empty(property.value.as_deref())])
			.collect(),
		DetailTab::Parameters => details
			.parameters
			.iter()
			.map(|parameter| {
				vec![
					parameter.key.clone(),
					or_empty(parameter.value.as_deref()),
					or_empty(parameter.resolved_value.as_deref()),
				]
			})
			.collect(),
		DetailTab::Outputs => details
			.outputs
			.iter()
			.map(|output| {
				vec![
					output.key.clone(),
					or_empty(output.value.as_deref()),
					or_empty(output.description.as_deref()),
					or_empty(output.export_name.as_deref()),
				]
			})
			.collect(),
		DetailTab::Tags => details
			.tags
			.iter()
			.map(|(key, value)| vec![key.clone(), value.clone()])
			.collect(),
		DetailTab::Response => details
			.raw_pretty()
			.lines()
			.map(|line| vec![line.to_string()])
			.collect(),
	}
}

fn panel(title: &str, theme: &Theme) -> Block<'static> {
	Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.border_style(false))
		.title(Line::from(format!(" {title} ")))
}

impl CloudFormationPage {
	pub(super) fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &DrawContext<'_>) {
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
			.split(area);

		self.render_stacks(frame, columns[0], ctx);
		self.render_details(frame, columns[1], ctx);
	}

	fn render_stacks(&mut self, frame: &mut Frame, area: Rect, ctx: &DrawContext<'_>) {
		let theme = ctx.theme;
		let block = panel("Stacks", theme);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if inner.height == 0 || inner.width == 0 {
			return;
		}

		if self.runtime.is_listing() {
			render_progress(frame, inner, "loading", false, ctx.throbber_state, theme);
		}

		if self.stacks.is_empty() {
			if !self.runtime.is_listing() {
				frame.render_widget(
					Paragraph::new("No stacks")
						.alignment(Alignment::Center)
						.style(theme.empty_style()),
					inner,
				);
			}
			return;
		}

		let rows: Vec<Row> = self
			.stacks
			.iter()
			.map(|stack| {
				Row::new(vec![
					Cell::from(stack.name.clone()),
					Cell::from(Span::styled(
						stack.status.clone(),
						theme.status_style(stack.tone()),
					)),
				])
			})
			.collect();
		let table = Table::new(rows, [Constraint::Percentage(55), Constraint::Percentage(45)])
			.header(Row::new(vec!["Name", "Status"]).style(theme.header_style()))
			.column_spacing(1)
			.row_highlight_style(theme.row_highlight_style())
			.highlight_symbol(HIGHLIGHT_SYMBOL)
			.highlight_spacing(HighlightSpacing::Always);
		frame.render_stateful_widget(table, inner, &mut self.table);
	}

	fn render_details(&mut self, frame: &mut Frame, area: Rect, ctx: &DrawContext<'_>) {
		let theme = ctx.theme;
		let title = self
			.details
			.as_ref()
			.and_then(StackDetails::name)
			.unwrap_or("Stack");
		let block = panel(title, theme);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if inner.height < 2 || inner.width == 0 {
			return;
		}

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(inner);

		let selected = DetailTab::ALL
			.iter()
			.position(|tab| *tab == self.detail_tab)
			.unwrap_or(0);
		let tabs = Tabs::new(DetailTab::ALL.iter().map(|tab| tab.title()))
			.select(selected)
			.style(theme.tab_inactive_style())
			.highlight_style(theme.tab_highlight_style());
		frame.render_widget(tabs, rows[0]);

		if self.runtime.is_describing() {
			render_progress(frame, rows[0], "describing", false, ctx.throbber_state, theme);
		}

		let Some(details) = &self.details else {
			frame.render_widget(
				Paragraph::new("Press Enter on a stack to describe it")
					.alignment(Alignment::Center)
					.style(theme.empty_style()),
				rows[1],
			);
			return;
		};

		let body: Vec<Row> = detail_rows(details, self.detail_tab)
			.into_iter()
			.skip(self.detail_scroll as usize)
			.map(Row::new)
			.collect();
		let header = Row::new(detail_headers(self.detail_tab).iter().copied())
			.style(theme.header_style());
		let table = Table::new(body, detail_widths(self.detail_tab))
			.header(header)
			.column_spacing(1);
		frame.render_widget(table, rows[1]);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	use crate::systems::cloud::{StackOutput, StackParameter, StackProperty};

	fn details() -> StackDetails {
		StackDetails {
			properties: vec![
				StackProperty {
					label: "StackName",
					value: Some("network".into()),
				},
				StackProperty {
					label: "RoleARN",
					value: None,
				},
			],
			parameters: vec![StackParameter {
				key: "VpcCidr".into(),
				value: Some("10.0.0.0/16".into()),
				resolved_value: None,
			}],
			outputs: vec![StackOutput {
				key: "VpcId".into(),
				value: Some("vpc-123".into()),
				description: None,
				export_name: Some("network-vpc".into()),
			}],
			tags: Vec::new(),
			raw: json!({ "StackName": "network" }),
		}
	}

	#[test]
	fn missing_values_render_as_dashes() {
		let details = details();
		assert_eq!(
			detail_rows(&details, DetailTab::Properties),
			vec![
				vec!["StackName".to_string(), "network".to_string()],
				vec!["RoleARN".to_string(), "-".to_string()],
			]
		);
		assert_eq!(
			detail_rows(&details, DetailTab::Parameters),
			vec![vec![
				"VpcCidr".to_string(),
				"10.0.0.0/16".to_string(),
				"-".to_string()
			]]
		);
		assert_eq!(
			detail_rows(&details, DetailTab::Outputs)[0],
			vec!["VpcId", "vpc-123", "-", "network-vpc"]
		);
		assert!(detail_rows(&details, DetailTab::Tags).is_empty());
	}

	#[test]
	fn response_tab_lists_json_lines() {
		let rows = detail_rows(&details(), DetailTab::Response);
		let lines: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
		assert_eq!(lines, vec!["{", "  \"StackName\": \"network\"", "}"]);
	}

	#[test]
	fn every_tab_has_matching_headers_and_widths() {
		for tab in DetailTab::ALL {
			assert_eq!(detail_headers(tab).len(), detail_widths(tab).len());
		}
	}
}
