use serde_json::Value;

use super::error::CloudError;

/// Status of stacks hidden from the list by default.
pub const DELETED_STATUS: &str = "DELETE_COMPLETE";

/// Colour family of a stack status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
	Complete,
	InProgress,
	Failed,
	Neutral,
}

impl StatusTone {
	#[must_use]
	pub fn from_status(status: &str) -> Self {
		if status.ends_with("_COMPLETE") {
			StatusTone::Complete
		} else if status.ends_with("_IN_PROGRESS") {
			StatusTone::InProgress
		} else if status.ends_with("_FAILED") {
			StatusTone::Failed
		} else {
			StatusTone::Neutral
		}
	}
}

/// One row of the stack list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSummaryRow {
	pub name: String,
	pub status: String,
	pub stack_id: Option<String>,
}

impl StackSummaryRow {
	#[must_use]
	pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			status: status.into(),
			stack_id: None,
		}
	}

	#[must_use]
	pub fn tone(&self) -> StatusTone {
		StatusTone::from_status(&self.status)
	}

	#[must_use]
	pub fn is_deleted(&self) -> bool {
		self.status == DELETED_STATUS
	}

	/// Identifier passed to `DescribeStacks`; deleted stacks are only
	/// reachable by id.
	#[must_use]
	pub fn lookup_key(&self) -> &str {
		self.stack_id.as_deref().unwrap_or(&self.name)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackProperty {
	pub label: &'static str,
	pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackParameter {
	pub key: String,
	pub value: Option<String>,
	pub resolved_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
	pub key: String,
	pub value: Option<String>,
	pub description: Option<String>,
	pub export_name: Option<String>,
}

/// Everything shown by the detail sub-tabs for one stack.
#[derive(Debug, Clone, PartialEq)]
pub struct StackDetails {
	pub properties: Vec<StackProperty>,
	pub parameters: Vec<StackParameter>,
	pub outputs: Vec<StackOutput>,
	pub tags: Vec<(String, String)>,
	pub raw: Value,
}

impl StackDetails {
	pub const PROPERTY_LABELS: [&'static str; 5] = [
		"StackName",
		"CreationTime",
		"LastUpdatedTime",
		"StackStatus",
		"RoleARN",
	];

	#[must_use]
	pub fn property(&self, label: &str) -> Option<&str> {
		self.properties
			.iter()
			.find(|property| property.label == label)
			.and_then(|property| property.value.as_deref())
	}

	#[must_use]
	pub fn name(&self) -> Option<&str> {
		self.property("StackName")
	}

	/// The raw response as indented JSON.
	#[must_use]
	pub fn raw_pretty(&self) -> String {
		serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
	}
}

/// Read-only CloudFormation calls used by the stack page.
///
/// Implementations block the calling thread; pages only call them from their
/// worker.
pub trait StackClient: Send + Sync {
	fn list_stacks(&self) -> Result<Vec<StackSummaryRow>, CloudError>;
	fn describe_stack(&self, stack: &str) -> Result<StackDetails, CloudError>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn tone_follows_the_status_suffix() {
		assert_eq!(StatusTone::from_status("CREATE_COMPLETE"), StatusTone::Complete);
		assert_eq!(
			StatusTone::from_status("UPDATE_ROLLBACK_COMPLETE"),
			StatusTone::Complete
		);
		assert_eq!(
			StatusTone::from_status("UPDATE_COMPLETE_CLEANUP_IN_PROGRESS"),
			StatusTone::InProgress
		);
		assert_eq!(StatusTone::from_status("ROLLBACK_FAILED"), StatusTone::Failed);
		assert_eq!(StatusTone::from_status("REVIEW"), StatusTone::Neutral);
	}

	#[test]
	fn deleted_stacks_are_described_by_id() {
		let mut row = StackSummaryRow::new("network", DELETED_STATUS);
		assert!(row.is_deleted());
		assert_eq!(row.lookup_key(), "network");
		row.stack_id = Some("arn:aws:cloudformation:us-east-1:1:stack/network/abc".into());
		assert_eq!(
			row.lookup_key(),
			"arn:aws:cloudformation:us-east-1:1:stack/network/abc"
		);
	}

	#[test]
	fn properties_are_looked_up_by_label() {
		let details = StackDetails {
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
			parameters: Vec::new(),
			outputs: Vec::new(),
			tags: Vec::new(),
			raw: json!({"StackName": "network"}),
		};
		assert_eq!(details.name(), Some("network"));
		assert_eq!(details.property("RoleARN"), None);
		assert_eq!(details.raw_pretty(), "{\n  \"StackName\": \"network\"\n}");
	}
}
