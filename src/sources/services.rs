use super::{ItemSource, SourceError};
use crate::model::Item;

/// A service offered on the welcome tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
	pub key: &'static str,
	pub name: &'static str,
}

pub const SERVICES: &[ServiceInfo] = &[
	ServiceInfo {
		key: "cloudformation",
		name: "CloudFormation",
	},
	ServiceInfo { key: "s3", name: "S3" },
	ServiceInfo {
		key: "ecs",
		name: "Elastic Container Service",
	},
	ServiceInfo {
		key: "logs",
		name: "CloudWatch Logs",
	},
	ServiceInfo {
		key: "lambda",
		name: "Lambda",
	},
	ServiceInfo {
		key: "servicediscovery",
		name: "Cloud Map",
	},
	ServiceInfo {
		key: "dynamodb",
		name: "DynamoDB",
	},
	ServiceInfo {
		key: "sqs",
		name: "Simple Queue Service",
	},
];

/// Human readable name for a service key.
#[must_use]
pub fn display_name(key: &str) -> Option<&'static str> {
	SERVICES
		.iter()
		.find(|service| service.key == key)
		.map(|service| service.name)
}

/// Service items titled with the display name and keyed by service key.
#[must_use]
pub fn service_items() -> Vec<Item> {
	SERVICES
		.iter()
		.map(|service| {
			Item::new(service.name, service.key)
				.with_user_data([("key", service.key), ("name", service.name)])
		})
		.collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceSource;

impl ItemSource for ServiceSource {
	fn fetch(&self) -> Result<Vec<Item>, SourceError> {
		Ok(service_items())
	}
}
