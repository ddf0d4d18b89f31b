use std::sync::OnceLock;

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_sdk_cloudformation as cfn;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cloudformation::operation::RequestId;
use aws_types::region::Region;
use serde_json::{Map, Value};
use tokio::runtime::{Builder, Handle, Runtime};
use tracing::{debug, info, warn};

use super::error::{CloudError, CloudOperation};
use super::stacks::{
	StackClient, StackDetails, StackOutput, StackParameter, StackProperty, StackSummaryRow,
};

/// Multi-threaded tokio runtime shared by every page's SDK calls.
pub struct CloudRuntime {
	runtime: Runtime,
}

impl CloudRuntime {
	pub fn new() -> Result<Self> {
		let runtime = Builder::new_multi_thread()
			.worker_threads(2)
			.thread_name("cloudterm-sdk")
			.enable_all()
			.build()
			.context("failed to start the AWS SDK runtime")?;
		Ok(Self { runtime })
	}

	#[must_use]
	pub fn handle(&self) -> Handle {
		self.runtime.handle().clone()
	}
}

/// [`StackClient`] backed by `aws-sdk-cloudformation`.
///
/// The SDK configuration for the profile and region is loaded on first use,
/// on the calling worker thread.
pub struct AwsStackClient {
	handle: Handle,
	profile: String,
	region: String,
	client: OnceLock<cfn::Client>,
}

impl AwsStackClient {
	#[must_use]
	pub fn new(handle: Handle, profile: impl Into<String>, region: impl Into<String>) -> Self {
		Self {
			handle,
			profile: profile.into(),
			region: region.into(),
			client: OnceLock::new(),
		}
	}

	fn client(&self) -> &cfn::Client {
		self.client.get_or_init(|| {
			info!(profile = %self.profile, region = %self.region, "loading AWS configuration");
			let config = self.handle.block_on(
				aws_config::defaults(BehaviorVersion::latest())
					.profile_name(&self.profile)
					.region(Region::new(self.region.clone()))
					.load(),
			);
			cfn::Client::new(&config)
		})
	}

	fn failure<E>(&self, operation: CloudOperation, err: &SdkError<E>) -> CloudError
	where
		E: ProvideErrorMetadata + RequestId + std::error::Error + 'static,
	{
		let code = err.as_service_error().and_then(|service_err| service_err.code());
		let error = CloudError::classify(&self.profile, operation, code, format_sdk_error(err));
		warn!(
			profile = %self.profile,
			region = %self.region,
			%operation,
			session = error.is_session(),
			detail = error.detail(),
			"CloudFormation call failed"
		);
		error
	}
}

impl StackClient for AwsStackClient {
	fn list_stacks(&self) -> Result<Vec<StackSummaryRow>, CloudError> {
		let client = self.client();
		self.handle.block_on(async {
			let mut rows = Vec::new();
			let mut pages = client.list_stacks().into_paginator().send();
			while let Some(page) = pages
				.try_next()
				.await
				.map_err(|err| self.failure(CloudOperation::ListStacks, &err))?
			{
				let summaries = page.stack_summaries.unwrap_or_default();
				rows.extend(summaries.iter().map(summary_row));
			}
			debug!(count = rows.len(), "listed stacks");
			Ok::<_, CloudError>(rows)
		})
	}

	fn describe_stack(&self, stack: &str) -> Result<StackDetails, CloudError> {
		let client = self.client();
		let output = self
			.handle
			.block_on(client.describe_stacks().stack_name(stack).send())
			.map_err(|err| self.failure(CloudOperation::DescribeStacks, &err))?;

		let stacks = output.stacks.unwrap_or_default();
		let Some(found) = stacks.first() else {
			return Err(CloudError::Call {
				operation: CloudOperation::DescribeStacks,
				detail: format!("no stack returned for {stack}"),
			});
		};
		Ok(stack_details(found))
	}
}

fn format_sdk_error<E>(err: &SdkError<E>) -> String
where
	E: ProvideErrorMetadata + RequestId + std::error::Error + 'static,
{
	if let Some(service_err) = err.as_service_error() {
		let code = service_err.code().unwrap_or("ServiceError");
		let message = service_err.message().unwrap_or("").trim();
		let mut summary = if message.is_empty() {
			code.to_string()
		} else {
			format!("{code}: {message}")
		};
		if let Some(request_id) = service_err.request_id() {
			summary.push_str(&format!(" (request id: {request_id})"));
		}
		return summary;
	}
	DisplayErrorContext(err).to_string()
}

fn summary_row(summary: &cfn::types::StackSummary) -> StackSummaryRow {
	StackSummaryRow {
		name: summary.stack_name().unwrap_or_default().to_owned(),
		status: summary
			.stack_status()
			.map(|status| status.as_str().to_owned())
			.unwrap_or_default(),
		stack_id: summary.stack_id().map(str::to_owned),
	}
}

fn stack_details(stack: &cfn::types::Stack) -> StackDetails {
	let status = stack.stack_status.as_ref().map(|status| status.as_str().to_owned());
	let values = [
		stack.stack_name.clone(),
		stack.creation_time.map(|time| time.to_string()),
		stack.last_updated_time.map(|time| time.to_string()),
		status,
		stack.role_arn.clone(),
	];
	let properties = StackDetails::PROPERTY_LABELS
		.into_iter()
		.zip(values)
		.map(|(label, value)| StackProperty { label, value })
		.collect();

	let parameters = stack
		.parameters
		.as_deref()
		.unwrap_or_default()
		.iter()
		.map(|param| StackParameter {
			key: param.parameter_key.clone().unwrap_or_default(),
			value: param.parameter_value.clone(),
			resolved_value: param.resolved_value.clone(),
		})
		.collect();

	let outputs = stack
		.outputs
		.as_deref()
		.unwrap_or_default()
		.iter()
		.map(|output| StackOutput {
			key: output.output_key.clone().unwrap_or_default(),
			value: output.output_value.clone(),
			description: output.description.clone(),
			export_name: output.export_name.clone(),
		})
		.collect();

	let tags = stack
		.tags
		.as_deref()
		.unwrap_or_default()
		.iter()
		.map(|tag| {
			(
				tag.key.clone().unwrap_or_default(),
				tag.value.clone().unwrap_or_default(),
			)
		})
		.collect();

	StackDetails {
		properties,
		parameters,
		outputs,
		tags,
		raw: stack_to_json(stack),
	}
}

fn stack_to_json(stack: &cfn::types::Stack) -> Value {
	let mut map = Map::new();
	let mut insert = |key: &str, value: Option<Value>| {
		if let Some(value) = value {
			map.insert(key.to_string(), value);
		}
	};

	insert("StackId", stack.stack_id.clone().map(Value::String));
	insert("StackName", stack.stack_name.clone().map(Value::String));
	insert("Description", stack.description.clone().map(Value::String));
	insert(
		"CreationTime",
		stack.creation_time.map(|time| Value::String(time.to_string())),
	);
	insert(
		"LastUpdatedTime",
		stack.last_updated_time.map(|time| Value::String(time.to_string())),
	);
	insert(
		"StackStatus",
		stack
			.stack_status
			.as_ref()
			.map(|status| Value::String(status.as_str().to_string())),
	);
	insert(
		"StackStatusReason",
		stack.stack_status_reason.clone().map(Value::String),
	);
	insert("RoleARN", stack.role_arn.clone().map(Value::String));
	insert("DisableRollback", stack.disable_rollback.map(Value::Bool));
	insert(
		"TimeoutInMinutes",
		stack.timeout_in_minutes.map(|minutes| Value::Number(minutes.into())),
	);
	insert(
		"Capabilities",
		stack.capabilities.as_ref().map(|capabilities| {
			Value::Array(
				capabilities
					.iter()
					.map(|capability| Value::String(capability.as_str().to_string()))
					.collect(),
			)
		}),
	);
	insert(
		"Parameters",
		stack.parameters.as_ref().map(|parameters| {
			Value::Array(
				parameters
					.iter()
					.map(|param| {
						object([
							("ParameterKey", param.parameter_key.clone()),
							("ParameterValue", param.parameter_value.clone()),
							("ResolvedValue", param.resolved_value.clone()),
						])
					})
					.collect(),
			)
		}),
	);
	insert(
		"Outputs",
		stack.outputs.as_ref().map(|outputs| {
			Value::Array(
				outputs
					.iter()
					.map(|output| {
						object([
							("OutputKey", output.output_key.clone()),
							("OutputValue", output.output_value.clone()),
							("Description", output.description.clone()),
							("ExportName", output.export_name.clone()),
						])
					})
					.collect(),
			)
		}),
	);
	insert(
		"Tags",
		stack.tags.as_ref().map(|tags| {
			Value::Array(
				tags.iter()
					.map(|tag| object([("Key", tag.key.clone()), ("Value", tag.value.clone())]))
					.collect(),
			)
		}),
	);

	Value::Object(map)
}

fn object<const N: usize>(fields: [(&str, Option<String>); N]) -> Value {
	let map = fields
		.into_iter()
		.filter_map(|(key, value)| value.map(|value| (key.to_string(), Value::String(value))))
		.collect();
	Value::Object(map)
}
