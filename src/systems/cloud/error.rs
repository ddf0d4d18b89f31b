use std::fmt;

use thiserror::Error;

/// Service error codes that mean the profile's session cannot be used.
const SESSION_ERROR_CODES: &[&str] = &[
	"ExpiredToken",
	"ExpiredTokenException",
	"InvalidClientTokenId",
	"UnrecognizedClientException",
	"InvalidGrantException",
	"UnauthorizedException",
];

/// Fragments of a transport or credential-provider failure that point at the
/// session rather than the call.
const SESSION_ERROR_HINTS: &[&str] = &["sso", "token", "credential"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudOperation {
	ListStacks,
	DescribeStacks,
}

impl CloudOperation {
	#[must_use]
	pub fn notice(self) -> &'static str {
		match self {
			CloudOperation::ListStacks => "Can't get list of stacks.",
			CloudOperation::DescribeStacks => "Can't get stack information.",
		}
	}
}

impl fmt::Display for CloudOperation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			CloudOperation::ListStacks => "ListStacks",
			CloudOperation::DescribeStacks => "DescribeStacks",
		})
	}
}

/// Failure of a cloud call, phrased for the notification area.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CloudError {
	#[error("Unauthorized {profile} profile session: {detail}")]
	Session { profile: String, detail: String },
	#[error("{}", .operation.notice())]
	Call {
		operation: CloudOperation,
		detail: String,
	},
}

impl CloudError {
	/// Sort a failure into a session problem or a failed call.
	#[must_use]
	pub fn classify(
		profile: &str,
		operation: CloudOperation,
		code: Option<&str>,
		detail: impl Into<String>,
	) -> Self {
		let detail = detail.into();
		let session = match code {
			Some(code) => SESSION_ERROR_CODES.contains(&code),
			None => {
				let lowered = detail.to_lowercase();
				SESSION_ERROR_HINTS.iter().any(|hint| lowered.contains(hint))
			}
		};

		if session {
			CloudError::Session {
				profile: profile.to_owned(),
				detail,
			}
		} else {
			CloudError::Call { operation, detail }
		}
	}

	#[must_use]
	pub fn is_session(&self) -> bool {
		matches!(self, CloudError::Session { .. })
	}

	#[must_use]
	pub fn detail(&self) -> &str {
		match self {
			CloudError::Session { detail, .. } | CloudError::Call { detail, .. } => detail,
		}
	}
}
