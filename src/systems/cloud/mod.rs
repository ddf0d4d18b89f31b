//! Cloud access for detail pages.
//!
//! Pages talk to a [`StackClient`]; the AWS implementation blocks on a shared
//! tokio runtime from the page's worker thread so the UI thread never waits
//! on the network.

mod aws;
mod error;
mod stacks;

pub use aws::{AwsStackClient, CloudRuntime};
pub use error::{CloudError, CloudOperation};
pub use stacks::{
	StackClient, StackDetails, StackOutput, StackParameter, StackProperty, StackSummaryRow,
	StatusTone, DELETED_STATUS,
};
