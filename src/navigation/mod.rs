//! Session state: the live service path and the detail views opened from it.

mod error;
mod navigator;
mod registry;

pub use error::{NavigationError, PageError};
pub use navigator::{ActiveTab, Navigator, OpenOutcome};
pub use registry::{BoundView, PageBuilder, PageRegistry};
