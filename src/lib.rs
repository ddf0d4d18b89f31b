//! cloudterm: a terminal console for browsing AWS resources.
//!
//! Pick a profile, a region and a service from the searchable lists on the
//! welcome tab, then open a detail tab bound to that combination. The
//! CloudFormation page lists and describes stacks on a background worker.

pub mod app_dirs;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod sources;
pub mod systems;
pub mod ui;

pub use model::{Item, PathField, ServicePath};
pub use navigation::{NavigationError, Navigator, OpenOutcome, PageError, PageRegistry};
pub use sources::{ItemSource, ItemSources, SourceError};
pub use ui::{AppConfig, run};
