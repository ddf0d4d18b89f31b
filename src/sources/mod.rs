//! Item sources feeding the welcome lists.
//!
//! A source is invoked once per list, on the list's worker thread, and its
//! result is cached for the lifetime of the list.

mod profiles;
mod regions;
mod services;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::model::Item;

pub use profiles::{ProfileFileKind, ProfileFiles, ProfileSource, parse_profile_names};
pub use regions::{REGIONS, RegionSource, region_items};
pub use services::{SERVICES, ServiceInfo, ServiceSource, display_name, service_items};

/// Failure raised while producing the items of a list.
#[derive(Debug, Error)]
pub enum SourceError {
	#[error("unable to locate the home directory")]
	NoHome,
	#[error("failed to read {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("{0}")]
	Other(String),
}

/// Produces the ordered items of a list.
pub trait ItemSource: Send + Sync {
	fn fetch(&self) -> Result<Vec<Item>, SourceError>;
}

impl<F> ItemSource for F
where
	F: Fn() -> Result<Vec<Item>, SourceError> + Send + Sync,
{
	fn fetch(&self) -> Result<Vec<Item>, SourceError> {
		self()
	}
}

/// The three sources backing the welcome lists.
#[derive(Clone)]
pub struct ItemSources {
	pub profiles: Arc<dyn ItemSource>,
	pub regions: Arc<dyn ItemSource>,
	pub services: Arc<dyn ItemSource>,
}

impl ItemSources {
	/// Sources reading the local AWS configuration and the built-in tables.
	#[must_use]
	pub fn aws() -> Self {
		Self {
			profiles: Arc::new(ProfileSource::from_env()),
			regions: Arc::new(RegionSource),
			services: Arc::new(ServiceSource),
		}
	}
}
