use thiserror::Error;

/// A page refused the path it was asked to bind to.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
	#[error("{page} page can't open {path}")]
	InvalidPath { page: &'static str, path: String },
}

/// Why the open action did not produce a view.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
	#[error("Select profile, region and service first.")]
	Incomplete,
	#[error("Can't find a page for the selected service.")]
	NoPage { service: String },
	#[error(transparent)]
	Page(#[from] PageError),
}
