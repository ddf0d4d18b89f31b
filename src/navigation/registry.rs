use std::collections::HashMap;
use std::fmt;

use super::error::PageError;
use crate::model::ServicePath;

/// A view bound to the path snapshot it was opened with.
pub trait BoundView {
	fn service_path(&self) -> &ServicePath;
}

impl<T: BoundView + ?Sized> BoundView for Box<T> {
	fn service_path(&self) -> &ServicePath {
		(**self).service_path()
	}
}

/// Builds a view for a completed path snapshot.
pub type PageBuilder<P> = Box<dyn Fn(ServicePath) -> Result<P, PageError>>;

/// Maps service keys to the builders of their detail pages.
pub struct PageRegistry<P> {
	builders: HashMap<String, PageBuilder<P>>,
}

impl<P> Default for PageRegistry<P> {
	fn default() -> Self {
		Self {
			builders: HashMap::new(),
		}
	}
}

impl<P> fmt::Debug for PageRegistry<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut services: Vec<&str> = self.services().collect();
		services.sort_unstable();
		f.debug_struct("PageRegistry")
			.field("services", &services)
			.finish()
	}
}

impl<P> PageRegistry<P> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register the builder for a service key, replacing any previous one.
	pub fn register<F>(&mut self, service: impl Into<String>, builder: F) -> &mut Self
	where
		F: Fn(ServicePath) -> Result<P, PageError> + 'static,
	{
		self.builders.insert(service.into(), Box::new(builder));
		self
	}

	pub fn services(&self) -> impl Iterator<Item = &str> {
		self.builders.keys().map(String::as_str)
	}

	/// Build the page for `path`, or `None` when its service has no page.
	pub fn build(&self, path: ServicePath) -> Option<Result<P, PageError>> {
		let builder = self.builders.get(path.service()?)?;
		Some(builder(path))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn build_skips_services_without_a_builder() {
		let mut registry: PageRegistry<String> = PageRegistry::new();
		registry
			.register("sqs", |path: ServicePath| Ok(path.id()))
			.register("sns", |path: ServicePath| Ok(path.id()));

		let built = registry.build(ServicePath::new("dev", "eu-west-1", "sqs"));
		assert_eq!(built, Some(Ok("sqs_eu-west-1_dev".to_string())));
		assert!(registry.build(ServicePath::new("dev", "eu-west-1", "s3")).is_none());
		assert_eq!(
			format!("{registry:?}"),
			r#"PageRegistry { services: ["sns", "sqs"] }"#
		);
	}
}
