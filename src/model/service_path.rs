use std::fmt;

/// One of the three coordinates that make up a [`ServicePath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathField {
	Profile,
	Region,
	Service,
}

impl PathField {
	pub const ALL: [PathField; 3] = [PathField::Profile, PathField::Region, PathField::Service];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			PathField::Profile => "profile",
			PathField::Region => "region",
			PathField::Service => "service",
		}
	}
}

/// The (profile, region, service) triple the user is building.
///
/// Detail views receive a clone of the path when they open, so later changes
/// to the live selection never reach a view that is already bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ServicePath {
	pub profile_name: Option<String>,
	pub region_name: Option<String>,
	pub service_name: Option<String>,
}

impl ServicePath {
	#[must_use]
	pub fn new(
		profile: impl Into<String>,
		region: impl Into<String>,
		service: impl Into<String>,
	) -> Self {
		Self {
			profile_name: Some(profile.into()),
			region_name: Some(region.into()),
			service_name: Some(service.into()),
		}
	}

	/// Build a path from optional parts, treating empty strings as unset.
	#[must_use]
	pub fn from_parts(
		profile: Option<String>,
		region: Option<String>,
		service: Option<String>,
	) -> Self {
		fn present(value: Option<String>) -> Option<String> {
			value.filter(|value| !value.trim().is_empty())
		}

		Self {
			profile_name: present(profile),
			region_name: present(region),
			service_name: present(service),
		}
	}

	/// True when all three coordinates are present and non-empty.
	#[must_use]
	pub fn completed(&self) -> bool {
		PathField::ALL
			.iter()
			.all(|field| self.get(*field).is_some_and(|value| !value.is_empty()))
	}

	/// True when no coordinate has been chosen yet.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		PathField::ALL.iter().all(|field| self.get(*field).is_none())
	}

	/// Identity key of the detail view bound to this path.
	///
	/// Missing coordinates render as `None`; only completed paths are keyed by
	/// the navigator.
	#[must_use]
	pub fn id(&self) -> String {
		let part = |field| self.get(field).unwrap_or("None");
		format!(
			"{}_{}_{}",
			part(PathField::Service),
			part(PathField::Region),
			part(PathField::Profile)
		)
	}

	#[must_use]
	pub fn get(&self, field: PathField) -> Option<&str> {
		match field {
			PathField::Profile => self.profile_name.as_deref(),
			PathField::Region => self.region_name.as_deref(),
			PathField::Service => self.service_name.as_deref(),
		}
	}

	pub fn set(&mut self, field: PathField, value: impl Into<String>) {
		let slot = match field {
			PathField::Profile => &mut self.profile_name,
			PathField::Region => &mut self.region_name,
			PathField::Service => &mut self.service_name,
		};
		*slot = Some(value.into());
	}

	#[must_use]
	pub fn profile(&self) -> Option<&str> {
		self.get(PathField::Profile)
	}

	#[must_use]
	pub fn region(&self) -> Option<&str> {
		self.get(PathField::Region)
	}

	#[must_use]
	pub fn service(&self) -> Option<&str> {
		self.get(PathField::Service)
	}
}

/// Renders as `profile 〉region 〉service`, with `-` for unset coordinates.
impl fmt::Display for ServicePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let part = |field| self.get(field).unwrap_or("-");
		write!(
			f,
			"{} 〉{} 〉{}",
			part(PathField::Profile),
			part(PathField::Region),
			part(PathField::Service)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_path_is_not_completed() {
		let path = ServicePath::from_parts(Some("dev".into()), None, Some("s3".into()));
		assert!(!path.completed());
		assert_eq!(path.id(), "s3_None_dev");
	}

	#[test]
	fn complete_path_is_keyed_by_service_region_profile() {
		let path = ServicePath::new("dev", "us-east-1", "s3");
		assert!(path.completed());
		assert_eq!(path.id(), "s3_us-east-1_dev");
	}

	#[test]
	fn empty_strings_do_not_complete_a_path() {
		let path = ServicePath::new("dev", "", "s3");
		assert!(!path.completed());

		let parts = ServicePath::from_parts(Some("  ".into()), None, None);
		assert!(parts.is_empty());
	}

	#[test]
	fn reselection_overwrites_the_previous_value() {
		let mut path = ServicePath::default();
		path.set(PathField::Region, "eu-west-1");
		path.set(PathField::Region, "us-east-1");
		assert_eq!(path.region(), Some("us-east-1"));
		assert!(!path.is_empty());
	}

	#[test]
	fn clones_are_independent_of_later_changes() {
		let mut live = ServicePath::new("dev", "us-east-1", "cloudformation");
		let bound = live.clone();
		live.set(PathField::Profile, "prod");
		assert_eq!(bound.profile(), Some("dev"));
	}

	#[test]
	fn display_marks_missing_parts() {
		let path = ServicePath::from_parts(Some("dev".into()), None, None);
		insta::assert_snapshot!(path.to_string(), @"dev 〉- 〉-");
	}
}
