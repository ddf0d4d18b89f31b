use super::{ItemSource, SourceError};
use crate::model::Item;

/// Commercial regions offered on the welcome tab, as `(code, name)`.
pub const REGIONS: &[(&str, &str)] = &[
	("us-east-1", "N. Virginia"),
	("us-east-2", "Ohio"),
	("us-west-1", "N. California"),
	("us-west-2", "Oregon"),
	("af-south-1", "Cape Town"),
	("ap-east-1", "Hong Kong"),
	("ap-south-1", "Mumbai"),
	("ap-south-2", "Hyderabad"),
	("ap-southeast-1", "Singapore"),
	("ap-southeast-2", "Sydney"),
	("ap-southeast-3", "Jakarta"),
	("ap-southeast-4", "Melbourne"),
	("ap-northeast-1", "Tokyo"),
	("ap-northeast-2", "Seoul"),
	("ap-northeast-3", "Osaka"),
	("ca-central-1", "Canada Central"),
	("ca-west-1", "Calgary"),
	("eu-central-1", "Frankfurt"),
	("eu-central-2", "Zurich"),
	("eu-west-1", "Ireland"),
	("eu-west-2", "London"),
	("eu-west-3", "Paris"),
	("eu-south-1", "Milan"),
	("eu-south-2", "Spain"),
	("eu-north-1", "Stockholm"),
	("il-central-1", "Tel Aviv"),
	("me-south-1", "Bahrain"),
	("me-central-1", "UAE"),
	("sa-east-1", "Sao Paulo"),
];

/// Region items titled `"{code} ({name})"` and keyed by code.
#[must_use]
pub fn region_items() -> Vec<Item> {
	REGIONS
		.iter()
		.map(|(code, name)| Item::new(format!("{code} ({name})"), *code))
		.collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegionSource;

impl ItemSource for RegionSource {
	fn fetch(&self) -> Result<Vec<Item>, SourceError> {
		Ok(region_items())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn region_titles_include_the_location() {
		let items = region_items();
		assert_eq!(items.len(), REGIONS.len());
		assert_eq!(items[0].title, "us-east-1 (N. Virginia)");
		assert_eq!(items[0].id, "us-east-1");
	}
}
