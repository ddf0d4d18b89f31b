use crate::model::Item;

/// Lowercased, trimmed form of a query, or `None` when it matches everything.
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
	let trimmed = query.trim();
	if trimmed.is_empty() {
		None
	} else {
		Some(trimmed.to_lowercase())
	}
}

/// Indices of the items whose title contains `query`, ignoring case.
///
/// An empty or whitespace-only query keeps every item.
#[must_use]
pub fn filter_indices(items: &[Item], query: &str) -> Vec<usize> {
	let Some(needle) = normalize_query(query) else {
		return (0..items.len()).collect();
	};

	items
		.iter()
		.enumerate()
		.filter(|(_, item)| item.title.to_lowercase().contains(&needle))
		.map(|(index, _)| index)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn items(titles: &[&str]) -> Vec<Item> {
		titles.iter().map(|title| Item::labelled(*title)).collect()
	}

	fn titles<'a>(items: &'a [Item], indices: &[usize]) -> Vec<&'a str> {
		indices.iter().map(|index| items[*index].title.as_str()).collect()
	}

	#[test]
	fn blank_queries_keep_everything() {
		let items = items(&["default", "admin"]);
		assert_eq!(filter_indices(&items, ""), vec![0, 1]);
		assert_eq!(filter_indices(&items, "   "), vec![0, 1]);
	}

	#[test]
	fn matching_is_case_insensitive_substring() {
		let items = items(&["Default", "ADMIN", "readonly"]);
		assert_eq!(titles(&items, &filter_indices(&items, "ad")), vec!["ADMIN", "readonly"]);
		assert_eq!(titles(&items, &filter_indices(&items, "  DEF ")), vec!["Default"]);
	}

	#[test]
	fn no_match_yields_nothing() {
		let items = items(&["default", "admin"]);
		assert!(filter_indices(&items, "zzz").is_empty());
	}

	#[test]
	fn refiltering_always_starts_from_the_full_set() {
		let items = items(&["default", "admin"]);
		assert_eq!(filter_indices(&items, "adm"), vec![1]);
		assert_eq!(filter_indices(&items, "def"), vec![0]);
	}
}
