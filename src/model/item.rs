use std::collections::BTreeMap;

/// A labelled entry shown by a searchable list.
///
/// `id` must be unique within a single list; selection is tracked by it so a
/// committed row survives refiltering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
	pub title: String,
	pub id: String,
	pub user_data: Option<BTreeMap<String, String>>,
}

impl Item {
	#[must_use]
	pub fn new(title: impl Into<String>, id: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			id: id.into(),
			user_data: None,
		}
	}

	/// Create an item whose id is its title.
	#[must_use]
	pub fn labelled(label: impl Into<String>) -> Self {
		let label = label.into();
		Self::new(label.clone(), label)
	}

	#[must_use]
	pub fn with_user_data<I, K, V>(mut self, entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let data = entries
			.into_iter()
			.map(|(key, value)| (key.into(), value.into()))
			.collect();
		self.user_data = Some(data);
		self
	}

	#[must_use]
	pub fn user_value(&self, key: &str) -> Option<&str> {
		self.user_data
			.as_ref()
			.and_then(|data| data.get(key))
			.map(String::as_str)
	}
}
