use std::sync::Arc;

use crate::model::Item;
use crate::sources::SourceError;

/// Commands accepted by a list's filter worker.
#[derive(Debug)]
pub(crate) enum FilterCommand {
	/// Invoke the item source and cache its result.
	Load,
	Query {
		id: u64,
		query: String,
	},
	Shutdown,
}

/// Results produced by a list's filter worker.
#[derive(Debug)]
pub(crate) enum FilterResult {
	Loaded(Result<Arc<[Item]>, SourceError>),
	Matches {
		id: u64,
		indices: Vec<usize>,
	},
}
