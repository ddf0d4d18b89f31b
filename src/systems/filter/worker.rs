use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, trace, warn};

use super::commands::{FilterCommand, FilterResult};
use super::matcher::filter_indices;
use crate::model::Item;
use crate::sources::ItemSource;

/// Launches a filter worker for one list and returns its channels.
pub(crate) fn spawn(
	name: &str,
	source: Arc<dyn ItemSource>,
) -> (
	Sender<FilterCommand>,
	Receiver<FilterResult>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::Builder::new()
		.name(format!("filter-{name}"))
		.spawn(move || worker_loop(source.as_ref(), command_rx, result_tx, thread_latest))
		.expect("failed to spawn filter worker thread");

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	source: &dyn ItemSource,
	command_rx: Receiver<FilterCommand>,
	result_tx: Sender<FilterResult>,
	latest_query_id: Arc<AtomicU64>,
) {
	let mut items: Arc<[Item]> = Arc::from(Vec::new());
	while let Ok(command) = command_rx.recv() {
		if !handle_command(source, &mut items, &result_tx, &latest_query_id, command) {
			break;
		}
	}
}

fn handle_command(
	source: &dyn ItemSource,
	items: &mut Arc<[Item]>,
	result_tx: &Sender<FilterResult>,
	latest_query_id: &AtomicU64,
	command: FilterCommand,
) -> bool {
	match command {
		FilterCommand::Load => {
			let result = source.fetch().map(Arc::<[Item]>::from);
			match &result {
				Ok(loaded) => {
					debug!(count = loaded.len(), "item source loaded");
					*items = Arc::clone(loaded);
				}
				Err(err) => warn!(error = %err, "item source failed"),
			}
			result_tx.send(FilterResult::Loaded(result)).is_ok()
		}
		FilterCommand::Query { id, query } => {
			if is_superseded(latest_query_id, id) {
				trace!(id, "skipping superseded filter query");
				return true;
			}
			let indices = filter_indices(items, &query);
			if is_superseded(latest_query_id, id) {
				trace!(id, "dropping superseded filter result");
				return true;
			}
			result_tx.send(FilterResult::Matches { id, indices }).is_ok()
		}
		FilterCommand::Shutdown => false,
	}
}

fn is_superseded(latest_query_id: &AtomicU64, id: u64) -> bool {
	latest_query_id.load(Ordering::Acquire) > id
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	use crate::sources::SourceError;

	fn profiles() -> Arc<dyn ItemSource> {
		Arc::new(|| -> Result<Vec<Item>, SourceError> {
			Ok(vec![Item::labelled("default"), Item::labelled("admin")])
		})
	}

	fn recv(rx: &Receiver<FilterResult>) -> FilterResult {
		rx.recv_timeout(Duration::from_secs(5))
			.expect("worker should respond")
	}

	#[test]
	fn loads_then_filters_against_the_cached_items() {
		let (tx, rx, latest) = spawn("test", profiles());
		tx.send(FilterCommand::Load).unwrap();
		match recv(&rx) {
			FilterResult::Loaded(Ok(items)) => assert_eq!(items.len(), 2),
			other => panic!("unexpected result: {other:?}"),
		}

		latest.store(1, Ordering::Release);
		tx.send(FilterCommand::Query {
			id: 1,
			query: "ad".into(),
		})
		.unwrap();
		match recv(&rx) {
			FilterResult::Matches { id, indices } => {
				assert_eq!(id, 1);
				assert_eq!(indices, vec![1]);
			}
			other => panic!("unexpected result: {other:?}"),
		}

		tx.send(FilterCommand::Shutdown).unwrap();
	}

	#[test]
	fn superseded_queries_are_skipped() {
		let (tx, rx, latest) = spawn("test", profiles());
		tx.send(FilterCommand::Load).unwrap();
		let _ = recv(&rx);

		latest.store(2, Ordering::Release);
		tx.send(FilterCommand::Query {
			id: 1,
			query: "def".into(),
		})
		.unwrap();
		tx.send(FilterCommand::Query {
			id: 2,
			query: "adm".into(),
		})
		.unwrap();

		match recv(&rx) {
			FilterResult::Matches { id, indices } => {
				assert_eq!(id, 2);
				assert_eq!(indices, vec![1]);
			}
			other => panic!("unexpected result: {other:?}"),
		}
		tx.send(FilterCommand::Shutdown).unwrap();
		assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
	}

	#[test]
	fn source_errors_are_forwarded() {
		let failing: Arc<dyn ItemSource> = Arc::new(|| -> Result<Vec<Item>, SourceError> {
			Err(SourceError::Other("boom".into()))
		});
		let (tx, rx, _latest) = spawn("test", failing);
		tx.send(FilterCommand::Load).unwrap();
		match recv(&rx) {
			FilterResult::Loaded(Err(err)) => assert_eq!(err.to_string(), "boom"),
			other => panic!("unexpected result: {other:?}"),
		}
		tx.send(FilterCommand::Shutdown).unwrap();
	}
}
