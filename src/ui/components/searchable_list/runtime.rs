use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::sources::ItemSource;
use crate::systems::filter::{self, FilterCommand, FilterResult};

/// UI-side handle on a list's filter worker.
///
/// Every filter request gets the next id; only the result carrying the latest
/// issued id is accepted.
pub(crate) struct FilterRuntime {
	tx: Sender<FilterCommand>,
	rx: Receiver<FilterResult>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	in_flight: bool,
	load_requested: bool,
}

impl FilterRuntime {
	pub(crate) fn spawn(name: &str, source: Arc<dyn ItemSource>) -> Self {
		let (tx, rx, latest_query_id) = filter::spawn(name, source);
		Self {
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			in_flight: false,
			load_requested: false,
		}
	}

	/// Ask the worker to invoke the item source. Only the first call sends.
	pub(crate) fn request_load(&mut self) -> bool {
		if self.load_requested {
			return false;
		}
		self.load_requested = true;
		let _ = self.tx.send(FilterCommand::Load);
		true
	}

	pub(crate) fn issue_filter(&mut self, query: String) -> u64 {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.current_query_id = Some(id);
		self.in_flight = true;
		self.latest_query_id.store(id, AtomicOrdering::Release);
		let _ = self.tx.send(FilterCommand::Query { id, query });
		id
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	pub(crate) fn record_applied(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn try_recv(&mut self) -> Result<FilterResult, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(FilterCommand::Shutdown);
	}
}

impl Drop for FilterRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}
