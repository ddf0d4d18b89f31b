use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use tracing::{debug, trace};

use crate::systems::cloud::{CloudError, StackClient, StackDetails, StackSummaryRow};

pub(crate) enum StackCommand {
	List { id: u64 },
	Describe { id: u64, stack: String },
	Shutdown,
}

#[derive(Debug)]
pub(crate) enum StackResult {
	Listed {
		id: u64,
		result: Result<Vec<StackSummaryRow>, CloudError>,
	},
	Described {
		id: u64,
		result: Result<StackDetails, CloudError>,
	},
}

/// Latest pending request of each kind after draining the channel.
#[derive(Default)]
struct PendingWork {
	list: Option<u64>,
	describe: Option<(u64, String)>,
	shutdown: bool,
}

impl PendingWork {
	fn absorb(&mut self, command: StackCommand) {
		match command {
			StackCommand::List { id } => self.list = Some(id),
			StackCommand::Describe { id, stack } => self.describe = Some((id, stack)),
			StackCommand::Shutdown => self.shutdown = true,
		}
	}
}

fn spawn(client: Arc<dyn StackClient>) -> (Sender<StackCommand>, Receiver<StackResult>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();

	thread::Builder::new()
		.name("stack-worker".into())
		.spawn(move || worker_loop(client.as_ref(), command_rx, result_tx))
		.expect("failed to spawn stack worker thread");

	(command_tx, result_rx)
}

fn worker_loop(
	client: &dyn StackClient,
	command_rx: Receiver<StackCommand>,
	result_tx: Sender<StackResult>,
) {
	while let Ok(command) = command_rx.recv() {
		let work = drain_to_latest(&command_rx, command);
		if work.shutdown {
			break;
		}

		if let Some(id) = work.list {
			debug!(id, "listing stacks");
			let result = client.list_stacks();
			if result_tx.send(StackResult::Listed { id, result }).is_err() {
				break;
			}
		}

		if let Some((id, stack)) = work.describe {
			debug!(id, %stack, "describing stack");
			let result = client.describe_stack(&stack);
			if result_tx.send(StackResult::Described { id, result }).is_err() {
				break;
			}
		}
	}
}

/// Collapse queued commands so only the newest request of each kind runs.
fn drain_to_latest(command_rx: &Receiver<StackCommand>, first: StackCommand) -> PendingWork {
	let mut work = PendingWork::default();
	work.absorb(first);
	while let Ok(next) = command_rx.try_recv() {
		trace!("superseding queued stack request");
		work.absorb(next);
	}
	work
}

/// UI-side handle on a page's stack worker.
pub(crate) struct StackRuntime {
	tx: Sender<StackCommand>,
	rx: Receiver<StackResult>,
	next_id: u64,
	pending_list: Option<u64>,
	pending_describe: Option<u64>,
}

impl StackRuntime {
	pub(crate) fn new(client: Arc<dyn StackClient>) -> Self {
		let (tx, rx) = spawn(client);
		Self {
			tx,
			rx,
			next_id: 0,
			pending_list: None,
			pending_describe: None,
		}
	}

	fn next_id(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		self.next_id
	}

	pub(crate) fn request_list(&mut self) -> u64 {
		let id = self.next_id();
		self.pending_list = Some(id);
		let _ = self.tx.send(StackCommand::List { id });
		id
	}

	pub(crate) fn request_describe(&mut self, stack: String) -> u64 {
		let id = self.next_id();
		self.pending_describe = Some(id);
		let _ = self.tx.send(StackCommand::Describe { id, stack });
		id
	}

	/// Accept a list result if it answers the latest list request.
	pub(crate) fn accept_list(&mut self, id: u64) -> bool {
		if self.pending_list == Some(id) {
			self.pending_list = None;
			true
		} else {
			false
		}
	}

	/// Accept a describe result if it answers the latest describe request.
	pub(crate) fn accept_describe(&mut self, id: u64) -> bool {
		if self.pending_describe == Some(id) {
			self.pending_describe = None;
			true
		} else {
			false
		}
	}

	pub(crate) fn is_listing(&self) -> bool {
		self.pending_list.is_some()
	}

	pub(crate) fn is_describing(&self) -> bool {
		self.pending_describe.is_some()
	}

	pub(crate) fn try_recv(&mut self) -> Result<StackResult, TryRecvError> {
		self.rx.try_recv()
	}
}

impl Drop for StackRuntime {
	fn drop(&mut self) {
		let _ = self.tx.send(StackCommand::Shutdown);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::mpsc;

	#[test]
	fn draining_keeps_the_newest_request_of_each_kind() {
		let (tx, rx) = mpsc::channel();
		tx.send(StackCommand::Describe {
			id: 2,
			stack: "network".into(),
		})
		.unwrap();
		tx.send(StackCommand::List { id: 3 }).unwrap();
		tx.send(StackCommand::Describe {
			id: 4,
			stack: "database".into(),
		})
		.unwrap();

		let work = drain_to_latest(&rx, StackCommand::List { id: 1 });
		assert_eq!(work.list, Some(3));
		assert_eq!(work.describe, Some((4, "database".to_string())));
		assert!(!work.shutdown);
	}

	#[test]
	fn shutdown_is_noticed_while_draining() {
		let (tx, rx) = mpsc::channel();
		tx.send(StackCommand::Shutdown).unwrap();
		let work = drain_to_latest(&rx, StackCommand::List { id: 1 });
		assert!(work.shutdown);
	}
}
