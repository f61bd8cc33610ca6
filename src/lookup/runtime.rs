use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use log::debug;
use seatview_api::{QueryKind, SeatingApi};
use thiserror::Error;

use super::commands::{LatestQueries, LookupCommand, LookupResult};
use super::worker;

/// The worker thread has exited and no longer accepts lookups.
#[derive(Debug, Error)]
#[error("lookup worker has stopped")]
pub(crate) struct WorkerStopped;

/// UI-side handle on the lookup worker.
///
/// Every dispatch receives a fresh id. Only the latest id per route may
/// update the UI, so a slow response can never overwrite a newer one.
pub(crate) struct LookupRuntime {
	tx: Sender<LookupCommand>,
	rx: Receiver<LookupResult>,
	latest: Arc<LatestQueries>,
	next_id: u64,
}

impl LookupRuntime {
	pub(crate) fn spawn(api: Arc<dyn SeatingApi>) -> Self {
		let (tx, rx, latest) = worker::spawn(api);
		Self::new(tx, rx, latest)
	}

	pub(crate) fn new(
		tx: Sender<LookupCommand>,
		rx: Receiver<LookupResult>,
		latest: Arc<LatestQueries>,
	) -> Self {
		Self {
			tx,
			rx,
			latest,
			next_id: 0,
		}
	}

	/// Queue a lookup and return its dispatch id.
	pub(crate) fn issue(&mut self, kind: QueryKind, key: String) -> Result<u64, WorkerStopped> {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		self.latest.store(kind, id);
		debug!("dispatching {kind} lookup #{id} for {key}");
		self.tx
			.send(LookupCommand::Query { id, kind, key })
			.map_err(|_| WorkerStopped)?;
		Ok(id)
	}

	pub(crate) fn matches_latest(&self, kind: QueryKind, id: u64) -> bool {
		self.latest.is_latest(kind, id)
	}

	pub(crate) fn try_recv(&self) -> Result<LookupResult, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(LookupCommand::Shutdown);
	}

	/// A runtime whose worker has already gone away.
	#[cfg(test)]
	pub(crate) fn stopped() -> Self {
		let (tx, _) = std::sync::mpsc::channel();
		let (_, rx) = std::sync::mpsc::channel();
		Self::new(tx, rx, Arc::new(LatestQueries::default()))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;

	fn detached_runtime() -> (LookupRuntime, Receiver<LookupCommand>) {
		let (tx, command_rx) = mpsc::channel();
		let (_result_tx, rx) = mpsc::channel();
		let runtime = LookupRuntime::new(tx, rx, Arc::new(LatestQueries::default()));
		(runtime, command_rx)
	}

	#[test]
	fn ids_increase_across_routes() {
		let (mut runtime, commands) = detached_runtime();
		let first = runtime.issue(QueryKind::Student, "A".into()).unwrap();
		let second = runtime.issue(QueryKind::Faculty, "B".into()).unwrap();
		assert!(second > first);
		assert_eq!(commands.try_iter().count(), 2);
	}

	#[test]
	fn newer_dispatch_supersedes_older_one_on_same_route() {
		let (mut runtime, _commands) = detached_runtime();
		let first = runtime.issue(QueryKind::Student, "A".into()).unwrap();
		let other_route = runtime.issue(QueryKind::Faculty, "B".into()).unwrap();
		let second = runtime.issue(QueryKind::Student, "C".into()).unwrap();

		assert!(!runtime.matches_latest(QueryKind::Student, first));
		assert!(runtime.matches_latest(QueryKind::Student, second));
		assert!(runtime.matches_latest(QueryKind::Faculty, other_route));
	}

	#[test]
	fn issuing_to_a_stopped_worker_fails() {
		let mut runtime = LookupRuntime::stopped();
		assert!(runtime.issue(QueryKind::Student, "A".into()).is_err());
		assert!(matches!(runtime.try_recv(), Err(TryRecvError::Disconnected)));
	}
}
