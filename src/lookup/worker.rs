use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, warn};
use seatview_api::{LookupError, QueryKind, SeatingApi};

use super::commands::{LatestQueries, LookupCommand, LookupOutcome, LookupResult, LookupRows};

/// Launch the background lookup worker and return its channels.
pub(crate) fn spawn(
	api: Arc<dyn SeatingApi>,
) -> (Sender<LookupCommand>, Receiver<LookupResult>, Arc<LatestQueries>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest = Arc::new(LatestQueries::default());
	let thread_latest = Arc::clone(&latest);

	thread::spawn(move || worker_loop(api.as_ref(), command_rx, result_tx, &thread_latest));

	(command_tx, result_rx, latest)
}

fn worker_loop(
	api: &dyn SeatingApi,
	command_rx: Receiver<LookupCommand>,
	result_tx: Sender<LookupResult>,
	latest: &LatestQueries,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(api, &result_tx, latest, command) {
			break;
		}
	}
	debug!("lookup worker stopped");
}

fn handle_command(
	api: &dyn SeatingApi,
	result_tx: &Sender<LookupResult>,
	latest: &LatestQueries,
	command: LookupCommand,
) -> bool {
	match command {
		LookupCommand::Query { id, kind, key } => {
			let outcome = if latest.is_latest(kind, id) {
				LookupOutcome::Completed(run_lookup(api, kind, &key))
			} else {
				debug!("skipping superseded {kind} lookup #{id} for {key}");
				LookupOutcome::Superseded
			};
			result_tx
				.send(LookupResult {
					id,
					kind,
					key,
					outcome,
				})
				.is_ok()
		}
		LookupCommand::Shutdown => false,
	}
}

/// A panicking client becomes a failed lookup; the worker keeps serving.
fn run_lookup(api: &dyn SeatingApi, kind: QueryKind, key: &str) -> Result<LookupRows, LookupError> {
	let result = panic::catch_unwind(AssertUnwindSafe(|| match kind {
		QueryKind::Student => api.student(key).map(LookupRows::Student),
		QueryKind::Faculty => api.faculty(key).map(LookupRows::Faculty),
	}))
	.unwrap_or_else(|payload| Err(LookupError::Aborted(panic_message(payload.as_ref()))));

	match &result {
		Ok(rows) => debug!("{kind} lookup for {key} returned {} rows", rows.len()),
		Err(err) => match err.status() {
			Some(status) => warn!("{kind} lookup for {key} failed with HTTP {status}: {err}"),
			None => warn!("{kind} lookup for {key} failed: {err}"),
		},
	}
	result
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	payload
		.downcast_ref::<&str>()
		.map(|message| (*message).to_owned())
		.or_else(|| payload.downcast_ref::<String>().cloned())
		.unwrap_or_else(|| "client panicked".to_owned())
}
