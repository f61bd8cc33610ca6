use std::sync::atomic::{AtomicU64, Ordering};

use seatview_api::{LookupError, QueryKind, SeatingAssignment, SeatingRecord};

/// Commands understood by the background lookup worker.
#[derive(Debug)]
pub(crate) enum LookupCommand {
	/// Fetch seating rows for a normalized key.
	Query {
		/// Identifier that lets the UI correlate responses with the dispatch.
		id: u64,
		/// Route to query.
		kind: QueryKind,
		/// Normalized roll number or course code.
		key: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Rows produced by a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRows {
	Student(Vec<SeatingRecord>),
	Faculty(Vec<SeatingAssignment>),
}

impl LookupRows {
	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			LookupRows::Student(rows) => rows.len(),
			LookupRows::Faculty(rows) => rows.len(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[derive(Debug)]
pub(crate) enum LookupOutcome {
	Completed(Result<LookupRows, LookupError>),
	/// A newer dispatch for the same route was queued before this one started.
	Superseded,
}

/// Result emitted back to the UI for every [`LookupCommand::Query`].
#[derive(Debug)]
pub(crate) struct LookupResult {
	pub(crate) id: u64,
	pub(crate) kind: QueryKind,
	pub(crate) key: String,
	pub(crate) outcome: LookupOutcome,
}

/// Most recent dispatch id per route, shared between UI and worker.
#[derive(Debug, Default)]
pub(crate) struct LatestQueries {
	student: AtomicU64,
	faculty: AtomicU64,
}

impl LatestQueries {
	fn slot(&self, kind: QueryKind) -> &AtomicU64 {
		match kind {
			QueryKind::Student => &self.student,
			QueryKind::Faculty => &self.faculty,
		}
	}

	pub(crate) fn store(&self, kind: QueryKind, id: u64) {
		self.slot(kind).store(id, Ordering::Release);
	}

	pub(crate) fn load(&self, kind: QueryKind) -> u64 {
		self.slot(kind).load(Ordering::Acquire)
	}

	pub(crate) fn is_latest(&self, kind: QueryKind, id: u64) -> bool {
		self.load(kind) == id
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn latest_ids_are_tracked_per_route() {
		let latest = LatestQueries::default();
		latest.store(QueryKind::Student, 3);
		latest.store(QueryKind::Faculty, 4);

		assert!(latest.is_latest(QueryKind::Student, 3));
		assert!(!latest.is_latest(QueryKind::Student, 4));
		assert!(latest.is_latest(QueryKind::Faculty, 4));
	}
}
