use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use log::{debug, info, warn};
use seatview_api::normalize_key;

use super::App;
use super::tabs::TabId;
use crate::lookup::{LookupOutcome, LookupResult};

impl App<'_> {
	/// Submit the active tab's form.
	pub fn submit(&mut self) -> Option<u64> {
		self.submit_tab(self.active_tab())
	}

	/// Normalize the tab's input and queue a lookup. Blank input is ignored
	/// and leaves every piece of state untouched.
	pub fn submit_tab(&mut self, tab: TabId) -> Option<u64> {
		let key = normalize_key(self.input(tab).text())?;
		let kind = tab.query_kind();
		info!("looking up {} {key}", kind.key_label());
		match self.lookups.issue(kind, key.clone()) {
			Ok(id) => {
				self.state.busy.begin(id);
				Some(id)
			}
			Err(err) => {
				warn!("{kind} lookup for {key} not sent: {err}");
				self.panel_mut(tab).show_failure(key);
				self.state
					.toasts
					.show(format!("Error: {err}"), true, Instant::now());
				None
			}
		}
	}

	/// Drain finished lookups from the worker. If the worker is gone, nothing
	/// outstanding will ever settle, so release it all at once.
	pub(crate) fn pump_lookup_results(&mut self) {
		loop {
			match self.lookups.try_recv() {
				Ok(result) => self.apply_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					let stranded = self.state.busy.settle_all();
					if stranded > 0 {
						warn!("lookup worker stopped with {stranded} lookups outstanding");
						self.state.toasts.show(
							"Error: lookup worker has stopped",
							true,
							Instant::now(),
						);
					}
					break;
				}
			}
		}
	}

	/// Settle the dispatch and, if it is still the latest for its route,
	/// update the owning panel.
	pub(crate) fn apply_result(&mut self, result: LookupResult) {
		let LookupResult {
			id,
			kind,
			key,
			outcome,
		} = result;
		self.state.busy.settle(id);

		if !self.lookups.matches_latest(kind, id) {
			debug!("discarding stale {kind} lookup #{id} for {key}");
			return;
		}

		let panel = self.panel_mut(TabId::from_query_kind(kind));
		match outcome {
			LookupOutcome::Completed(Ok(rows)) => {
				info!("{kind} lookup for {key} returned {} rows", rows.len());
				panel.show_results(key, rows);
			}
			LookupOutcome::Completed(Err(err)) => {
				panel.show_failure(key);
				self.state
					.toasts
					.show(format!("Error: {err}"), true, Instant::now());
			}
			LookupOutcome::Superseded => {}
		}
	}

	/// Advance timers: hide expired toasts and spin the busy throbber.
	pub(crate) fn tick(&mut self, now: Instant) {
		self.state.toasts.tick(now);
		if self.state.busy.is_visible() {
			self.throbber_state.calc_next();
		}
	}
}
