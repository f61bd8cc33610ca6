//! Toast messages and the busy indicator.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// How long a toast stays visible unless configured otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
	pub message: String,
	pub is_error: bool,
	hide_at: Instant,
}

/// At most one visible toast; each `show` replaces the previous one.
///
/// The hide deadline belongs to the toast that scheduled it, so an earlier
/// toast's timer never dismisses a later toast.
#[derive(Debug, Clone)]
pub struct ToastState {
	duration: Duration,
	current: Option<Toast>,
}

impl Default for ToastState {
	fn default() -> Self {
		Self::new(DEFAULT_TOAST_DURATION)
	}
}

impl ToastState {
	#[must_use]
	pub fn new(duration: Duration) -> Self {
		Self {
			duration,
			current: None,
		}
	}

	/// Display `message`, styled as an error only when `is_error` is set.
	pub fn show(&mut self, message: impl Into<String>, is_error: bool, now: Instant) {
		self.current = Some(Toast {
			message: message.into(),
			is_error,
			hide_at: now + self.duration,
		});
	}

	/// Hide the toast if its own deadline has passed.
	pub fn tick(&mut self, now: Instant) {
		if self
			.current
			.as_ref()
			.is_some_and(|toast| now >= toast.hide_at)
		{
			self.current = None;
		}
	}

	#[must_use]
	pub fn current(&self) -> Option<&Toast> {
		self.current.as_ref()
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.current.is_some()
	}
}

/// Visible while any dispatch is outstanding.
#[derive(Debug, Clone, Default)]
pub struct BusyIndicator {
	outstanding: BTreeSet<u64>,
}

impl BusyIndicator {
	pub fn begin(&mut self, dispatch: u64) {
		self.outstanding.insert(dispatch);
	}

	/// Release `dispatch`. Returns `false` when it was already released.
	pub fn settle(&mut self, dispatch: u64) -> bool {
		self.outstanding.remove(&dispatch)
	}

	/// Release every outstanding dispatch and return how many there were.
	pub fn settle_all(&mut self) -> usize {
		let count = self.outstanding.len();
		self.outstanding.clear();
		count
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		!self.outstanding.is_empty()
	}

	#[must_use]
	pub fn outstanding(&self) -> usize {
		self.outstanding.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toast_hides_after_duration() {
		let start = Instant::now();
		let mut toasts = ToastState::new(Duration::from_secs(3));
		toasts.show("Error: boom", true, start);

		toasts.tick(start + Duration::from_millis(2_999));
		assert!(toasts.is_visible());

		toasts.tick(start + Duration::from_secs(3));
		assert!(!toasts.is_visible());
	}

	#[test]
	fn error_style_does_not_leak_between_toasts() {
		let now = Instant::now();
		let mut toasts = ToastState::default();
		toasts.show("Error: boom", true, now);
		toasts.show("Saved", false, now);
		let toast = toasts.current().unwrap();
		assert_eq!(toast.message, "Saved");
		assert!(!toast.is_error);
	}

	#[test]
	fn older_timer_does_not_hide_newer_toast() {
		let start = Instant::now();
		let mut toasts = ToastState::new(Duration::from_secs(3));
		toasts.show("first", true, start);
		toasts.show("second", true, start + Duration::from_secs(2));

		toasts.tick(start + Duration::from_secs(3));
		assert_eq!(toasts.current().map(|toast| toast.message.as_str()), Some("second"));

		toasts.tick(start + Duration::from_secs(5));
		assert!(!toasts.is_visible());
	}

	#[test]
	fn busy_is_released_exactly_once() {
		let mut busy = BusyIndicator::default();
		busy.begin(1);
		assert!(busy.is_visible());

		assert!(busy.settle(1));
		assert!(!busy.settle(1));
		assert!(!busy.is_visible());
	}

	#[test]
	fn busy_stays_visible_until_every_dispatch_settles() {
		let mut busy = BusyIndicator::default();
		busy.begin(1);
		busy.begin(2);
		busy.settle(2);
		assert!(busy.is_visible());
		assert_eq!(busy.outstanding(), 1);
		busy.settle(1);
		assert!(!busy.is_visible());
	}

	#[test]
	fn settle_all_releases_everything_once() {
		let mut busy = BusyIndicator::default();
		busy.begin(3);
		busy.begin(4);
		assert_eq!(busy.settle_all(), 2);
		assert!(!busy.is_visible());
		assert_eq!(busy.settle_all(), 0);
		assert!(!busy.settle(3));
	}
}
