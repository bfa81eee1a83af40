//! Time sources for [`throttle`](`crate::throttle`) and [`TimerQueue`](`crate::TimerQueue`).

use alloc::rc::Rc;
use core::{cell::Cell, time::Duration};

/// A monotonic time source.
pub trait Clock {
	/// Time elapsed since this clock's (arbitrary but fixed) origin.
	fn now(&self) -> Duration;
}

impl<C: ?Sized + Clock> Clock for &C {
	fn now(&self) -> Duration {
		(**self).now()
	}
}

impl<C: ?Sized + Clock> Clock for Rc<C> {
	fn now(&self) -> Duration {
		(**self).now()
	}
}

/// A [`Clock`] that only moves when told to.
///
/// Clones share their time, so one clone can be handed to a decorator while another is advanced.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
	now: Rc<Cell<Duration>>,
}

impl ManualClock {
	/// Creates a new [`ManualClock`] standing at its origin.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Moves this clock (and all its clones) forward by `by`, saturating at [`Duration::MAX`].
	pub fn advance(&self, by: Duration) {
		self.now.set(self.now.get().saturating_add(by))
	}

	/// Sets this clock (and all its clones) to `to`.
	///
	/// # Panics
	///
	/// Iff `to` lies before the current time.
	pub fn set(&self, to: Duration) {
		assert!(to >= self.now.get(), "`ManualClock` can't go backwards.");
		self.now.set(to)
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Duration {
		self.now.get()
	}
}

/// The wall clock, measured from when this instance was created.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
	origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
	/// Creates a new [`SystemClock`] with its origin at the current instant.
	#[must_use]
	pub fn new() -> Self {
		Self {
			origin: std::time::Instant::now(),
		}
	}
}

#[cfg(feature = "std")]
impl Default for SystemClock {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
	fn now(&self) -> Duration {
		self.origin.elapsed()
	}
}
