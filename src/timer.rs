//! Deferred execution: the [`Scheduler`] seam, a queue implementing it, and [`delay`].

use crate::Clock;
use alloc::{boxed::Box, collections::BTreeMap, rc::Rc};
use core::{cell::RefCell, fmt, time::Duration};
use tap::Pipe;
use tracing::trace;

/// Runs callbacks later.
///
/// Implementations must run each callback at most once and not before `delay` has elapsed.
/// Nothing else about ordering is promised, and there is no way to cancel.
pub trait Scheduler {
	/// Arranges for `callback` to run once, at least `delay` from now.
	fn schedule(&self, callback: Box<dyn FnOnce()>, delay: Duration);
}

impl<S: ?Sized + Scheduler> Scheduler for &S {
	fn schedule(&self, callback: Box<dyn FnOnce()>, delay: Duration) {
		(**self).schedule(callback, delay)
	}
}

impl<S: ?Sized + Scheduler> Scheduler for Rc<S> {
	fn schedule(&self, callback: Box<dyn FnOnce()>, delay: Duration) {
		(**self).schedule(callback, delay)
	}
}

/// A deadline-ordered callback queue that runs whatever is due when told to.
///
/// Clones share their queue. Callbacks with the same deadline run in the order they were scheduled.
/// Deadlines saturate at [`Duration::MAX`], so very long delays are effectively "never".
pub struct TimerQueue<C> {
	clock: C,
	timers: Rc<RefCell<Timers>>,
}

#[derive(Default)]
struct Timers {
	/// Keyed by deadline, then by scheduling order.
	pending: BTreeMap<(Duration, u64), Box<dyn FnOnce()>>,
	scheduled: u64,
}

impl<C: Clone> Clone for TimerQueue<C> {
	fn clone(&self) -> Self {
		Self {
			clock: self.clock.clone(),
			timers: Rc::clone(&self.timers),
		}
	}
}

impl<C: fmt::Debug> fmt::Debug for TimerQueue<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TimerQueue")
			.field("clock", &self.clock)
			.field("len", &self.len())
			.finish_non_exhaustive()
	}
}

impl<C> TimerQueue<C> {
	/// The earliest pending deadline, iff any.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Duration> {
		self.timers
			.borrow()
			.pending
			.first_key_value()
			.map(|(&(deadline, _), _)| deadline)
	}

	/// The number of pending callbacks.
	#[must_use]
	pub fn len(&self) -> usize {
		self.timers.borrow().pending.len()
	}

	/// Whether no callbacks are pending.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.timers.borrow().pending.is_empty()
	}
}

impl<C: Clock> TimerQueue<C> {
	/// Creates a new empty [`TimerQueue`] that reads deadlines from `clock`.
	#[must_use]
	pub fn new(clock: C) -> Self {
		Self {
			clock,
			timers: Rc::default(),
		}
	}

	/// Runs every callback whose deadline has passed, earliest first, and returns how many ran.
	///
	/// Callbacks scheduled by running callbacks also run iff they are already due.
	pub fn run_due(&self) -> usize {
		let mut fired = 0;
		while let Some(callback) = self.pop_due() {
			callback();
			fired += 1;
		}
		if fired > 0 {
			trace!(fired, "TimerQueue: ran due callbacks");
		}
		fired
	}

	fn pop_due(&self) -> Option<Box<dyn FnOnce()>> {
		let now = self.clock.now();
		let mut timers = self.timers.borrow_mut();
		let due = matches!(timers.pending.first_key_value(), Some((&(deadline, _), _)) if deadline <= now);
		if due {
			timers.pending.pop_first().map(|(_, callback)| callback)
		} else {
			None
		}
	}
}

#[cfg(feature = "std")]
impl TimerQueue<crate::SystemClock> {
	/// Sleeps the current thread between deadlines until no callbacks are left.
	pub fn run_until_idle(&self) {
		while let Some(deadline) = self.next_deadline() {
			std::thread::sleep(deadline.saturating_sub(self.clock.now()));
			self.run_due();
		}
	}
}

impl<C: Clock> Scheduler for TimerQueue<C> {
	fn schedule(&self, callback: Box<dyn FnOnce()>, delay: Duration) {
		let deadline = self.clock.now().saturating_add(delay);
		let mut timers = self.timers.borrow_mut();
		let order = timers.scheduled;
		timers.scheduled += 1;
		timers.pending.insert((deadline, order), callback);
		trace!(?deadline, "TimerQueue: callback scheduled");
	}
}

/// Calls `function(args)` once, at least `wait` from now, through `scheduler`.
///
/// This returns immediately. Whatever `function` returns is discarded.
pub fn delay<S, F, A, R>(scheduler: &S, function: F, wait: Duration, args: A)
where
	S: ?Sized + Scheduler,
	F: 'static + FnOnce(A) -> R,
	A: 'static,
{
	trace!(?wait, "delay: scheduling call");
	(move || drop(function(args)))
		.pipe(Box::new)
		.pipe(|callback| scheduler.schedule(callback, wait))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ManualClock;
	use alloc::vec::Vec;

	#[test]
	fn equal_deadlines_run_in_scheduling_order() {
		let clock = ManualClock::new();
		let timers = TimerQueue::new(clock.clone());
		let log = Rc::new(RefCell::new(Vec::new()));

		for i in 0..3 {
			let log = Rc::clone(&log);
			timers.schedule(Box::new(move || log.borrow_mut().push(i)), Duration::from_millis(5));
		}
		let log_ = Rc::clone(&log);
		timers.schedule(Box::new(move || log_.borrow_mut().push(-1)), Duration::from_millis(1));

		assert_eq!(timers.run_due(), 0);
		clock.advance(Duration::from_millis(5));
		assert_eq!(timers.run_due(), 4);
		assert_eq!(*log.borrow(), [-1, 0, 1, 2]);
		assert!(timers.is_empty());
	}

	#[test]
	fn callbacks_may_schedule_more() {
		let clock = ManualClock::new();
		let timers = TimerQueue::new(clock.clone());
		let inner = timers.clone();
		timers.schedule(
			Box::new(move || inner.schedule(Box::new(|| ()), Duration::ZERO)),
			Duration::ZERO,
		);

		assert_eq!(timers.run_due(), 2);
		assert_eq!(timers.next_deadline(), None);
	}
}
