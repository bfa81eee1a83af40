//! Rate limiting with a trailing call.

use crate::{Clock, Scheduler};
use alloc::{boxed::Box, rc::Rc};
use core::{cell::RefCell, time::Duration};
use tap::Pipe;
use tracing::{debug, trace};

/// A function that runs at most once per window. See [`throttle`].
///
/// A pending trailing call keeps the wrapped function alive even after this handle is dropped.
#[must_use = "`Throttle` does nothing unless called"]
pub struct Throttle<F, A, R, C, S> {
	shared: Rc<Shared<F, A, R>>,
	wait: Duration,
	clock: C,
	scheduler: S,
}

struct Shared<F, A, R> {
	function: RefCell<F>,
	state: RefCell<State<A, R>>,
}

struct State<A, R> {
	window: Window<R>,
	/// Arguments for the scheduled trailing call. [`Some`] exactly while one is pending.
	trailing: Option<A>,
}

enum Window<R> {
	Idle,
	Active { start: Duration, last: R },
}

/// Wraps `function` so that it runs at most once per `wait`, plus one trailing call.
///
/// - The first call runs `function` immediately and opens a window.
/// - A call more than `wait` after the window opened does the same.
/// - A call within the window schedules one trailing call for the end of the window through `scheduler`.
/// - While that trailing call is pending, further calls only replace its arguments,
///   so it runs with the most recent ones.
/// - The trailing call opens a new window when it runs.
///
/// Each call returns the result of the most recent completed invocation, which may be stale.
///
/// The returned handle is single-threaded. Calling it from within `function` panics.
pub fn throttle<F, A, R, C, S>(
	function: F,
	wait: Duration,
	clock: C,
	scheduler: S,
) -> Throttle<F, A, R, C, S>
where
	F: FnMut(A) -> R,
	C: Clock,
	S: Scheduler,
{
	Throttle {
		shared: Shared {
			function: RefCell::new(function),
			state: RefCell::new(State {
				window: Window::Idle,
				trailing: None,
			}),
		}
		.pipe(Rc::new),
		wait,
		clock,
		scheduler,
	}
}

impl<F, A, R, C, S> Throttle<F, A, R, C, S>
where
	F: 'static + FnMut(A) -> R,
	A: 'static,
	R: 'static + Clone,
	C: 'static + Clock + Clone,
	S: Scheduler,
{
	/// Calls the wrapped function now, later or not at all, depending on the current window.
	///
	/// Returns the result of the most recent completed invocation.
	pub fn call(&self, args: A) -> R {
		let now = self.clock.now();
		let mut state = self.shared.state.borrow_mut();
		let State { window, trailing } = &mut *state;
		match window {
			Window::Active { last, .. } if trailing.is_some() => {
				*trailing = Some(args);
				trace!("throttle: call folded into the pending trailing call");
				return last.clone();
			}
			Window::Active { start, last } => {
				let elapsed = now.saturating_sub(*start);
				if elapsed <= self.wait {
					*trailing = Some(args);
					let last = last.clone();
					drop(state);
					self.schedule_trailing(self.wait - elapsed);
					return last;
				}
			}
			Window::Idle => (),
		}
		drop(state);

		debug!("throttle: invoking immediately");
		invoke(&self.shared, args, now)
	}

	fn schedule_trailing(&self, delay: Duration) {
		let shared = Rc::clone(&self.shared);
		let clock = self.clock.clone();
		trace!(?delay, "throttle: trailing call scheduled");
		self.scheduler
			.schedule(Box::new(move || fire(&shared, &clock)), delay)
	}
}

impl<F, A, R, C, S> Throttle<F, A, R, C, S> {
	/// Whether a trailing call is scheduled.
	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.shared.state.borrow().trailing.is_some()
	}

	/// The result of the most recent completed invocation, iff there was one.
	#[must_use]
	pub fn last(&self) -> Option<R>
	where
		R: Clone,
	{
		match &self.shared.state.borrow().window {
			Window::Idle => None,
			Window::Active { last, .. } => Some(last.clone()),
		}
	}

	/// The window length.
	#[must_use]
	pub fn wait(&self) -> Duration {
		self.wait
	}
}

fn invoke<F, A, R>(shared: &Shared<F, A, R>, args: A, start: Duration) -> R
where
	F: FnMut(A) -> R,
	R: Clone,
{
	let result = (&mut *shared.function.borrow_mut())(args);
	shared.state.borrow_mut().window = Window::Active {
		start,
		last: result.clone(),
	};
	result
}

fn fire<F, A, R, C>(shared: &Shared<F, A, R>, clock: &C)
where
	F: FnMut(A) -> R,
	R: Clone,
	C: Clock,
{
	// Taking the arguments also clears the pending flag, even if the function panics.
	let Some(args) = shared.state.borrow_mut().trailing.take() else {
		return;
	};
	debug!("throttle: trailing call fired");
	invoke(shared, args, clock.now());
}
