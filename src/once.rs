use core::mem;

/// A function that runs at most once, remembering its result. See [`once`].
#[must_use = "`Once` does nothing unless called"]
#[derive(Debug)]
pub struct Once<F, R> {
	state: State<F, R>,
}

#[derive(Debug)]
enum State<F, R> {
	Pending(F),
	Called(R),
	/// The wrapped function panicked.
	Poisoned,
}

/// Wraps `function` so that only the first [`Once::call`] runs it.
///
/// Every call returns the result of that first invocation.
///
/// ```
/// use underbar::once;
///
/// let mut initialize = once(|name: &str| name.len());
/// assert_eq!(*initialize.call("first"), 5);
/// assert_eq!(*initialize.call("ignored"), 5);
/// ```
pub fn once<F, R>(function: F) -> Once<F, R> {
	Once {
		state: State::Pending(function),
	}
}

impl<F, R> Once<F, R> {
	/// Runs the wrapped function with `args` iff this is the first call, then returns its result.
	///
	/// # Panics
	///
	/// Iff the wrapped function panicked during an earlier call.
	pub fn call<A>(&mut self, args: A) -> &R
	where
		F: FnOnce(A) -> R,
	{
		match mem::replace(&mut self.state, State::Poisoned) {
			State::Pending(function) => self.state = State::Called(function(args)),
			state => self.state = state,
		}

		match &self.state {
			State::Called(result) => result,
			State::Pending(_) | State::Poisoned => {
				panic!("`Once`: The wrapped function panicked during its only invocation.")
			}
		}
	}

	/// Whether the wrapped function has already run.
	#[must_use]
	pub fn is_called(&self) -> bool {
		!matches!(self.state, State::Pending(_))
	}

	/// The remembered result, iff the wrapped function has run.
	#[must_use]
	pub fn result(&self) -> Option<&R> {
		match &self.state {
			State::Called(result) => Some(result),
			State::Pending(_) | State::Poisoned => None,
		}
	}
}
