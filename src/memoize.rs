use alloc::collections::BTreeMap;
use core::borrow::Borrow;
use tracing::trace;

/// A function with a result cache. See [`memoize`].
#[must_use = "`Memoize` does nothing unless called"]
pub struct Memoize<F, A, R> {
	function: F,
	cache: BTreeMap<A, R>,
}

/// Wraps the single-argument `function` so that it runs only once per distinct argument.
///
/// Arguments are compared by [`Ord`], so `function` should be pure with respect to that ordering.
/// The cache is never evicted.
///
/// ```
/// use underbar::memoize;
///
/// let mut calls = 0;
/// let mut square = memoize(|n: &u64| {
///     calls += 1;
///     n * n
/// });
/// assert_eq!(*square.call(5), 25);
/// assert_eq!(*square.call(5), 25);
/// drop(square);
/// assert_eq!(calls, 1);
/// ```
pub fn memoize<F, A, R>(function: F) -> Memoize<F, A, R>
where
	F: FnMut(&A) -> R,
	A: Ord,
{
	Memoize {
		function,
		cache: BTreeMap::new(),
	}
}

impl<F, A, R> Memoize<F, A, R>
where
	F: FnMut(&A) -> R,
	A: Ord,
{
	/// Returns the cached result for `arg`, computing it first iff `arg` wasn't seen yet.
	pub fn call(&mut self, arg: A) -> &R {
		let function = &mut self.function;
		self.cache.entry(arg).or_insert_with_key(|arg| {
			trace!("memoize: cache miss");
			function(arg)
		})
	}

	/// Whether a result for `arg` is cached.
	#[must_use]
	pub fn contains<Q>(&self, arg: &Q) -> bool
	where
		A: Borrow<Q>,
		Q: ?Sized + Ord,
	{
		self.cache.contains_key(arg)
	}

	/// The number of cached results.
	#[must_use]
	pub fn len(&self) -> usize {
		self.cache.len()
	}

	/// Whether nothing is cached yet.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.cache.is_empty()
	}
}
