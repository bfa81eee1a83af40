//! The walking primitive everything else is built on.

use alloc::{collections::BTreeMap, vec::Vec};

/// Something [`each`] can walk: an ordered sequence or a key/value mapping.
///
/// Sequences are keyed by index and walked in ascending index order.
/// Mappings are walked in their own iteration order, which is sorted for [`BTreeMap`]
/// and arbitrary (but stable within one pass) for `HashMap`.
pub trait Collection {
	/// The index or key type handed to iterators.
	type Key;
	/// The element type.
	type Item;

	/// Calls `iterator(value, key, self)` once per element, synchronously and in iteration order.
	fn each<'a, F>(&'a self, iterator: F)
	where
		F: FnMut(&'a Self::Item, &Self::Key, &'a Self);
}

/// Calls `iterator(value, key, collection)` for each element of `collection`.
///
/// This doesn't return anything. It's the only place the crate walks a collection.
pub fn each<'a, C, F>(collection: &'a C, iterator: F)
where
	C: ?Sized + Collection,
	F: FnMut(&'a C::Item, &C::Key, &'a C),
{
	collection.each(iterator)
}

/// Returns `value` unchanged.
///
/// Pass this where a predicate or iterator is expected to use the elements themselves,
/// e.g. `every(&flags, identity)`.
#[must_use]
pub fn identity<T>(value: T) -> T {
	value
}

impl<T> Collection for [T] {
	type Key = usize;
	type Item = T;

	fn each<'a, F>(&'a self, mut iterator: F)
	where
		F: FnMut(&'a T, &usize, &'a Self),
	{
		for (index, item) in self.iter().enumerate() {
			iterator(item, &index, self)
		}
	}
}

impl<T, const N: usize> Collection for [T; N] {
	type Key = usize;
	type Item = T;

	fn each<'a, F>(&'a self, mut iterator: F)
	where
		F: FnMut(&'a T, &usize, &'a Self),
	{
		for (index, item) in self.iter().enumerate() {
			iterator(item, &index, self)
		}
	}
}

impl<T> Collection for Vec<T> {
	type Key = usize;
	type Item = T;

	fn each<'a, F>(&'a self, mut iterator: F)
	where
		F: FnMut(&'a T, &usize, &'a Self),
	{
		for (index, item) in self.iter().enumerate() {
			iterator(item, &index, self)
		}
	}
}

impl<K, V> Collection for BTreeMap<K, V> {
	type Key = K;
	type Item = V;

	fn each<'a, F>(&'a self, mut iterator: F)
	where
		F: FnMut(&'a V, &K, &'a Self),
	{
		for (key, value) in self {
			iterator(value, key, self)
		}
	}
}

#[cfg(feature = "std")]
impl<K, V, S> Collection for std::collections::HashMap<K, V, S> {
	type Key = K;
	type Item = V;

	fn each<'a, F>(&'a self, mut iterator: F)
	where
		F: FnMut(&'a V, &K, &'a Self),
	{
		for (key, value) in self {
			iterator(value, key, self)
		}
	}
}
