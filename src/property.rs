//! Name-based access, for [`pluck`](`crate::pluck`), [`sort_by_property`](`crate::sort_by_property`)
//! and [`invoke_method`](`crate::invoke_method`).

use alloc::{collections::BTreeMap, vec::Vec};
use core::borrow::Borrow;

/// Look-up of a named (or indexed) property.
///
/// Implement `Property<str>` on your record types to make them pluckable by field name.
pub trait Property<Q: ?Sized> {
	/// The type of the property's value.
	type Value: ?Sized;

	/// Retrieves a reference to the value stored under `key`, iff available.
	fn property(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, Q> Property<Q> for BTreeMap<K, V>
where
	K: Ord + Borrow<Q>,
	Q: ?Sized + Ord,
{
	type Value = V;

	fn property(&self, key: &Q) -> Option<&V> {
		self.get(key)
	}
}

#[cfg(feature = "std")]
impl<K, V, Q, S> Property<Q> for std::collections::HashMap<K, V, S>
where
	K: Eq + core::hash::Hash + Borrow<Q>,
	Q: ?Sized + Eq + core::hash::Hash,
	S: core::hash::BuildHasher,
{
	type Value = V;

	fn property(&self, key: &Q) -> Option<&V> {
		self.get(key)
	}
}

impl<T> Property<usize> for [T] {
	type Value = T;

	fn property(&self, key: &usize) -> Option<&T> {
		self.get(*key)
	}
}

impl<T> Property<usize> for Vec<T> {
	type Value = T;

	fn property(&self, key: &usize) -> Option<&T> {
		self.get(*key)
	}
}

/// Dispatch of a method call by name.
///
/// `A` is the argument list every invoked method receives.
pub trait Methods<A: ?Sized> {
	/// What methods return.
	type Output;

	/// Calls the method called `name` with `args`.
	///
	/// Returns [`None`] iff there is no method called `name`.
	fn call_method(&self, name: &str, args: &A) -> Option<Self::Output>;
}
