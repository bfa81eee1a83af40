//! Shallow merging of key/value mappings.

use crate::{each, Collection};
use alloc::collections::BTreeMap;

/// A key/value [`Collection`] that can be assigned into.
pub trait Object: Collection {
	/// Whether `key` is present.
	fn has_key(&self, key: &Self::Key) -> bool;

	/// Stores `value` under `key`, replacing any previous value.
	fn assign(&mut self, key: Self::Key, value: Self::Item);
}

impl<K: Ord, V> Object for BTreeMap<K, V> {
	fn has_key(&self, key: &K) -> bool {
		self.contains_key(key)
	}

	fn assign(&mut self, key: K, value: V) {
		self.insert(key, value);
	}
}

#[cfg(feature = "std")]
impl<K, V, S> Object for std::collections::HashMap<K, V, S>
where
	K: Eq + core::hash::Hash,
	S: core::hash::BuildHasher,
{
	fn has_key(&self, key: &K) -> bool {
		self.contains_key(key)
	}

	fn assign(&mut self, key: K, value: V) {
		self.insert(key, value);
	}
}

/// Copies every entry of each of `sources` into `target`, in order, so later sources win.
///
/// ```
/// use std::collections::BTreeMap;
/// use underbar::extend;
///
/// let mut target = BTreeMap::from([("key1", "something")]);
/// extend(&mut target, &[&BTreeMap::from([("key2", "new")]), &BTreeMap::from([("key2", "newer")])]);
/// assert_eq!(target, BTreeMap::from([("key1", "something"), ("key2", "newer")]));
/// ```
pub fn extend<'t, O, S>(target: &'t mut O, sources: &[&S]) -> &'t mut O
where
	O: ?Sized + Object,
	O::Key: Clone,
	O::Item: Clone,
	S: ?Sized + Collection<Key = O::Key, Item = O::Item>,
{
	each(sources, |source, _, _| {
		each(*source, |value, key, _| target.assign(key.clone(), value.clone()))
	});
	target
}

/// Copies the entries of `sources` into `target` only where `target` lacks the key,
/// so existing keys are kept and the first source to supply a missing key wins.
pub fn defaults<'t, O, S>(target: &'t mut O, sources: &[&S]) -> &'t mut O
where
	O: ?Sized + Object,
	O::Key: Clone,
	O::Item: Clone,
	S: ?Sized + Collection<Key = O::Key, Item = O::Item>,
{
	each(sources, |source, _, _| {
		each(*source, |value, key, _| {
			if !target.has_key(key) {
				target.assign(key.clone(), value.clone())
			}
		})
	});
	target
}
