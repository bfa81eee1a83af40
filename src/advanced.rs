//! Higher-level operations composed from the transforms.

use crate::{contains, each, every, filter, identity, map, reduce, some, Collection, Property, Truthy};
use alloc::{vec, vec::Vec};
use core::cmp::Ordering;
use rand::{seq::SliceRandom, Rng};
use tap::Tap;

/// A value or an arbitrarily deep list of them. See [`flatten`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
	/// A plain value.
	Leaf(T),
	/// A nested list.
	List(Vec<Nested<T>>),
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
	fn from(list: Vec<Nested<T>>) -> Self {
		Self::List(list)
	}
}

/// Groups the elements of `arrays` by index.
///
/// The result is as long as the longest array and each row has one slot per array,
/// [`None`] where that array is too short.
///
/// ```
/// use underbar::zip;
///
/// assert_eq!(
///     zip(&[&["a", "b", "c"][..], &["1", "2"]]),
///     [[Some(&"a"), Some(&"1")], [Some(&"b"), Some(&"2")], [Some(&"c"), None]],
/// );
/// ```
#[must_use]
pub fn zip<'a, T>(arrays: &[&'a [T]]) -> Vec<Vec<Option<&'a T>>> {
	let longest = reduce(arrays, |longest, array| longest.max(array.len()), 0);
	let mut zipped = vec![vec![None; arrays.len()]; longest];
	each(arrays, |array, &column, _| {
		each(*array, |element, &row, _| zipped[row][column] = Some(element))
	});
	zipped
}

/// Flattens `nested` depth-first into its leaves, left to right.
///
/// Nesting depth is only limited by memory, not by the call stack.
#[must_use]
pub fn flatten<T>(nested: &[Nested<T>]) -> Vec<&T> {
	let mut flat = Vec::new();
	let mut levels = vec![nested.iter()];
	while let Some(level) = levels.last_mut() {
		match level.next() {
			Some(Nested::Leaf(value)) => flat.push(value),
			Some(Nested::List(list)) => levels.push(list.iter()),
			None => drop(levels.pop()),
		}
	}
	flat
}

/// Returns the elements of the first array that occur in every other array, in their original order.
///
/// Duplicates in the first array are kept.
#[must_use]
pub fn intersection<'a, T: PartialEq>(arrays: &[&'a [T]]) -> Vec<&'a T> {
	let Some((&first, others)) = arrays.split_first() else {
		return Vec::new();
	};
	filter(first, |element| every(others, |other| contains(*other, element)))
}

/// Returns the elements of the first array that occur in none of the other arrays, in their original order.
///
/// Duplicates in the first array are kept.
#[must_use]
pub fn difference<'a, T: PartialEq>(arrays: &[&'a [T]]) -> Vec<&'a T> {
	let Some((&first, others)) = arrays.split_first() else {
		return Vec::new();
	};
	filter(first, |element| !some(others, |other| contains(*other, element)))
}

/// Returns every element of `collection` exactly once, in an order drawn from `rng`.
pub fn shuffle_with<'a, C, R>(collection: &'a C, rng: &mut R) -> Vec<&'a C::Item>
where
	C: ?Sized + Collection,
	R: ?Sized + Rng,
{
	map(collection, identity).tap_mut(|shuffled| shuffled.shuffle(rng))
}

/// Returns every element of `collection` exactly once, in random order.
///
/// This uses the thread-local generator. See [`shuffle_with`] to supply your own.
#[cfg(feature = "std")]
pub fn shuffle<C>(collection: &C) -> Vec<&C::Item>
where
	C: ?Sized + Collection,
{
	shuffle_with(collection, &mut rand::rng())
}

/// Returns the elements of `collection` sorted ascending by `key(element)`.
///
/// The sort is stable. **Elements with a falsy key ([`None`], `0`, `""`, …) go last**, in their original order.
/// This is kept for compatibility, so don't rely on `0` sorting first.
/// Incomparable keys are treated as equal.
///
/// ```
/// use underbar::sort_by;
///
/// let sorted = sort_by(&[3, 0, 1, 2], |n| *n);
/// assert_eq!(sorted, [&1, &2, &3, &0]);
/// ```
pub fn sort_by<'a, C, F, K>(collection: &'a C, mut key: F) -> Vec<&'a C::Item>
where
	C: ?Sized + Collection,
	F: FnMut(&'a C::Item) -> K,
	K: PartialOrd + Truthy,
{
	let mut keyed = Vec::new();
	let mut unkeyed = Vec::new();
	each(collection, |item, _, _| {
		let sort_key = key(item);
		if sort_key.is_truthy() {
			keyed.push((sort_key, item))
		} else {
			unkeyed.push(item)
		}
	});

	keyed.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
	keyed
		.into_iter()
		.map(|(_, item)| item)
		.chain(unkeyed)
		.collect()
}

/// Returns the elements of `collection` sorted ascending by their property `name`,
/// with the same rules as [`sort_by`]. Elements lacking the property go last.
pub fn sort_by_property<'a, C, Q>(collection: &'a C, name: &Q) -> Vec<&'a C::Item>
where
	C: ?Sized + Collection,
	C::Item: Property<Q>,
	<C::Item as Property<Q>>::Value: PartialOrd + Truthy,
	Q: ?Sized,
{
	sort_by(collection, |item| item.property(name))
}
