//! Pure transforms over [`Collection`]s, all of them walking through [`each`].

use crate::{each, Collection, Error, Methods, Property, Truthy};
use alloc::{borrow::ToOwned, vec::Vec};
use tap::Pipe;

/// Returns the first element of `array`, iff there is one.
#[must_use]
pub fn first<T>(array: &[T]) -> Option<&T> {
	array.first()
}

/// Returns the first `min(n, array.len())` elements of `array`.
#[must_use]
pub fn first_n<T>(array: &[T], n: usize) -> &[T] {
	&array[..n.min(array.len())]
}

/// Returns the last element of `array`, iff there is one.
#[must_use]
pub fn last<T>(array: &[T]) -> Option<&T> {
	array.last()
}

/// Returns the last `min(n, array.len())` elements of `array`.
#[must_use]
pub fn last_n<T>(array: &[T], n: usize) -> &[T] {
	&array[array.len().saturating_sub(n)..]
}

/// Returns the index of the first element equal to `target`, iff any.
///
/// This always walks the whole array. Later matches don't replace the first one.
pub fn index_of<T: PartialEq>(array: &[T], target: &T) -> Option<usize> {
	let mut result = None;
	each(array, |item, &index, _| {
		if result.is_none() && item == target {
			result = Some(index)
		}
	});
	result
}

/// Returns the elements for which `predicate` is truthy, in their original order.
pub fn filter<'a, C, P, R>(collection: &'a C, mut predicate: P) -> Vec<&'a C::Item>
where
	C: ?Sized + Collection,
	P: FnMut(&'a C::Item) -> R,
	R: Truthy,
{
	let mut filtered = Vec::new();
	each(collection, |item, _, _| {
		if predicate(item).is_truthy() {
			filtered.push(item)
		}
	});
	filtered
}

/// Returns the elements for which `predicate` is falsy, in their original order.
pub fn reject<'a, C, P, R>(collection: &'a C, mut predicate: P) -> Vec<&'a C::Item>
where
	C: ?Sized + Collection,
	P: FnMut(&'a C::Item) -> R,
	R: Truthy,
{
	filter(collection, |item| predicate(item).is_falsy())
}

/// Returns the elements of `collection` without duplicates, keeping each first occurrence in place.
pub fn uniq<C>(collection: &C) -> Vec<&C::Item>
where
	C: ?Sized + Collection,
	C::Item: PartialEq,
{
	let mut unique: Vec<&C::Item> = Vec::new();
	each(collection, |element, _, _| {
		if !contains(&unique, &element) {
			unique.push(element)
		}
	});
	unique
}

/// Returns `f(element)` for each element, in order.
pub fn map<'a, C, F, U>(collection: &'a C, mut f: F) -> Vec<U>
where
	C: ?Sized + Collection,
	F: FnMut(&'a C::Item) -> U,
{
	let mut mapped = Vec::new();
	each(collection, |element, _, _| mapped.push(f(element)));
	mapped
}

/// Returns each element's property `key`, [`None`] where it is missing.
///
/// ```
/// use std::collections::BTreeMap;
/// use underbar::pluck;
///
/// let people = [
///     BTreeMap::from([("name", "moe"), ("age", "40")]),
///     BTreeMap::from([("name", "curly")]),
/// ];
/// assert_eq!(pluck(&people, "age"), [Some(&"40"), None]);
/// ```
pub fn pluck<'a, C, Q>(
	collection: &'a C,
	key: &Q,
) -> Vec<Option<&'a <C::Item as Property<Q>>::Value>>
where
	C: ?Sized + Collection,
	C::Item: Property<Q>,
	Q: ?Sized,
{
	map(collection, |element| element.property(key))
}

/// Calls `function(element, args)` for each element and returns the results in order.
///
/// See [`invoke_method`] to call a method by name instead.
pub fn invoke<'a, C, F, A, R>(collection: &'a C, mut function: F, args: &A) -> Vec<R>
where
	C: ?Sized + Collection,
	F: FnMut(&'a C::Item, &A) -> R,
	A: ?Sized,
{
	map(collection, |element| function(element, args))
}

/// Calls the method called `name` on each element with `args` and returns the results in order.
///
/// # Errors
///
/// [`Error::UnknownMethod`] for the first element that has no method called `name`.
pub fn invoke_method<C, A>(
	collection: &C,
	name: &str,
	args: &A,
) -> Result<Vec<<C::Item as Methods<A>>::Output>, Error>
where
	C: ?Sized + Collection,
	C::Item: Methods<A>,
	A: ?Sized,
{
	let mut invoked = Vec::new();
	let mut unknown = None;
	let mut position = 0;
	each(collection, |element, _, _| {
		if unknown.is_none() {
			match element.call_method(name, args) {
				Some(output) => invoked.push(output),
				None => unknown = Some(position),
			}
		}
		position += 1;
	});

	match unknown {
		None => Ok(invoked),
		Some(position) => Error::UnknownMethod {
			name: name.to_owned(),
			position,
		}
		.pipe(Err),
	}
}

/// Folds `collection` left to right, starting from `initial`.
///
/// ```
/// use underbar::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |total, number| total + number, 0), 6);
/// ```
pub fn reduce<'a, C, F, A>(collection: &'a C, mut f: F, initial: A) -> A
where
	C: ?Sized + Collection,
	F: FnMut(A, &'a C::Item) -> A,
{
	let mut total = Some(initial);
	each(collection, |item, _, _| {
		total = total.take().map(|total| f(total, item));
	});
	// Only a panic in `f` could leave this empty, and that unwinds past here.
	total.unwrap_or_else(|| unreachable!())
}

/// Folds `collection` left to right, seeding the accumulator with its first element.
///
/// `f` first sees the second element.
///
/// # Errors
///
/// [`Error::EmptyReduce`] iff `collection` is empty.
pub fn reduce_from_first<'a, C, F>(collection: &'a C, mut f: F) -> Result<C::Item, Error>
where
	C: ?Sized + Collection,
	C::Item: Clone,
	F: FnMut(C::Item, &'a C::Item) -> C::Item,
{
	reduce(
		collection,
		|total, item| match total {
			None => Some(item.clone()),
			Some(total) => Some(f(total, item)),
		},
		None,
	)
	.ok_or(Error::EmptyReduce)
}

/// Whether any element equals `target`.
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
	C: ?Sized + Collection,
	C::Item: PartialEq,
{
	reduce(
		collection,
		|was_found, item| was_found || item == target,
		false,
	)
}

/// Whether `predicate` is truthy for every element. `true` for empty collections.
///
/// Pass [`identity`](`crate::identity`) to test the elements themselves.
pub fn every<'a, C, P, R>(collection: &'a C, mut predicate: P) -> bool
where
	C: ?Sized + Collection,
	P: FnMut(&'a C::Item) -> R,
	R: Truthy,
{
	reduce(
		collection,
		|all_match, item| all_match && predicate(item).is_truthy(),
		true,
	)
}

/// Whether `predicate` is truthy for at least one element. `false` for empty collections.
///
/// Pass [`identity`](`crate::identity`) to test the elements themselves.
pub fn some<'a, C, P, R>(collection: &'a C, mut predicate: P) -> bool
where
	C: ?Sized + Collection,
	P: FnMut(&'a C::Item) -> R,
	R: Truthy,
{
	!every(collection, |item| predicate(item).is_falsy())
}
