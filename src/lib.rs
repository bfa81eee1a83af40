//! Collection iteration, transformation and function-decoration primitives.
//!
//! Everything here is built on a single walking primitive, [`each`], over the [`Collection`] capability,
//! which sequences (`[T]`, [`Vec`]) and key/value mappings ([`BTreeMap`](`alloc::collections::BTreeMap`),
//! and `HashMap` with the `"std"` feature) share.
//!
//! # Collections
//!
//! Selections ([`filter`], [`uniq`], [`sort_by`], …) return [`Vec`]s of references into their input.
//! Equality is [`PartialEq`] and predicates may return anything [`Truthy`], which mirrors the usual
//! scripting-language notion of truthiness (`0`, `""`, [`None`] and friends are falsy).
//!
//! # Decorators
//!
//! [`once`], [`memoize`] and [`throttle`] wrap a function into a handle that owns its state.
//! [`throttle`] and [`delay`] don't keep time themselves: they read a [`Clock`] and hand deferred calls to a [`Scheduler`].
//! [`TimerQueue`] is a minimal scheduler you can drive yourself, for example with a [`ManualClock`].
//!
//! ```
//! use core::time::Duration;
//! use underbar::{throttle, ManualClock, TimerQueue};
//!
//! let clock = ManualClock::new();
//! let timers = TimerQueue::new(clock.clone());
//! let throttled = throttle(|x: i32| x * 2, Duration::from_millis(100), clock.clone(), timers.clone());
//!
//! assert_eq!(throttled.call(1), 2);
//! assert_eq!(throttled.call(2), 2); // Deferred to the end of the window.
//!
//! clock.advance(Duration::from_millis(100));
//! assert_eq!(timers.run_due(), 1);
//! assert_eq!(throttled.last(), Some(4));
//! ```
#![no_std]
#![doc(html_root_url = "https://docs.rs/underbar/0.0.1")]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::semicolon_if_nothing_returned)]

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
mod readme {}

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod advanced;
mod clock;
mod collection;
mod error;
mod memoize;
mod merge;
mod once;
mod property;
mod throttle;
mod timer;
mod transforms;
mod truthy;

pub use advanced::{
	difference, flatten, intersection, shuffle_with, sort_by, sort_by_property, zip, Nested,
};
#[cfg(feature = "std")]
pub use advanced::shuffle;
pub use clock::{Clock, ManualClock};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use collection::{each, identity, Collection};
pub use error::Error;
pub use memoize::{memoize, Memoize};
pub use merge::{defaults, extend, Object};
pub use once::{once, Once};
pub use property::{Methods, Property};
pub use throttle::{throttle, Throttle};
pub use timer::{delay, Scheduler, TimerQueue};
pub use transforms::{
	contains, every, filter, first, first_n, index_of, invoke, invoke_method, last, last_n, map,
	pluck, reduce, reduce_from_first, reject, some, uniq,
};
pub use truthy::Truthy;
