//! Scripting-language-style truthiness.

use alloc::{boxed::Box, string::String, vec::Vec};

/// Boolean coercion the way dynamically typed languages usually do it.
///
/// `false`, numeric zero, `NaN`, the empty string and absent values ([`None`], `()`) are falsy.
/// Everything else, including empty sequences, is truthy.
///
/// Predicates throughout this crate may return any [`Truthy`] type, [`bool`] included.
pub trait Truthy {
	/// Whether this value counts as `true` in a boolean context.
	fn is_truthy(&self) -> bool;

	/// The negation of [`Truthy::is_truthy`].
	fn is_falsy(&self) -> bool {
		!self.is_truthy()
	}
}

impl Truthy for bool {
	fn is_truthy(&self) -> bool {
		*self
	}
}

macro_rules! integers {
	($($t:ty),*$(,)?) => {$(
		impl Truthy for $t {
			fn is_truthy(&self) -> bool {
				*self != 0
			}
		}
	)*};
}
integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! floats {
	($($t:ty),*$(,)?) => {$(
		impl Truthy for $t {
			fn is_truthy(&self) -> bool {
				*self != 0.0 && !self.is_nan()
			}
		}
	)*};
}
floats!(f32, f64);

impl Truthy for str {
	fn is_truthy(&self) -> bool {
		!self.is_empty()
	}
}

impl Truthy for String {
	fn is_truthy(&self) -> bool {
		!self.is_empty()
	}
}

impl Truthy for () {
	fn is_truthy(&self) -> bool {
		false
	}
}

impl<T: Truthy> Truthy for Option<T> {
	fn is_truthy(&self) -> bool {
		matches!(self, Some(value) if value.is_truthy())
	}
}

impl<T> Truthy for [T] {
	fn is_truthy(&self) -> bool {
		true
	}
}

impl<T> Truthy for Vec<T> {
	fn is_truthy(&self) -> bool {
		true
	}
}

impl<T: ?Sized + Truthy> Truthy for &T {
	fn is_truthy(&self) -> bool {
		(**self).is_truthy()
	}
}

impl<T: ?Sized + Truthy> Truthy for &mut T {
	fn is_truthy(&self) -> bool {
		(**self).is_truthy()
	}
}

impl<T: ?Sized + Truthy> Truthy for Box<T> {
	fn is_truthy(&self) -> bool {
		(**self).is_truthy()
	}
}
