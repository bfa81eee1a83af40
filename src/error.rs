use alloc::string::String;
use thiserror::Error;

/// Caller mistakes this crate reports instead of leaving unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// [`reduce_from_first`](`crate::reduce_from_first`) was given an empty collection,
	/// so there is no element to seed the accumulator with.
	#[error("reduce of an empty collection without an initial value")]
	EmptyReduce,

	/// [`invoke_method`](`crate::invoke_method`) found an element without the requested method.
	#[error("element {position} has no method named `{name}`")]
	UnknownMethod {
		/// The requested method name.
		name: String,
		/// Position of the offending element in iteration order.
		position: usize,
	},
}
