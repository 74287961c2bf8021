#![warn(missing_docs)]
//! Tuples double as ordered sequences of differently typed values. This
//! crate supplies the operations such sequences otherwise lack because
//! iterators cannot walk them: visiting every element in order, folding
//! them into one value, extracting an element by compile-time position,
//! and routing an index only known at runtime to the matching element.
//!
//! All of them are defined for tuples of up to 16 elements.

mod apply;
mod argument;
mod arity;
mod fold;
mod truth;
mod visit;

pub use apply::*;
pub use argument::*;
pub use fold::*;
pub use truth::*;
pub use visit::*;
