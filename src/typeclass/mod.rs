//! Type classes for combining values.
//!
//! - [`Semigroup`]: an associative `combine`, the shape of a `reduce` step
//! - [`Monoid`]: a `Semigroup` with an identity element, the shape of a
//!   `fold_left` seed
//! - [`Sum`], [`Product`], [`Max`], [`Min`]: wrappers that pick the
//!   combining function for a value type

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
