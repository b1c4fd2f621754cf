//! Functional list processing over immutable sequences.
//!
//! A sequence is any `&[A]`. The operations never mutate it: they return a
//! reference into it, a sub-slice of it, or a freshly computed value.
//!
//! - [`head`], [`tail`], [`uncons`]: decomposition; fail on empty input
//! - [`fold_left`], [`fold_right`], [`try_fold_left`]: folds seeded with an
//!   identity value; never fail on empty input
//! - [`reduce`]: a fold seeded with the first element; fails on empty input
//! - [`fold_map`], [`combine_all`], [`reduce_all`]: folds driven by
//!   [`Monoid`](crate::typeclass::Monoid) and
//!   [`Semigroup`](crate::typeclass::Semigroup) (requires `typeclass`)
//!
//! The same operations are available as methods through [`SequenceReducer`].
//!
//! # Replacing a loop
//!
//! ```rust
//! use seqfold::sequence::reduce;
//!
//! let numbers = [1, 2, 3, 4, 5];
//!
//! let mut total = 0;
//! for element in &numbers {
//!     total += element;
//! }
//!
//! assert_eq!(reduce(&numbers, |element, accumulator| element + accumulator), Ok(total));
//! ```

mod error;
mod ext;
mod reducer;

pub use error::SequenceError;
pub use ext::SequenceReducer;
pub use reducer::{fold_left, fold_right, head, reduce, tail, try_fold_left, uncons};

#[cfg(feature = "typeclass")]
pub use reducer::{combine_all, fold_map, reduce_all};
