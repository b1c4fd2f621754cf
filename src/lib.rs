//! # seqfold
//!
//! Functional list-processing idioms for Rust: `head`, `tail`, `fold_left`
//! and `reduce` over ordered, immutable sequences, as an alternative to
//! hand-written accumulator loops.
//!
//! ## Overview
//!
//! - **Sequence**: head/tail decomposition and left/right folds over slices,
//!   available both as free functions and as methods via [`SequenceReducer`](sequence::SequenceReducer)
//! - **Type Classes**: `Semigroup` and `Monoid`, plus the `Sum`, `Product`,
//!   `Max` and `Min` wrappers that name common combining functions
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence operations (head, tail, fold, reduce)
//! - `typeclass`: Semigroup and Monoid type classes
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqfold::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(reduce(&numbers, |element, accumulator| element + accumulator), Ok(15));
//! assert_eq!(numbers.reduce(|element, accumulator| element * accumulator), Ok(120));
//! assert_eq!(fold_left(&numbers, 0, |element, accumulator| element + accumulator), 15);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use seqfold::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "sequence")]
pub mod sequence;
