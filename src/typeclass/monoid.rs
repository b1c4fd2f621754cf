//! Monoid type class - semigroups with an identity element.
//!
//! A monoid's identity element is a safe seed for `fold_left`: folding an
//! empty sequence returns it, and folding a non-empty one gives the same
//! result as `reduce`.
//!
//! # Laws
//!
//! For all `a` of type `T` (in addition to the Semigroup laws):
//!
//! ```text
//! T::empty().combine(a) == a    // left identity
//! a.combine(T::empty()) == a    // right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqfold::typeclass::{Monoid, Product, Semigroup, Sum};
//!
//! assert_eq!(Sum::<i32>::empty(), Sum(0));
//! assert_eq!(Product::<i32>::empty(), Product(1));
//! assert_eq!(String::empty().combine(String::from("tail")), "tail");
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use seqfold::typeclass::{Min, Monoid};
///
/// assert_eq!(Min::<u8>::empty(), Min(u8::MAX));
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

/// `Default` supplies zero for the numeric types.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::min_value())
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::max_value())
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}
