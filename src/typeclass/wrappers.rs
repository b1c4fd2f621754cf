//! Newtype wrappers that select a combining function for a value type.
//!
//! The same integer can be folded by addition or by multiplication; the
//! wrapper decides which `Semigroup` and `Monoid` instance applies.
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: maximum (identity: [`Bounded::min_value`])
//! - [`Min`]: minimum (identity: [`Bounded::max_value`])

/// Additive wrapper: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
///
/// # Examples
///
/// ```rust
/// use seqfold::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// Multiplicative wrapper: `Product(a).combine(Product(b)) == Product(a * b)`.
///
/// # Examples
///
/// ```rust
/// use seqfold::typeclass::{Product, Semigroup};
///
/// assert_eq!(Product::new(3).combine(Product::new(5)), Product(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Product<A>(pub A);

/// Wrapper that keeps the larger of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Max<A>(pub A);

/// Wrapper that keeps the smaller of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Min<A>(pub A);

macro_rules! impl_wrapper {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<A> $wrapper<A> {
                /// Wraps the given value.
                #[inline]
                pub const fn new(value: A) -> Self {
                    Self(value)
                }

                /// Consumes the wrapper and returns the inner value.
                #[inline]
                pub fn into_inner(self) -> A {
                    self.0
                }
            }

            impl<A> From<A> for $wrapper<A> {
                #[inline]
                fn from(value: A) -> Self {
                    Self(value)
                }
            }
        )*
    };
}

impl_wrapper!(Sum, Product, Max, Min);

// =============================================================================
// Bounded
// =============================================================================

/// Types with a smallest and a largest value.
///
/// `Max` and `Min` need these bounds as their identity elements.
///
/// # Examples
///
/// ```rust
/// use seqfold::typeclass::Bounded;
///
/// assert_eq!(<u8 as Bounded>::min_value(), 0);
/// assert_eq!(<i8 as Bounded>::max_value(), 127);
/// ```
pub trait Bounded {
    /// The smallest value of the type.
    fn min_value() -> Self;

    /// The largest value of the type.
    fn max_value() -> Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                #[inline]
                fn min_value() -> Self {
                    Self::MIN
                }

                #[inline]
                fn max_value() -> Self {
                    Self::MAX
                }
            }
        )*
    };
}

impl_bounded!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);
