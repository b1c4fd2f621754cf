//! Head/tail decomposition and folds over slices.
//!
//! Every fold here walks the slice with a cursor that is re-bound to the
//! remaining tail on each step. This is the tail-recursive
//! `fold(tail, combine(head, accumulator))` written as a loop, so stack
//! usage does not depend on the length of the sequence.
//!
//! Combining functions receive `(element, accumulator)` in that order.

use super::error::SequenceError;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Monoid, Semigroup};

#[inline]
fn split_head<'a, A>(
    sequence: &'a [A],
    operation: &'static str,
) -> Result<(&'a A, &'a [A]), SequenceError> {
    sequence
        .split_first()
        .ok_or(SequenceError::empty_sequence(operation))
}

/// Returns the first element of the sequence.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::head;
///
/// assert_eq!(head(&[1, 2, 3]), Ok(&1));
/// assert!(head::<i32>(&[]).is_err());
/// ```
pub fn head<A>(sequence: &[A]) -> Result<&A, SequenceError> {
    split_head(sequence, "head").map(|(first, _)| first)
}

/// Returns every element except the first, in order.
///
/// The result borrows from `sequence`; nothing is copied.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::tail;
///
/// assert_eq!(tail(&[1, 2, 3]), Ok(&[2, 3][..]));
/// assert_eq!(tail(&[1]), Ok(&[][..]));
/// ```
pub fn tail<A>(sequence: &[A]) -> Result<&[A], SequenceError> {
    split_head(sequence, "tail").map(|(_, rest)| rest)
}

/// Splits the sequence into its head and tail.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::uncons;
///
/// let (first, rest) = uncons(&["a", "b"]).unwrap();
/// assert_eq!(*first, "a");
/// assert_eq!(rest, ["b"]);
/// ```
pub fn uncons<A>(sequence: &[A]) -> Result<(&A, &[A]), SequenceError> {
    split_head(sequence, "uncons")
}

/// Folds the sequence from left to right, starting from `identity`.
///
/// `combine(element, accumulator)` produces the next accumulator. An empty
/// sequence returns `identity` unchanged.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::fold_left;
///
/// let sum = fold_left(&[1, 2, 3, 4, 5], 0, |element, accumulator| element + accumulator);
/// assert_eq!(sum, 15);
///
/// // Element type and accumulator type may differ.
/// let digits = fold_left(&[1, 2, 3], String::new(), |element, mut accumulator| {
///     accumulator.push_str(&element.to_string());
///     accumulator
/// });
/// assert_eq!(digits, "123");
/// ```
pub fn fold_left<A, B, F>(sequence: &[A], identity: B, mut combine: F) -> B
where
    F: FnMut(&A, B) -> B,
{
    let mut remaining = sequence;
    let mut accumulator = identity;
    while let Some((element, rest)) = remaining.split_first() {
        accumulator = combine(element, accumulator);
        remaining = rest;
    }
    accumulator
}

/// Folds the sequence from right to left, starting from `identity`.
///
/// The last element is combined first. An empty sequence returns
/// `identity` unchanged.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::fold_right;
///
/// let rebuilt = fold_right(&[1, 2, 3], Vec::new(), |element, mut accumulator| {
///     accumulator.push(*element);
///     accumulator
/// });
/// assert_eq!(rebuilt, vec![3, 2, 1]);
/// ```
pub fn fold_right<A, B, F>(sequence: &[A], identity: B, mut combine: F) -> B
where
    F: FnMut(&A, B) -> B,
{
    let mut remaining = sequence;
    let mut accumulator = identity;
    while let Some((element, rest)) = remaining.split_last() {
        accumulator = combine(element, accumulator);
        remaining = rest;
    }
    accumulator
}

/// Folds from left to right with a fallible combining function.
///
/// Stops at the first `Err` and returns it exactly as `combine` produced it.
/// Elements after the failing one are not visited.
///
/// # Errors
///
/// Returns the first error produced by `combine`.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::try_fold_left;
///
/// let checked = try_fold_left(&[100_u8, 100, 100], 0_u8, |element, accumulator| {
///     accumulator.checked_add(*element).ok_or("overflow")
/// });
/// assert_eq!(checked, Err("overflow"));
/// ```
pub fn try_fold_left<A, B, E, F>(sequence: &[A], identity: B, mut combine: F) -> Result<B, E>
where
    F: FnMut(&A, B) -> Result<B, E>,
{
    let mut remaining = sequence;
    let mut accumulator = identity;
    while let Some((element, rest)) = remaining.split_first() {
        accumulator = combine(element, accumulator)?;
        remaining = rest;
    }
    Ok(accumulator)
}

/// Reduces a non-empty sequence to a single value.
///
/// The first element seeds the accumulator and the rest are folded into it
/// from left to right, so the first call is `combine(&sequence[1], sequence[0])`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if the sequence is empty. The
/// check happens before `combine` is called or any element is cloned.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::reduce;
///
/// let numbers = [1, 2, 3, 4, 5];
/// assert_eq!(reduce(&numbers, |element, accumulator| element + accumulator), Ok(15));
/// assert_eq!(reduce(&numbers, |element, accumulator| element * accumulator), Ok(120));
/// ```
pub fn reduce<A, F>(sequence: &[A], combine: F) -> Result<A, SequenceError>
where
    A: Clone,
    F: FnMut(&A, A) -> A,
{
    let (first, rest) = split_head(sequence, "reduce")?;
    Ok(fold_left(rest, first.clone(), combine))
}

/// Maps every element into a monoid and combines the results left to right.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::fold_map;
/// use seqfold::typeclass::{Max, Sum};
///
/// let words = ["fold", "reduce", "tail"];
/// assert_eq!(fold_map(&words, |word| Sum(word.len())), Sum(14));
/// assert_eq!(fold_map(&words, |word| Max(word.len())), Max(6));
/// ```
#[cfg(feature = "typeclass")]
pub fn fold_map<A, M, F>(sequence: &[A], mut function: F) -> M
where
    M: Monoid,
    F: FnMut(&A) -> M,
{
    fold_left(sequence, M::empty(), |element, accumulator| {
        accumulator.combine(function(element))
    })
}

/// Combines every element with the monoid operation, left to right.
///
/// Returns `M::empty()` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::combine_all;
/// use seqfold::typeclass::Product;
///
/// assert_eq!(combine_all(&[Product(2), Product(3), Product(4)]), Product(24));
/// assert_eq!(combine_all::<Product<i32>>(&[]), Product(1));
/// ```
#[cfg(feature = "typeclass")]
pub fn combine_all<M>(sequence: &[M]) -> M
where
    M: Monoid + Clone,
{
    fold_left(sequence, M::empty(), |element, accumulator| {
        accumulator.combine(element.clone())
    })
}

/// Combines every element with the semigroup operation, left to right.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if the sequence is empty, since
/// a semigroup has no identity element to fall back on.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::reduce_all;
///
/// let parts = [String::from("fold"), String::from("Left")];
/// assert_eq!(reduce_all(&parts), Ok(String::from("foldLeft")));
/// ```
#[cfg(feature = "typeclass")]
pub fn reduce_all<S>(sequence: &[S]) -> Result<S, SequenceError>
where
    S: Semigroup + Clone,
{
    let (first, rest) = split_head(sequence, "reduce_all")?;
    Ok(fold_left(rest, first.clone(), |element, accumulator| {
        accumulator.combine(element.clone())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn head_of_single_element() {
        assert_eq!(head(&[42]), Ok(&42));
    }

    #[rstest]
    fn tail_borrows_from_input() {
        let numbers = vec![1, 2, 3];
        let rest = tail(&numbers).unwrap();
        assert!(std::ptr::eq(rest.as_ptr(), numbers[1..].as_ptr()));
    }

    #[rstest]
    #[case::head(head::<u8>(&[]).map(|_| ()), "head")]
    #[case::tail(tail::<u8>(&[]).map(|_| ()), "tail")]
    #[case::uncons(uncons::<u8>(&[]).map(|_| ()), "uncons")]
    fn empty_sequence_names_operation(
        #[case] result: Result<(), SequenceError>,
        #[case] operation: &'static str,
    ) {
        assert_eq!(result, Err(SequenceError::empty_sequence(operation)));
    }

    #[rstest]
    fn fold_left_visits_elements_in_order() {
        let visited = fold_left(&['a', 'b', 'c'], Vec::new(), |element, mut accumulator| {
            accumulator.push(*element);
            accumulator
        });
        assert_eq!(visited, vec!['a', 'b', 'c']);
    }

    #[rstest]
    fn fold_left_passes_element_before_accumulator() {
        let result = fold_left(&[10], 1, |element, accumulator| element - accumulator);
        assert_eq!(result, 9);
    }

    #[rstest]
    fn fold_right_of_empty_returns_identity() {
        assert_eq!(fold_right::<i32, _, _>(&[], 7, |element, accumulator| element + accumulator), 7);
    }

    #[rstest]
    fn try_fold_left_stops_at_first_error() {
        let calls = Cell::new(0);
        let result: Result<i32, String> = try_fold_left(&[1, 2, 3, 4], 0, |element, accumulator| {
            calls.set(calls.get() + 1);
            if *element == 2 {
                Err(format!("rejected {element}"))
            } else {
                Ok(accumulator + element)
            }
        });
        assert_eq!(result, Err(String::from("rejected 2")));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn reduce_seeds_with_first_element() {
        let mut calls = Vec::new();
        let result = reduce(&[1, 2, 3], |element, accumulator| {
            calls.push((*element, accumulator));
            element + accumulator
        });
        assert_eq!(result, Ok(6));
        assert_eq!(calls, vec![(2, 1), (3, 3)]);
    }

    #[rstest]
    fn reduce_of_single_element_skips_combine() {
        let result = reduce(&[5], |_, _| unreachable!("combine must not run"));
        assert_eq!(result, Ok(5));
    }

    #[rstest]
    fn reduce_of_empty_fails_before_combine() {
        let calls = Cell::new(0);
        let result = reduce::<i32, _>(&[], |element, accumulator| {
            calls.set(calls.get() + 1);
            element + accumulator
        });
        assert_eq!(result, Err(SequenceError::empty_sequence("reduce")));
        assert_eq!(calls.get(), 0);
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn reduce_all_of_empty_fails() {
        assert_eq!(
            reduce_all::<String>(&[]),
            Err(SequenceError::empty_sequence("reduce_all"))
        );
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn combine_all_keeps_left_to_right_order() {
        let words = [String::from("a"), String::from("b"), String::from("c")];
        assert_eq!(combine_all(&words), "abc");
    }
}
