//! Method syntax for the sequence operations.

use super::error::SequenceError;
use super::reducer;

/// Sequence operations as methods on slices.
///
/// Implemented for `[A]`, so `Vec<A>`, arrays and boxed slices reach it
/// through auto-deref. Each method delegates to the free function of the
/// same name in [`crate::sequence`].
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::SequenceReducer;
///
/// let numbers = vec![1, 2, 3, 4, 5];
///
/// assert_eq!(numbers.head(), Ok(&1));
/// assert_eq!(numbers.tail().map(<[i32]>::len), Ok(4));
/// assert_eq!(numbers.fold_left(0, |element, accumulator| element + accumulator), 15);
/// assert_eq!(numbers.reduce(|element, accumulator| element * accumulator), Ok(120));
/// ```
pub trait SequenceReducer {
    /// The element type of the sequence.
    type Element;

    /// See [`head`](crate::sequence::head).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the sequence is empty.
    fn head(&self) -> Result<&Self::Element, SequenceError>;

    /// See [`tail`](crate::sequence::tail).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the sequence is empty.
    fn tail(&self) -> Result<&[Self::Element], SequenceError>;

    /// See [`uncons`](crate::sequence::uncons).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the sequence is empty.
    fn uncons(&self) -> Result<(&Self::Element, &[Self::Element]), SequenceError>;

    /// See [`fold_left`](crate::sequence::fold_left).
    fn fold_left<B, F>(&self, identity: B, combine: F) -> B
    where
        F: FnMut(&Self::Element, B) -> B;

    /// See [`fold_right`](crate::sequence::fold_right).
    fn fold_right<B, F>(&self, identity: B, combine: F) -> B
    where
        F: FnMut(&Self::Element, B) -> B;

    /// See [`try_fold_left`](crate::sequence::try_fold_left).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `combine`.
    fn try_fold_left<B, E, F>(&self, identity: B, combine: F) -> Result<B, E>
    where
        F: FnMut(&Self::Element, B) -> Result<B, E>;

    /// See [`reduce`](crate::sequence::reduce).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the sequence is empty.
    fn reduce<F>(&self, combine: F) -> Result<Self::Element, SequenceError>
    where
        Self::Element: Clone,
        F: FnMut(&Self::Element, Self::Element) -> Self::Element;
}

impl<A> SequenceReducer for [A] {
    type Element = A;

    #[inline]
    fn head(&self) -> Result<&A, SequenceError> {
        reducer::head(self)
    }

    #[inline]
    fn tail(&self) -> Result<&[A], SequenceError> {
        reducer::tail(self)
    }

    #[inline]
    fn uncons(&self) -> Result<(&A, &[A]), SequenceError> {
        reducer::uncons(self)
    }

    #[inline]
    fn fold_left<B, F>(&self, identity: B, combine: F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        reducer::fold_left(self, identity, combine)
    }

    #[inline]
    fn fold_right<B, F>(&self, identity: B, combine: F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        reducer::fold_right(self, identity, combine)
    }

    #[inline]
    fn try_fold_left<B, E, F>(&self, identity: B, combine: F) -> Result<B, E>
    where
        F: FnMut(&A, B) -> Result<B, E>,
    {
        reducer::try_fold_left(self, identity, combine)
    }

    #[inline]
    fn reduce<F>(&self, combine: F) -> Result<A, SequenceError>
    where
        Self::Element: Clone,
        F: FnMut(&A, A) -> A,
    {
        reducer::reduce(self, combine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn methods_work_on_arrays() {
        let letters = ['x', 'y', 'z'];
        assert_eq!(letters.head(), Ok(&'x'));
        assert_eq!(letters.tail(), Ok(&['y', 'z'][..]));
    }

    #[rstest]
    fn methods_work_on_vec_through_deref() {
        let numbers: Vec<u64> = (1..=5).collect();
        assert_eq!(numbers.reduce(|element, accumulator| element + accumulator), Ok(15));
    }

    #[rstest]
    fn empty_vec_reduce_fails() {
        let numbers: Vec<u64> = Vec::new();
        assert_eq!(
            numbers.reduce(|element, accumulator| element + accumulator),
            Err(SequenceError::empty_sequence("reduce"))
        );
    }

    #[rstest]
    fn uncons_method_matches_head_and_tail() {
        let numbers = [3, 1, 4];
        let (first, rest) = numbers.uncons().unwrap();
        assert_eq!(Ok(first), numbers.head());
        assert_eq!(Ok(rest), numbers.tail());
    }
}
