//! Error types for sequence operations.
//!
//! The only failure mode is asking an empty sequence for an element it does
//! not have: `head`, `tail` and `reduce` all need at least one element.

use static_assertions::assert_impl_all;

/// Represents an error raised by a sequence operation.
///
/// # Examples
///
/// ```rust
/// use seqfold::sequence::{SequenceError, head};
///
/// let empty: [i32; 0] = [];
/// assert_eq!(
///     head(&empty),
///     Err(SequenceError::InvalidArgument { operation: "head" })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The operation requires a non-empty sequence but received an empty one.
    InvalidArgument {
        /// The name of the operation that was refused.
        operation: &'static str,
    },
}

impl SequenceError {
    /// Creates the error reported when `operation` is applied to an empty sequence.
    #[inline]
    pub const fn empty_sequence(operation: &'static str) -> Self {
        Self::InvalidArgument { operation }
    }

    /// Returns the name of the operation that failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqfold::sequence::{SequenceError, tail};
    ///
    /// let empty: Vec<u8> = Vec::new();
    /// let error = tail(&empty).unwrap_err();
    /// assert_eq!(error.operation(), "tail");
    /// ```
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::InvalidArgument { operation } => *operation,
        }
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { operation } => write!(
                formatter,
                "invalid argument: {operation} requires a non-empty sequence"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

assert_impl_all!(SequenceError: Send, Sync, Copy, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("head")]
    #[case("tail")]
    #[case("reduce")]
    fn test_sequence_error_display(#[case] operation: &'static str) {
        let error = SequenceError::empty_sequence(operation);
        assert_eq!(
            format!("{error}"),
            format!("invalid argument: {operation} requires a non-empty sequence")
        );
    }

    #[rstest]
    fn test_sequence_error_operation() {
        let error = SequenceError::InvalidArgument { operation: "reduce" };
        assert_eq!(error.operation(), "reduce");
    }

    #[rstest]
    fn test_sequence_error_equality() {
        let error1 = SequenceError::empty_sequence("head");
        let error2 = SequenceError::InvalidArgument { operation: "head" };
        let error3 = SequenceError::empty_sequence("tail");
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[rstest]
    fn test_sequence_error_as_dyn_error() {
        let error: Box<dyn std::error::Error> = Box::new(SequenceError::empty_sequence("tail"));
        assert!(error.source().is_none());
        assert!(error.to_string().contains("tail"));
    }
}
