//! Loops Sample Application
//!
//! Imperative accumulator loops kept side by side with their `seqfold`
//! counterparts. Both loops hard-code the operation (addition) together with
//! the iteration, and both mutate a local accumulator; `reduce` and
//! `fold_left` take the operation as an argument instead.

use seqfold::sequence::{SequenceError, combine_all, fold_left, reduce};
use seqfold::typeclass::Sum;

/// Sums the elements with an index-based loop.
#[allow(clippy::needless_range_loop)]
pub fn imperative_sum_indexed(numbers: &[i64]) -> i64 {
    let mut accumulator = 0;
    for index in 0..numbers.len() {
        accumulator += numbers[index];
    }
    accumulator
}

/// Sums the elements with a for-each loop.
pub fn imperative_sum_each(numbers: &[i64]) -> i64 {
    let mut accumulator = 0;
    for element in numbers {
        accumulator += element;
    }
    accumulator
}

/// One line of demo output: a label and the value it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// How the value was computed.
    pub label: &'static str,
    /// The computed value.
    pub value: i64,
}

/// Runs every variant of the computation over `numbers`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `numbers` is empty, because
/// `reduce` has no element to seed its accumulator with.
pub fn run_all(numbers: &[i64]) -> Result<Vec<Outcome>, SequenceError> {
    let reduced_sum = reduce(numbers, |element, accumulator| element + accumulator)?;
    let reduced_product = reduce(numbers, |element, accumulator| element * accumulator)?;
    let wrapped: Vec<Sum<i64>> = numbers.iter().copied().map(Sum).collect();

    let outcomes = vec![
        Outcome {
            label: "imperative loop (index)",
            value: imperative_sum_indexed(numbers),
        },
        Outcome {
            label: "imperative loop (for-each)",
            value: imperative_sum_each(numbers),
        },
        Outcome {
            label: "reduce (+)",
            value: reduced_sum,
        },
        Outcome {
            label: "reduce (*)",
            value: reduced_product,
        },
        Outcome {
            label: "fold_left (+, 0)",
            value: fold_left(numbers, 0, |element, accumulator| element + accumulator),
        },
        Outcome {
            label: "combine_all (Sum)",
            value: combine_all(&wrapped).into_inner(),
        },
    ];

    for outcome in &outcomes {
        tracing::debug!(label = outcome.label, value = outcome.value, "computed");
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn run_all_on_one_to_five() {
        let values: Vec<i64> = run_all(&[1, 2, 3, 4, 5])
            .unwrap()
            .into_iter()
            .map(|outcome| outcome.value)
            .collect();
        assert_eq!(values, vec![15, 15, 15, 120, 15, 15]);
    }

    #[rstest]
    fn run_all_on_empty_fails() {
        assert_eq!(run_all(&[]), Err(SequenceError::empty_sequence("reduce")));
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[7], 7)]
    #[case(&[1, -1, 2, -2], 0)]
    fn imperative_loops_agree(#[case] numbers: &[i64], #[case] expected: i64) {
        assert_eq!(imperative_sum_indexed(numbers), expected);
        assert_eq!(imperative_sum_each(numbers), expected);
    }

    proptest! {
        #[test]
        fn prop_loops_match_reduce(numbers in prop::collection::vec(-1_000_i64..1_000, 1..50)) {
            let reduced = reduce(&numbers, |element, accumulator| element + accumulator);
            prop_assert_eq!(Ok(imperative_sum_indexed(&numbers)), reduced);
            prop_assert_eq!(Ok(imperative_sum_each(&numbers)), reduced);
        }
    }
}
