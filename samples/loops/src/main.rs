//! Loops Sample Application Entry Point
//!
//! Prints the same computation done with imperative loops and with
//! `seqfold`'s reduce/fold, then shows the empty-sequence failure mode.

use std::process::ExitCode;

use loops::run_all;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let numbers: Vec<i64> = vec![1, 2, 3, 4, 5];
    tracing::info!(?numbers, "Running loop samples");

    match run_all(&numbers) {
        Ok(outcomes) => {
            for outcome in outcomes {
                println!("{:<28} {}", outcome.label, outcome.value);
            }
        }
        Err(error) => {
            tracing::error!("Sample run failed: {error}");
            return ExitCode::FAILURE;
        }
    }

    match run_all(&[]) {
        Ok(_) => tracing::error!("reduce over an empty sequence unexpectedly succeeded"),
        Err(error) => tracing::warn!("Empty sequence rejected as expected: {error}"),
    }

    ExitCode::SUCCESS
}
