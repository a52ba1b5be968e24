//! Operation tracing.
//!
//! Every public cipher operation runs inside [`instrument`], which is the only
//! place the crate logs. Only sizes are reported; key material and message
//! content never reach the log.

use crate::error::OperationResult;
use crate::KeyPair;
use log::{debug, error, info};
use std::time::Instant;

/// Size reported for an operation's successful output.
pub trait Measured {
    fn measured_len(&self) -> usize;
}

impl Measured for String {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

impl Measured for KeyPair {
    fn measured_len(&self) -> usize {
        self.public_key.len() + self.private_key.len()
    }
}

/// Runs `body`, logging input sizes on entry, result size and elapsed time on
/// success, and the classified error on failure. The result is returned
/// untouched.
pub fn instrument<T, F>(operation: &str, inputs: &[(&str, usize)], body: F) -> OperationResult<T>
where
    T: Measured,
    F: FnOnce() -> OperationResult<T>,
{
    debug!("{} started: {}", operation, format_metrics(inputs));
    let start = Instant::now();
    let result = body();
    let elapsed = start.elapsed();

    match &result {
        Ok(value) => info!(
            "{} completed: result_len={} elapsed_us={}",
            operation,
            value.measured_len(),
            elapsed.as_micros()
        ),
        Err(err) => error!(
            "{} failed after {}us: kind={:?} {}",
            operation,
            elapsed.as_micros(),
            err.kind(),
            err
        ),
    }

    result
}

fn format_metrics(inputs: &[(&str, usize)]) -> String {
    inputs
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}
