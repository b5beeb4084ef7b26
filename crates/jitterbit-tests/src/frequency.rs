//! Raw 0/1 frequency of a bit stream.

use jitterbit_core::BitSource;
use serde::Serialize;

use crate::error::EvalError;

/// Counts and percentages of ones and zeros over `n` bits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyResult {
    pub n: usize,
    pub ones: usize,
    pub zeros: usize,
    pub ones_pct: f64,
    pub zeros_pct: f64,
}

impl FrequencyResult {
    /// Build from raw counts. Fails when both counts are zero.
    pub fn from_counts(ones: usize, zeros: usize) -> Result<Self, EvalError> {
        let n = ones + zeros;
        if n == 0 {
            return Err(EvalError::EmptyRun);
        }
        Ok(Self {
            n,
            ones,
            zeros,
            ones_pct: 100.0 * ones as f64 / n as f64,
            zeros_pct: 100.0 * zeros as f64 / n as f64,
        })
    }
}

/// Frequency (monobit proportion) evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyEvaluator;

impl FrequencyEvaluator {
    /// Draw `n` bits from `source` and count them. `n` must be ≥ 1.
    pub fn evaluate<S: BitSource + ?Sized>(
        &self,
        source: &mut S,
        n: usize,
    ) -> Result<FrequencyResult, EvalError> {
        if n == 0 {
            return Err(EvalError::EmptyRun);
        }
        log::debug!("frequency: {n} bits from {}", source.name());
        let mut ones = 0usize;
        for _ in 0..n {
            if source.next_bit()? == 1 {
                ones += 1;
            }
        }
        FrequencyResult::from_counts(ones, n - ones)
    }
}
