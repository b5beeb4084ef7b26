//! Expected bucket counts for a run of trials.

use serde::Serialize;
use statrs::distribution::{Binomial, Discrete};

use crate::error::EvalError;

/// Real-valued expected count per bucket for `trials` trials.
///
/// Counts stay unrounded for the statistic; [`rounded`](Self::rounded) is for
/// display only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectedDistribution {
    trials: usize,
    counts: Vec<f64>,
}

impl ExpectedDistribution {
    /// Binomial(num_bits, 0.5) masses scaled by `trials`.
    ///
    /// Bucket `k` holds `trials * C(num_bits, k) / 2^num_bits`. The masses come
    /// from `statrs`, which evaluates them in log space, so there is no
    /// factorial overflow for any `num_bits`.
    pub fn binomial(trials: usize, num_bits: u32) -> Result<Self, EvalError> {
        let dist = Binomial::new(0.5, u64::from(num_bits)).map_err(|_| {
            EvalError::InvalidParameter {
                name: "num_bits",
                value: u64::from(num_bits),
            }
        })?;
        let counts = (0..=u64::from(num_bits))
            .map(|k| trials as f64 * dist.pmf(k))
            .collect();
        Ok(Self { trials, counts })
    }

    /// `trials / buckets` in every bucket.
    pub fn uniform(trials: usize, buckets: usize) -> Self {
        let each = if buckets == 0 {
            0.0
        } else {
            trials as f64 / buckets as f64
        };
        Self {
            trials,
            counts: vec![each; buckets],
        }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Counts rounded to the nearest integer, for display.
    pub fn rounded(&self) -> Vec<u64> {
        self.counts.iter().map(|c| c.round() as u64).collect()
    }

    /// Sum of the expected counts; equals `trials` up to float error.
    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Buckets with a positive expectation. Only these carry information.
    pub fn informative_buckets(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0.0).count()
    }
}
