//! Chi-squared test over bit-sum histograms.
//!
//! Each trial sums `num_bits` fresh bits into a value in `0..=num_bits`. Over
//! `N` trials the histogram of sums should follow Binomial(num_bits, 0.5).
//! The statistic `Σ (expected - observed)² / expected` grows as the fit
//! worsens. The p-value is reported for reference; nothing here decides
//! pass or fail.

use jitterbit_core::BitSource;
use log::debug;
use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::binomial::ExpectedDistribution;
use crate::error::EvalError;
use crate::histogram::Histogram;

/// Bits summed per trial.
pub const DEFAULT_NUM_BITS: u32 = 20;

/// `Σ (e - o)² / e` over paired buckets. Buckets with `e <= 0` contribute 0.
pub fn chi_squared_statistic(observed: &[u64], expected: &[f64]) -> f64 {
    observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| {
            if e > 0.0 {
                let diff = e - o as f64;
                diff * diff / e
            } else {
                0.0
            }
        })
        .sum()
}

/// Upper-tail probability of `statistic` under chi-squared with
/// `degrees_of_freedom`. `None` when there are no degrees of freedom.
pub fn chi_squared_p_value(statistic: f64, degrees_of_freedom: usize) -> Option<f64> {
    if degrees_of_freedom == 0 || !statistic.is_finite() {
        return None;
    }
    ChiSquared::new(degrees_of_freedom as f64)
        .ok()
        .map(|dist| dist.sf(statistic))
}

/// Outcome of one chi-squared run.
#[derive(Debug, Clone, Serialize)]
pub struct ChiSquaredResult {
    pub trials: usize,
    pub num_bits: u32,
    pub statistic: f64,
    pub p_value: Option<f64>,
    pub observed: Vec<u64>,
    pub expected: Vec<f64>,
}

/// Bit-sum chi-squared evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChiSquaredEvaluator {
    num_bits: u32,
}

impl Default for ChiSquaredEvaluator {
    fn default() -> Self {
        Self {
            num_bits: DEFAULT_NUM_BITS,
        }
    }
}

impl ChiSquaredEvaluator {
    /// Evaluator summing `num_bits` bits per trial. `num_bits` must be ≥ 1.
    pub fn new(num_bits: u32) -> Result<Self, EvalError> {
        if num_bits == 0 {
            return Err(EvalError::InvalidParameter {
                name: "num_bits",
                value: 0,
            });
        }
        Ok(Self { num_bits })
    }

    pub fn num_bits(&self) -> u32 {
        self.num_bits
    }

    /// Run `trials` trials against `source`.
    pub fn evaluate<S: BitSource + ?Sized>(
        &self,
        source: &mut S,
        trials: usize,
    ) -> Result<ChiSquaredResult, EvalError> {
        if trials == 0 {
            return Err(EvalError::EmptyRun);
        }
        let expected = ExpectedDistribution::binomial(trials, self.num_bits)?;
        let sparse = expected.counts().iter().filter(|&&e| e < 5.0).count();
        debug!(
            "chi-squared: {trials} trials of {} bits from {}, {sparse} bucket(s) expect < 5",
            self.num_bits,
            source.name()
        );

        let mut histogram = Histogram::for_bit_sums(self.num_bits);
        for _ in 0..trials {
            let sum = source.sum_bits(self.num_bits)?;
            histogram.increment(sum as usize)?;
        }

        let statistic = chi_squared_statistic(histogram.counts(), expected.counts());
        let degrees = expected.informative_buckets().saturating_sub(1);
        Ok(ChiSquaredResult {
            trials,
            num_bits: self.num_bits,
            statistic,
            p_value: chi_squared_p_value(statistic, degrees),
            observed: histogram.counts().to_vec(),
            expected: expected.counts().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ConstantSource, CountingSource};

    #[test]
    fn statistic_of_exact_match_is_zero() {
        assert_eq!(chi_squared_statistic(&[1, 3, 3, 1], &[1.0, 3.0, 3.0, 1.0]), 0.0);
    }

    #[test]
    fn statistic_known_value() {
        // (10-6)^2/10 + (10-14)^2/10 = 3.2
        let s = chi_squared_statistic(&[6, 14], &[10.0, 10.0]);
        assert!((s - 3.2).abs() < 1e-12);
    }

    #[test]
    fn zero_expected_contributes_nothing() {
        let s = chi_squared_statistic(&[5, 0, 3], &[5.0, 0.0, 3.0]);
        assert_eq!(s, 0.0);
        let s = chi_squared_statistic(&[5, 2], &[5.0, 0.0]);
        assert!(s.is_finite());
        assert_eq!(s, 0.0);
    }

    #[test]
    fn p_value_bounds() {
        assert_eq!(chi_squared_p_value(1.0, 0), None);
        let p = chi_squared_p_value(0.0, 20).unwrap();
        assert!((p - 1.0).abs() < 1e-12);
        let p = chi_squared_p_value(1e6, 20).unwrap();
        assert!(p < 1e-12);
    }

    #[test]
    fn rejects_zero_bits_and_zero_trials() {
        assert!(matches!(
            ChiSquaredEvaluator::new(0),
            Err(EvalError::InvalidParameter { name: "num_bits", .. })
        ));
        let err = ChiSquaredEvaluator::default()
            .evaluate(&mut ConstantSource::new(1), 0)
            .unwrap_err();
        assert!(matches!(err, EvalError::EmptyRun));
    }

    #[test]
    fn exact_binomial_stream_scores_zero() {
        // Counting 0..8 in 3-bit groups visits every sum exactly C(3, k) times.
        let eval = ChiSquaredEvaluator::new(3).unwrap();
        let result = eval.evaluate(&mut CountingSource::new(3), 8).unwrap();
        assert_eq!(result.observed, vec![1, 3, 3, 1]);
        assert!(result.statistic.abs() < 1e-9, "chi2 = {}", result.statistic);
        assert!(result.p_value.unwrap() > 0.99);
    }

    #[test]
    fn exact_binomial_stream_many_cycles() {
        let eval = ChiSquaredEvaluator::new(4).unwrap();
        let result = eval.evaluate(&mut CountingSource::new(4), 16 * 50).unwrap();
        assert_eq!(result.observed, vec![50, 200, 300, 200, 50]);
        assert!(result.statistic.abs() < 1e-9);
    }

    #[test]
    fn constant_stream_scores_badly() {
        let eval = ChiSquaredEvaluator::default();
        let result = eval.evaluate(&mut ConstantSource::new(1), 100).unwrap();
        assert_eq!(result.observed[20], 100);
        assert_eq!(result.observed.iter().sum::<u64>(), 100);
        assert!(result.statistic.is_finite());
        assert!(result.statistic > 1000.0);
        assert!(result.p_value.unwrap() < 1e-6);
    }

    #[test]
    fn result_shapes() {
        let eval = ChiSquaredEvaluator::default();
        let result = eval.evaluate(&mut ConstantSource::new(0), 10).unwrap();
        assert_eq!(result.trials, 10);
        assert_eq!(result.num_bits, 20);
        assert_eq!(result.observed.len(), 21);
        assert_eq!(result.expected.len(), 21);
        assert!(result.statistic >= 0.0);
    }
}
