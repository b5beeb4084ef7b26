//! 3-bit permutation (pattern) test.
//!
//! Each repetition reads `N` non-overlapping 3-bit patterns, high bit first,
//! so the bits `1, 0, 0` decode to pattern 4 (`"100"`). Every one of the 8
//! patterns should appear `N / 8` times. A chi-squared statistic is computed
//! per repetition and all of them are reported; they are not aggregated.

use jitterbit_core::BitSource;
use log::debug;
use serde::Serialize;

use crate::binomial::ExpectedDistribution;
use crate::chi_squared::{chi_squared_p_value, chi_squared_statistic};
use crate::error::EvalError;
use crate::histogram::Histogram;

/// Bits per pattern.
pub const PATTERN_BITS: u32 = 3;
/// Distinct patterns, `2^PATTERN_BITS`.
pub const PATTERN_COUNT: usize = 1 << PATTERN_BITS;
/// Repetitions per evaluation.
pub const DEFAULT_REPETITIONS: usize = 10;

/// Read one pattern from `source`, high bit first.
pub fn read_pattern<S: BitSource + ?Sized>(source: &mut S) -> Result<usize, EvalError> {
    let mut pattern = 0usize;
    for _ in 0..PATTERN_BITS {
        pattern = (pattern << 1) | usize::from(source.next_bit()?);
    }
    Ok(pattern)
}

/// Binary label of a pattern, e.g. `5` → `"101"`.
pub fn pattern_label(pattern: usize) -> String {
    format!("{pattern:0width$b}", width = PATTERN_BITS as usize)
}

/// Outcome of a permutation evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct PermutationResult {
    /// Patterns read per repetition.
    pub n: usize,
    /// `N / 8`.
    pub expected_per_pattern: f64,
    /// One statistic per repetition.
    pub statistics: Vec<f64>,
    pub p_values: Vec<Option<f64>>,
    /// Observed counts per repetition, indexed by pattern value.
    pub observed: Vec<Vec<u64>>,
}

/// 3-bit pattern evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationEvaluator {
    repetitions: usize,
}

impl Default for PermutationEvaluator {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl PermutationEvaluator {
    /// Evaluator running `repetitions` independent repetitions (≥ 1).
    pub fn new(repetitions: usize) -> Result<Self, EvalError> {
        if repetitions == 0 {
            return Err(EvalError::InvalidParameter {
                name: "repetitions",
                value: 0,
            });
        }
        Ok(Self { repetitions })
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Read `n` patterns per repetition from `source`.
    pub fn evaluate<S: BitSource + ?Sized>(
        &self,
        source: &mut S,
        n: usize,
    ) -> Result<PermutationResult, EvalError> {
        if n == 0 {
            return Err(EvalError::EmptyRun);
        }
        debug!(
            "permutation: {} repetitions of {n} patterns from {}",
            self.repetitions,
            source.name()
        );
        let expected = ExpectedDistribution::uniform(n, PATTERN_COUNT);
        let degrees = PATTERN_COUNT - 1;

        let mut histogram = Histogram::for_patterns(PATTERN_BITS);
        let mut statistics = Vec::with_capacity(self.repetitions);
        let mut p_values = Vec::with_capacity(self.repetitions);
        let mut observed = Vec::with_capacity(self.repetitions);

        for _ in 0..self.repetitions {
            histogram.reset();
            for _ in 0..n {
                histogram.increment(read_pattern(source)?)?;
            }
            let statistic = chi_squared_statistic(histogram.counts(), expected.counts());
            statistics.push(statistic);
            p_values.push(chi_squared_p_value(statistic, degrees));
            observed.push(histogram.counts().to_vec());
        }

        Ok(PermutationResult {
            n,
            expected_per_pattern: n as f64 / PATTERN_COUNT as f64,
            statistics,
            p_values,
            observed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ConstantSource, CountingSource};

    #[test]
    fn labels() {
        assert_eq!(pattern_label(0), "000");
        assert_eq!(pattern_label(4), "100");
        assert_eq!(pattern_label(7), "111");
    }

    #[test]
    fn reads_high_bit_first() {
        let mut src = CountingSource::new(3);
        for want in 0..8 {
            assert_eq!(read_pattern(&mut src).unwrap(), want);
        }
        assert_eq!(read_pattern(&mut src).unwrap(), 0);
    }

    #[test]
    fn ten_statistics_by_default() {
        let r = PermutationEvaluator::default()
            .evaluate(&mut CountingSource::new(3), 80)
            .unwrap();
        assert_eq!(r.statistics.len(), 10);
        assert_eq!(r.p_values.len(), 10);
        assert_eq!(r.observed.len(), 10);
        assert_eq!(r.expected_per_pattern, 10.0);
    }

    #[test]
    fn uniform_stream_scores_zero_every_repetition() {
        let r = PermutationEvaluator::default()
            .evaluate(&mut CountingSource::new(3), 800)
            .unwrap();
        for (stat, counts) in r.statistics.iter().zip(&r.observed) {
            assert_eq!(*stat, 0.0);
            assert!(counts.iter().all(|&c| c == 100));
        }
    }

    #[test]
    fn repetitions_start_from_zero() {
        // Counts must not carry over between repetitions.
        let r = PermutationEvaluator::new(4)
            .unwrap()
            .evaluate(&mut ConstantSource::new(1), 50)
            .unwrap();
        for counts in &r.observed {
            assert_eq!(counts.len(), PATTERN_COUNT);
            assert_eq!(counts[7], 50);
            assert_eq!(counts.iter().sum::<u64>(), 50);
        }
        // All 50 in one bucket of 8: 7 * 6.25 + (50 - 6.25)^2 / 6.25 = 350
        for stat in &r.statistics {
            assert!((stat - 350.0).abs() < 1e-9);
        }
    }

    #[test]
    fn observed_sums_equal_n_for_odd_n() {
        let r = PermutationEvaluator::default()
            .evaluate(&mut CountingSource::new(5), 13)
            .unwrap();
        for counts in &r.observed {
            assert_eq!(counts.iter().sum::<u64>(), 13);
        }
        assert!(r.statistics.iter().all(|s| *s >= 0.0 && s.is_finite()));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            PermutationEvaluator::default().evaluate(&mut ConstantSource::new(0), 0),
            Err(EvalError::EmptyRun)
        ));
        assert!(PermutationEvaluator::new(0).is_err());
    }
}
