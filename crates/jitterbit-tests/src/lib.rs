//! Statistical tests for single-bit streams.
//!
//! Three evaluators consume any [`jitterbit_core::BitSource`]:
//!
//! - [`ChiSquaredEvaluator`]: histogram of `num_bits`-bit sums against
//!   Binomial(num_bits, 0.5)
//! - [`FrequencyEvaluator`]: proportion of ones and zeros
//! - [`PermutationEvaluator`]: 3-bit pattern counts against a uniform
//!   expectation, one statistic per repetition
//!
//! All statistics are descriptive. Larger chi-squared values mean a worse
//! fit; the accompanying p-values are informational and no evaluator makes
//! a pass/fail call.

pub mod binomial;
pub mod chi_squared;
pub mod error;
pub mod frequency;
pub mod histogram;
pub mod permutation;
pub mod testing;

pub use binomial::ExpectedDistribution;
pub use chi_squared::{
    ChiSquaredEvaluator, ChiSquaredResult, DEFAULT_NUM_BITS, chi_squared_p_value,
    chi_squared_statistic,
};
pub use error::EvalError;
pub use frequency::{FrequencyEvaluator, FrequencyResult};
pub use histogram::Histogram;
pub use permutation::{
    DEFAULT_REPETITIONS, PATTERN_BITS, PATTERN_COUNT, PermutationEvaluator, PermutationResult,
    pattern_label, read_pattern,
};
