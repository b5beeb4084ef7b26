//! Fixed-size occurrence histogram.

use serde::Serialize;

use crate::error::EvalError;

/// Counts per bucket, all starting at zero.
///
/// The sum of all counts always equals the number of successful
/// [`increment`](Histogram::increment) calls since creation or the last
/// [`reset`](Histogram::reset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    pub fn new(size: usize) -> Self {
        Self {
            counts: vec![0; size],
        }
    }

    /// `num_bits + 1` buckets, one per possible number of ones.
    pub fn for_bit_sums(num_bits: u32) -> Self {
        Self::new(num_bits as usize + 1)
    }

    /// `2^pattern_len` buckets, one per pattern.
    pub fn for_patterns(pattern_len: u32) -> Self {
        Self::new(1usize << pattern_len)
    }

    /// Add one occurrence to `bucket`.
    pub fn increment(&mut self, bucket: usize) -> Result<(), EvalError> {
        let size = self.counts.len();
        let slot = self
            .counts
            .get_mut(bucket)
            .ok_or(EvalError::BucketOutOfRange { bucket, size })?;
        *slot += 1;
        Ok(())
    }

    /// Zero every bucket.
    pub fn reset(&mut self) {
        self.counts.fill(0);
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn get(&self, bucket: usize) -> Option<u64> {
        self.counts.get(bucket).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total recorded occurrences.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
