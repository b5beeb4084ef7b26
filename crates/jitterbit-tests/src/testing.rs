//! Deterministic bit sources for exercising the evaluators.

use jitterbit_core::{BitSource, EntropyError, SourceInfo};

static CONSTANT_INFO: SourceInfo = SourceInfo {
    name: "constant",
    description: "Emits the same bit forever",
    physics: "None. Maximally biased reference stream.",
};

static COUNTING_INFO: SourceInfo = SourceInfo {
    name: "counting",
    description: "Emits a wrapping counter, high bit first",
    physics: "None. Visits every pattern of the configured width equally often.",
};

/// Always returns the same bit.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource {
    bit: u8,
}

impl ConstantSource {
    /// Any non-zero `bit` is treated as `1`.
    pub fn new(bit: u8) -> Self {
        Self {
            bit: u8::from(bit != 0),
        }
    }
}

impl BitSource for ConstantSource {
    fn info(&self) -> &SourceInfo {
        &CONSTANT_INFO
    }

    fn next_bit(&mut self) -> Result<u8, EntropyError> {
        Ok(self.bit)
    }
}

/// Emits `0, 1, 2, ... 2^width - 1, 0, ...`, each value as `width` bits,
/// most significant first.
///
/// Read back in groups of `width` bits, every pattern appears exactly once per
/// cycle, and group sums follow Binomial(width, 0.5) exactly.
#[derive(Debug, Clone)]
pub struct CountingSource {
    width: u32,
    value: u64,
    position: u32,
}

impl CountingSource {
    /// `width` is clamped to `1..=63`.
    pub fn new(width: u32) -> Self {
        Self {
            width: width.clamp(1, 63),
            value: 0,
            position: 0,
        }
    }
}

impl BitSource for CountingSource {
    fn info(&self) -> &SourceInfo {
        &COUNTING_INFO
    }

    fn next_bit(&mut self) -> Result<u8, EntropyError> {
        let shift = self.width - 1 - self.position;
        let bit = ((self.value >> shift) & 1) as u8;
        self.position += 1;
        if self.position == self.width {
            self.position = 0;
            self.value = (self.value + 1) & ((1u64 << self.width) - 1);
        }
        Ok(bit)
    }
}
