//! XOR of the clock jitter bit with a pseudo-random bit.
//!
//! The jitter bit alone is biased toward `1` (consecutive sleep measurements
//! usually differ). XORing it with the low bit of a conventional PRNG
//! removes that first-order bias while keeping the timing signal in the
//! stream. The PRNG is seeded from the OS and is deliberately not
//! reproducible.

use std::time::Duration;

use rand::RngCore;
use rand::rngs::ThreadRng;

use crate::error::EntropyError;
use crate::source::{BitSource, ClockKind, SourceInfo};
use crate::sources::clock_jitter::{ClockJitterSampler, DEFAULT_WAIT};

static GENERATOR_INFO: SourceInfo = SourceInfo {
    name: "jitter_xor_prng",
    description: "Clock jitter bit XOR low bit of a thread-local PRNG",
    physics: "Combines the clock jitter change detector with a pseudo-random bit. \
              The PRNG is periodic but the jitter stream is not, so the XOR of \
              the two cannot be predicted from either alone.",
};

/// Configuration for a [`BitGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Timer the jitter sampler reads.
    pub clock: ClockKind,
    /// Requested sleep per sample.
    pub wait: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            clock: ClockKind::Monotonic,
            wait: DEFAULT_WAIT,
        }
    }
}

/// One bit per call: `sampler bit ^ (prng & 1)`.
pub struct BitGenerator<S: BitSource = ClockJitterSampler, R: RngCore = ThreadRng> {
    sampler: S,
    rng: R,
}

impl BitGenerator {
    /// Generator over the system clock described by `config`.
    pub fn new(config: &GeneratorConfig) -> Self {
        log::debug!(
            "bit generator: clock={} wait={:?}",
            config.clock,
            config.wait
        );
        Self::with_parts(ClockJitterSampler::new(config.clock, config.wait), rand::rng())
    }
}

impl Default for BitGenerator {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl<S: BitSource, R: RngCore> BitGenerator<S, R> {
    /// Generator over an arbitrary jitter source and PRNG.
    pub fn with_parts(sampler: S, rng: R) -> Self {
        Self { sampler, rng }
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Give back the underlying source and PRNG.
    pub fn into_parts(self) -> (S, R) {
        (self.sampler, self.rng)
    }
}

impl<S: BitSource, R: RngCore> BitSource for BitGenerator<S, R> {
    fn info(&self) -> &SourceInfo {
        &GENERATOR_INFO
    }

    fn next_bit(&mut self) -> Result<u8, EntropyError> {
        let jitter = self.sampler.next_bit()?;
        let prng = (self.rng.next_u32() & 1) as u8;
        Ok(jitter ^ prng)
    }
}
