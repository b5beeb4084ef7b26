//! Clock jitter sampler: one bit per timed sleep.
//!
//! Each sample reads the timer, sleeps for a fixed short wait (10 µs by
//! default), and reads the timer again. The measured elapsed time (the
//! "variance" of the sleep) is compared with the one measured on the previous
//! call: a different value yields `1`, an identical value yields `0`.
//!
//! The actual sleep is dominated by scheduler wake-up latency and timer
//! interrupt granularity, typically one to two orders of magnitude longer than
//! the requested wait, so consecutive measurements rarely repeat.

use std::time::Duration;

use log::trace;

use crate::error::EntropyError;
use crate::source::{BitSource, ClockKind, SourceInfo};
use crate::sources::helpers::{self, SystemTimer, Timer};

/// Requested sleep per sample.
pub const DEFAULT_WAIT: Duration = Duration::from_micros(10);

static CLOCK_JITTER_INFO: SourceInfo = SourceInfo {
    name: "clock_jitter",
    description: "Change detector over the measured duration of a short sleep",
    physics: "Times a fixed short sleep with a microsecond clock. The elapsed time \
              is set by OS scheduler wake-up latency, timer interrupt coalescing, \
              cache and pipeline state, and DVFS. Emits 1 when the measurement \
              differs from the previous one and 0 when it repeats.",
};

/// Stateful clock jitter sampler.
///
/// Owns the last measured variance. One instance per logical generator;
/// sharing one between callers would interleave their comparisons.
pub struct ClockJitterSampler<T: Timer = SystemTimer> {
    timer: T,
    wait: Duration,
    last_variance: i64,
    samples_taken: u64,
}

impl ClockJitterSampler {
    /// Sampler over the system clock of the given kind.
    pub fn new(clock: ClockKind, wait: Duration) -> Self {
        Self::with_timer(SystemTimer::new(clock), wait)
    }
}

impl Default for ClockJitterSampler {
    fn default() -> Self {
        Self::new(ClockKind::default(), DEFAULT_WAIT)
    }
}

impl<T: Timer> ClockJitterSampler<T> {
    /// Sampler over an arbitrary timer.
    pub fn with_timer(timer: T, wait: Duration) -> Self {
        Self {
            timer,
            wait,
            last_variance: 0,
            samples_taken: 0,
        }
    }

    /// Measure one sleep and report whether its duration changed.
    ///
    /// `last_variance` is overwritten on every call, whatever the returned bit.
    pub fn sample(&mut self) -> Result<u8, EntropyError> {
        let start = self.timer.now_micros()?;
        helpers::pause(self.wait);
        let stop = self.timer.now_micros()?;

        let variance = stop - start;
        let bit = u8::from(variance != self.last_variance);
        trace!(
            "clock_jitter: variance={variance} last={} bit={bit}",
            self.last_variance
        );

        self.last_variance = variance;
        self.samples_taken += 1;
        Ok(bit)
    }

    /// Elapsed time measured by the most recent sample (0 before the first).
    pub fn last_variance(&self) -> i64 {
        self.last_variance
    }

    /// Number of samples taken so far.
    pub fn samples_taken(&self) -> u64 {
        self.samples_taken
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<T: Timer> BitSource for ClockJitterSampler<T> {
    fn info(&self) -> &SourceInfo {
        &CLOCK_JITTER_INFO
    }

    fn next_bit(&mut self) -> Result<u8, EntropyError> {
        self.sample()
    }
}
