//! Bit source implementations.

pub mod helpers;

pub mod clock_jitter;

pub use clock_jitter::{ClockJitterSampler, DEFAULT_WAIT};
