//! # jitterbit-core
//!
//! Single-bit entropy extraction from CPU/OS timing jitter.
//!
//! ## Quick Start
//!
//! ```no_run
//! use jitterbit_core::{BitGenerator, BitSource, GeneratorConfig};
//!
//! let mut generator = BitGenerator::new(&GeneratorConfig::default());
//! let bit = generator.next_bit().unwrap();
//! assert!(bit <= 1);
//! ```
//!
//! ## Architecture
//!
//! Timer → [`ClockJitterSampler`] (did the sleep duration change?) → XOR PRNG
//! bit → [`BitGenerator`] → consumers
//!
//! Every producer implements the [`BitSource`] trait. Statistical evaluators
//! and the file [`sink`] accept any `BitSource`, so tests can swap in
//! deterministic sources.
//!
//! This is a best-effort, teaching-grade extractor. It is **not** a CSPRNG and
//! must not be used for key material.

pub mod error;
pub mod generator;
pub mod sink;
pub mod source;
pub mod sources;

pub use error::EntropyError;
pub use generator::{BitGenerator, GeneratorConfig};
pub use sink::{DEFAULT_BITS_PER_VALUE, write_bit_sums, write_bit_sums_to_path};
pub use source::{BitSource, ClockKind, SourceInfo};
pub use sources::clock_jitter::{ClockJitterSampler, DEFAULT_WAIT};
pub use sources::helpers::{SystemTimer, Timer};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
