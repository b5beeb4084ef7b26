//! Abstract bit source trait and clock selection.
//!
//! Every producer of single bits implements the [`BitSource`] trait, which
//! provides metadata via [`SourceInfo`] and one-bit-at-a-time collection.
//! Evaluators are generic over it, so a deterministic source can stand in for
//! the jitter sampler.

use crate::error::EntropyError;

/// Which timer a jitter sampler reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockKind {
    /// `std::time::Instant`. Never goes backwards.
    #[default]
    Monotonic,
    /// Sub-second microseconds of `SystemTime`. The difference of two
    /// readings goes negative when a second boundary falls inside the wait.
    Wall,
}

impl std::fmt::Display for ClockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monotonic => write!(f, "monotonic"),
            Self::Wall => write!(f, "wall"),
        }
    }
}

/// Metadata about a bit source.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// Unique identifier (e.g. `"clock_jitter"`).
    pub name: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
    /// Explanation of where the unpredictability comes from.
    pub physics: &'static str,
}

/// Trait that every bit source must implement.
///
/// Sources are stateful and take `&mut self`; a source must not be shared
/// between threads. Give each thread its own instance instead.
pub trait BitSource {
    /// Source metadata.
    fn info(&self) -> &SourceInfo;

    /// Produce one bit, `0` or `1`.
    fn next_bit(&mut self) -> Result<u8, EntropyError>;

    /// Convenience: name from info.
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Sum `count` freshly generated bits. The result lies in `0..=count`.
    fn sum_bits(&mut self, count: u32) -> Result<u32, EntropyError> {
        let mut sum = 0u32;
        for _ in 0..count {
            sum += u32::from(self.next_bit()?);
        }
        Ok(sum)
    }
}

impl<S: BitSource + ?Sized> BitSource for &mut S {
    fn info(&self) -> &SourceInfo {
        (**self).info()
    }

    fn next_bit(&mut self) -> Result<u8, EntropyError> {
        (**self).next_bit()
    }
}

impl<S: BitSource + ?Sized> BitSource for Box<S> {
    fn info(&self) -> &SourceInfo {
        (**self).info()
    }

    fn next_bit(&mut self) -> Result<u8, EntropyError> {
        (**self).next_bit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ALTERNATING_INFO: SourceInfo = SourceInfo {
        name: "alternating",
        description: "0, 1, 0, 1, ...",
        physics: "none",
    };

    struct Alternating(u8);

    impl BitSource for Alternating {
        fn info(&self) -> &SourceInfo {
            &ALTERNATING_INFO
        }

        fn next_bit(&mut self) -> Result<u8, EntropyError> {
            let bit = self.0;
            self.0 ^= 1;
            Ok(bit)
        }
    }

    #[test]
    fn sum_bits_counts_ones() {
        let mut src = Alternating(0);
        assert_eq!(src.sum_bits(10).unwrap(), 5);
        assert_eq!(src.sum_bits(0).unwrap(), 0);
    }

    #[test]
    fn boxed_source_forwards() {
        let mut src: Box<dyn BitSource> = Box::new(Alternating(1));
        assert_eq!(src.name(), "alternating");
        assert_eq!(src.next_bit().unwrap(), 1);
        assert_eq!(src.next_bit().unwrap(), 0);
    }

    #[test]
    fn clock_kind_display() {
        assert_eq!(ClockKind::Monotonic.to_string(), "monotonic");
        assert_eq!(ClockKind::Wall.to_string(), "wall");
        assert_eq!(ClockKind::default(), ClockKind::Monotonic);
    }
}
