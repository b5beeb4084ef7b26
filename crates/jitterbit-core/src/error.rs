//! Error type for bit generation.

use std::fmt;

/// Error returned when a bit source cannot produce a bit.
///
/// A clock failure is fatal for the run that hit it: nothing retries, the
/// caller is expected to abort and report.
#[derive(Debug)]
pub enum EntropyError {
    /// The timer could not be read (e.g. the wall clock is set before the
    /// Unix epoch).
    ClockUnavailable(String),
    /// Writing generated values to a sink failed.
    Io(std::io::Error),
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClockUnavailable(reason) => write!(f, "clock unavailable: {reason}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EntropyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ClockUnavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for EntropyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
