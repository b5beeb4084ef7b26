//! Error type for statistical evaluations.

use std::fmt;

use jitterbit_core::EntropyError;

#[derive(Debug)]
pub enum EvalError {
    /// The run was asked to evaluate zero trials or bits.
    EmptyRun,
    /// A parameter is outside the range the evaluator supports.
    InvalidParameter { name: &'static str, value: u64 },
    /// A histogram was incremented outside `0..size`. Always a logic error.
    BucketOutOfRange { bucket: usize, size: usize },
    /// The underlying bit source failed.
    Source(EntropyError),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRun => write!(f, "count must be at least 1"),
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid value {value} for {name}")
            }
            Self::BucketOutOfRange { bucket, size } => {
                write!(f, "histogram bucket {bucket} out of range (size {size})")
            }
            Self::Source(e) => write!(f, "bit source failed: {e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EntropyError> for EvalError {
    fn from(e: EntropyError) -> Self {
        Self::Source(e)
    }
}
