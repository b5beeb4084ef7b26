//! Timer primitives shared by timing-based sources.

use std::sync::OnceLock;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::error::EntropyError;
use crate::source::ClockKind;

// ---------------------------------------------------------------------------
// Timer abstraction
// ---------------------------------------------------------------------------

/// A clock readable in microseconds.
///
/// Readings are only ever subtracted from each other, so the origin does not
/// matter.
pub trait Timer {
    /// Current reading in microseconds.
    fn now_micros(&mut self) -> Result<i64, EntropyError>;
}

/// The system clock selected by [`ClockKind`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimer {
    kind: ClockKind,
}

impl SystemTimer {
    pub fn new(kind: ClockKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ClockKind {
        self.kind
    }
}

impl Timer for SystemTimer {
    fn now_micros(&mut self) -> Result<i64, EntropyError> {
        match self.kind {
            ClockKind::Monotonic => Ok(monotonic_micros()),
            ClockKind::Wall => wall_subsec_micros(),
        }
    }
}

// ---------------------------------------------------------------------------
// Clock reads
// ---------------------------------------------------------------------------

/// Microseconds since a process-local epoch, from `Instant`.
pub fn monotonic_micros() -> i64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_micros() as i64
}

/// Microsecond field (0..1_000_000) of the current wall-clock time.
///
/// Fails if the system clock reads earlier than the Unix epoch.
pub fn wall_subsec_micros() -> Result<i64, EntropyError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| EntropyError::ClockUnavailable(e.to_string()))?;
    Ok(i64::from(now.subsec_micros()))
}

/// Block the calling thread for `wait`. A zero wait returns immediately.
pub fn pause(wait: Duration) {
    if !wait.is_zero() {
        std::thread::sleep(wait);
    }
}
