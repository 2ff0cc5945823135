//! Heights and the injected clock.
//!
//! A height is the monotonic counter of the host environment. The ledger
//! only ever compares against it, never advances it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A monotonic height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Height(pub u64);

impl Height {
    /// Height zero, where every clock starts.
    pub const ZERO: Self = Self(0);

    /// Create from a raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<u64> for Height {
    type Output = Height;

    fn add(self, rhs: u64) -> Height {
        Height(self.0 + rhs)
    }
}

impl From<u64> for Height {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Source of the current height.
///
/// Implementations must be non-decreasing. The ledger holds one clock and
/// consults it at every state-changing call; all reads within one logical
/// step observe the same height.
pub trait Clock {
    /// The current height.
    fn now(&self) -> Height;
}

/// A host-advanced clock backed by an atomic counter.
///
/// Cloning yields a handle to the same underlying counter, so a test or
/// host can advance the clock while the ledger holds its own handle.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    height: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock starting at height zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock starting at the given height.
    pub fn starting_at(height: Height) -> Self {
        Self {
            height: Arc::new(AtomicU64::new(height.value())),
        }
    }

    /// Advance the clock by `steps` heights.
    pub fn advance(&self, steps: u64) {
        self.height.fetch_add(steps, Ordering::SeqCst);
    }

    /// Move the clock to `height`. The clock never moves backwards.
    pub fn set(&self, height: Height) {
        self.height.fetch_max(height.value(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Height {
        Height(self.height.load(Ordering::SeqCst))
    }
}
