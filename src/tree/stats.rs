//! Tree operation statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for the operations a tree has performed.
///
/// All fields are atomic so the read-only paths (`find`) can count through
/// a shared reference. `Ordering::Relaxed` everywhere: the counters only
/// need atomicity, not synchronization with each other.
#[derive(Debug)]
pub struct TreeStats {
    /// Number of insert calls.
    pub inserts: AtomicU64,

    /// Number of node splits (including root splits).
    pub splits: AtomicU64,

    /// Number of times the root itself split. Each one raised the tree's
    /// height by exactly 1.
    pub root_splits: AtomicU64,

    /// Number of find calls.
    pub finds: AtomicU64,

    /// Number of finds that located their key.
    pub found: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            inserts: AtomicU64::new(0),
            splits: AtomicU64::new(0),
            root_splits: AtomicU64::new(0),
            finds: AtomicU64::new(0),
            found: AtomicU64::new(0),
        }
    }

    /// Fraction of finds that succeeded (0.0 to 1.0).
    pub fn found_rate(&self) -> f64 {
        let finds = self.finds.load(Ordering::Relaxed);
        if finds == 0 {
            0.0
        } else {
            self.found.load(Ordering::Relaxed) as f64 / finds as f64
        }
    }

    /// Get a snapshot of current statistics.
    ///
    /// This returns a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            splits: self.splits.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
            finds: self.finds.load(Ordering::Relaxed),
            found: self.found.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.splits.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
        self.finds.store(0, Ordering::Relaxed);
        self.found.store(0, Ordering::Relaxed);
    }
}

impl Default for TreeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of tree statistics.
///
/// Unlike `TreeStats`, this is not atomic and can be safely printed,
/// compared, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub inserts: u64,
    pub splits: u64,
    pub root_splits: u64,
    pub finds: u64,
    pub found: u64,
}

impl StatsSnapshot {
    /// Fraction of finds that succeeded (0.0 to 1.0).
    pub fn found_rate(&self) -> f64 {
        if self.finds == 0 {
            0.0
        } else {
            self.found as f64 / self.finds as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, splits: {}, root_splits: {}, found_rate: {:.2}% }}",
            self.inserts,
            self.splits,
            self.root_splits,
            self.found_rate() * 100.0
        )
    }
}
