//! Request sequencing for overlapping status fetches.
//!
//! Each status request is tagged with a sequence number when it is issued.
//! Responses may complete in any order; [`SequenceGuard`] only lets through
//! a response that is newer than the last one applied to the display.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues strictly increasing sequence numbers, starting at 1.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
}

impl RequestSequencer {
    /// Create a new sequencer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    /// Reserve the next sequence number.
    pub fn next(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Highest sequence number issued so far (0 if none).
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Acquire)
    }
}

/// Tracks the sequence number of the snapshot currently on display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceGuard {
    last_applied: u64,
}

impl SequenceGuard {
    /// Create a guard that has applied nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self { last_applied: 0 }
    }

    /// Whether a response tagged `seq` would be applied.
    #[must_use]
    pub fn is_fresh(&self, seq: u64) -> bool {
        seq > self.last_applied
    }

    /// Record `seq` as applied if it is fresh. Returns whether it was.
    pub fn admit(&mut self, seq: u64) -> bool {
        if self.is_fresh(seq) {
            self.last_applied = seq;
            true
        } else {
            false
        }
    }

    /// Sequence number of the snapshot on display (0 if none).
    #[must_use]
    pub fn last_applied(&self) -> u64 {
        self.last_applied
    }
}
