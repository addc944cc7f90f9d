//! Eye open/closed state machine with drowsiness latch

use crate::analysis::EyeStatus;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lid state, tagged with the closure start time (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LidState {
    Open,
    ClosedSince(u64),
}

/// Tracks sustained eye closure and latches the drowsy flag.
///
/// The latch is one-shot: once set it is not re-evaluated against the dwell
/// threshold until the eyes reopen, and a single open-eye frame clears it.
#[derive(Debug, Clone)]
pub struct EyeStateTracker {
    lid: LidState,
    drowsy: bool,
    drowsy_after_ms: u64,
}

impl EyeStateTracker {
    pub fn new(drowsy_after_ms: u64) -> Self {
        Self {
            lid: LidState::Open,
            drowsy: false,
            drowsy_after_ms,
        }
    }

    /// Advance the machine one frame. `now_ms` must not decrease between
    /// calls.
    pub fn update(&mut self, closed: bool, now_ms: u64) {
        if closed {
            match self.lid {
                LidState::Open => self.lid = LidState::ClosedSince(now_ms),
                LidState::ClosedSince(start) => {
                    if !self.drowsy && now_ms - start > self.drowsy_after_ms {
                        debug!(closure_ms = now_ms - start, "drowsiness latch set");
                        self.drowsy = true;
                    }
                }
            }
        } else {
            // Edge-triggered re-arm: any open frame fully resets
            if self.drowsy {
                debug!("drowsiness latch cleared");
            }
            self.lid = LidState::Open;
            self.drowsy = false;
        }
    }

    pub fn is_drowsy(&self) -> bool {
        self.drowsy
    }

    pub fn lid(&self) -> LidState {
        self.lid
    }

    pub fn status(&self) -> EyeStatus {
        match self.lid {
            LidState::Open => EyeStatus::Open,
            LidState::ClosedSince(_) => EyeStatus::Closed,
        }
    }

    /// Forget any in-progress closure and clear the latch
    pub fn reset(&mut self) {
        self.lid = LidState::Open;
        self.drowsy = false;
    }
}
