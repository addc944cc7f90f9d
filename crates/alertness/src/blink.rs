//! Blink detection and the rolling blink-rate window

use tracing::debug;

/// Closure phase for blink timing, independent of the drowsiness tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    Idle,
    ClosedSince(u64),
}

/// Counts completed blinks (short closures) over a rolling window.
///
/// A closure strictly shorter than `blink_max_ms` counts as one blink when
/// the eyes reopen; sustained closures never count. The count resets when
/// `now` moves strictly past the window end, and the new window starts at
/// the triggering frame's `now`.
#[derive(Debug, Clone)]
pub struct BlinkRateAccumulator {
    phase: BlinkPhase,
    count: u32,
    window_start: Option<u64>,
    blink_max_ms: u64,
    window_ms: u64,
    max_per_window: u32,
}

impl BlinkRateAccumulator {
    pub fn new(blink_max_ms: u64, window_ms: u64, max_per_window: u32) -> Self {
        Self {
            phase: BlinkPhase::Idle,
            count: 0,
            window_start: None,
            blink_max_ms,
            window_ms,
            max_per_window,
        }
    }

    /// Roll the window if `now_ms` has moved past its end.
    ///
    /// Called once per frame before the count is read. The first call pins
    /// the window start to the session's first frame.
    pub fn roll_window(&mut self, now_ms: u64) {
        let start = *self.window_start.get_or_insert(now_ms);
        if now_ms - start > self.window_ms {
            debug!(blinks = self.count, "blink window rolled over");
            self.count = 0;
            self.window_start = Some(now_ms);
        }
    }

    /// Advance blink tracking one frame
    pub fn update(&mut self, closed: bool, now_ms: u64) {
        if closed {
            if self.phase == BlinkPhase::Idle {
                self.phase = BlinkPhase::ClosedSince(now_ms);
            }
        } else if let BlinkPhase::ClosedSince(start) = self.phase {
            if now_ms - start < self.blink_max_ms {
                self.count += 1;
                debug!(blinks = self.count, "blink counted");
            }
            self.phase = BlinkPhase::Idle;
        }
    }

    /// Completed blinks in the current window
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether the blink rate forces the drowsy flag
    pub fn rate_exceeded(&self) -> bool {
        self.count > self.max_per_window
    }

    /// Abandon an in-progress closure (face lost mid-closure)
    pub fn cancel_closure(&mut self) {
        self.phase = BlinkPhase::Idle;
    }
}
