//! Alertness configuration

use serde::{Deserialize, Serialize};

/// Tunable thresholds for the alertness pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertnessConfig {
    /// EAR below this means eyes closed
    pub ear_threshold: f32,

    /// Continuous closure beyond this latches the drowsy flag (milliseconds)
    pub drowsy_after_ms: u64,

    /// Closures strictly shorter than this count as blinks (milliseconds)
    pub blink_max_ms: u64,

    /// Blink count above this forces the drowsy flag
    pub max_blinks_per_minute: u32,

    /// Rolling blink window length (milliseconds)
    pub rate_window_ms: u64,

    /// Mouth-offset smoothing window size (frames)
    pub smoothing_window: usize,

    /// Smoothed mouth offset above this classifies as Happy
    pub smile_threshold: f32,

    /// Smoothed mouth offset below this classifies as Sad
    pub frown_threshold: f32,

    /// Clear the drowsy latch and any in-progress closure when the face
    /// leaves the frame
    pub reset_on_face_loss: bool,

    /// Drop smoothing samples when the face leaves the frame
    pub clear_smoothing_on_face_loss: bool,
}

impl Default for AlertnessConfig {
    fn default() -> Self {
        Self {
            ear_threshold: 0.25,
            drowsy_after_ms: 500,
            blink_max_ms: 300,
            max_blinks_per_minute: 35,
            rate_window_ms: 60_000,
            smoothing_window: 5,
            smile_threshold: 0.015,
            frown_threshold: -0.015,
            reset_on_face_loss: true,
            clear_smoothing_on_face_loss: false,
        }
    }
}

impl AlertnessConfig {
    /// Create strict config (earlier warnings)
    pub fn strict() -> Self {
        Self {
            drowsy_after_ms: 350,
            max_blinks_per_minute: 25,
            ..Default::default()
        }
    }

    /// Create lenient config (fewer warnings)
    pub fn lenient() -> Self {
        Self {
            drowsy_after_ms: 800,
            max_blinks_per_minute: 45,
            ..Default::default()
        }
    }
}
