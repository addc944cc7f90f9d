//! Per-frame analysis output

use crate::emotion::Emotion;
use face_mesh::OverlayPoints;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Eye open/closed verdict for the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EyeStatus {
    #[default]
    Open,
    Closed,
}

impl fmt::Display for EyeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EyeStatus::Open => "Eyes: Open",
            EyeStatus::Closed => "Eyes: Closed",
        };
        f.write_str(label)
    }
}

/// Complete analysis result for one frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameAnalysis {
    /// Whether a usable face was analyzed this frame
    pub face_detected: bool,

    /// Mean eye aspect ratio (0.0 when no face)
    pub ear: f32,

    /// Eye open/closed verdict
    pub eye_status: EyeStatus,

    /// Current emotion label
    pub emotion: Emotion,

    /// Completed blinks in the rolling window
    pub blinks_per_minute: u32,

    /// Drowsiness warning: sustained closure OR blink-rate override
    pub drowsy: bool,

    /// Landmark subsets for overlay drawing (pass-through of input points)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlayPoints>,
}
