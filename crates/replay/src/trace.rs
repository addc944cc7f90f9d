//! Recorded landmark trace format
//!
//! A trace is a JSON array of frames, each carrying a monotonic timestamp
//! and the landmark coordinates the detector produced (`null` on frames
//! where no face was found).

use anyhow::{Context, Result};
use face_mesh::{FaceLandmarks, Point2D};
use serde::Deserialize;
use std::path::Path;

/// One recorded frame
#[derive(Debug, Clone, Deserialize)]
pub struct TraceFrame {
    /// Frame timestamp (milliseconds, monotonic)
    pub t_ms: u64,
    /// Landmark coordinates, absent when no face was detected
    pub landmarks: Option<Vec<[f32; 2]>>,
}

impl TraceFrame {
    /// Convert raw coordinates into a landmark set
    pub fn face(&self) -> Option<FaceLandmarks> {
        self.landmarks.as_ref().map(|raw| {
            FaceLandmarks::new(raw.iter().map(|&[x, y]| Point2D::new(x, y)).collect())
        })
    }
}

/// Load a JSON trace file
pub fn load(path: &Path) -> Result<Vec<TraceFrame>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading trace {}", path.display()))?;
    let frames: Vec<TraceFrame> =
        serde_json::from_str(&raw).with_context(|| format!("parsing trace {}", path.display()))?;
    Ok(frames)
}
