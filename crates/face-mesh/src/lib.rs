//! Facial landmark data model
//!
//! Types for the per-frame landmark sets produced by an external face-mesh
//! model, plus the fixed index scheme the alertness pipeline reads. One
//! [`FaceLandmarks`] instance per detected face per frame; nothing here is
//! retained across frames.

pub mod mesh;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Landmark access error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("landmark index {index} out of bounds for set of {len} points")]
    MalformedLandmarkSet { index: usize, len: usize },
}

/// A single 2D landmark in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One frame's landmark set for a single detected face.
///
/// Indexed by the scheme in [`mesh`]. The set is treated as opaque model
/// output; any access outside its bounds is a malformed frame, not a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmarks {
    points: Vec<Point2D>,
}

impl FaceLandmarks {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fetch a landmark by mesh index
    pub fn point(&self, index: usize) -> Result<Point2D, MeshError> {
        self.points
            .get(index)
            .copied()
            .ok_or(MeshError::MalformedLandmarkSet {
                index,
                len: self.points.len(),
            })
    }
}

/// Landmark subsets passed through for overlay drawing.
///
/// Pure selection of input points, no derived data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayPoints {
    /// Contour points around both eyes
    pub eye_contour: Vec<Point2D>,
    /// Mouth corners and inner lip pair
    pub mouth: [Point2D; 4],
}

impl OverlayPoints {
    /// Select the overlay subsets from a landmark set
    pub fn select(landmarks: &FaceLandmarks) -> Result<Self, MeshError> {
        let mut eye_contour = Vec::with_capacity(mesh::EYE_CONTOUR.len());
        for &idx in mesh::EYE_CONTOUR {
            eye_contour.push(landmarks.point(idx)?);
        }

        let mouth = [
            landmarks.point(mesh::MOUTH_LEFT_CORNER)?,
            landmarks.point(mesh::MOUTH_RIGHT_CORNER)?,
            landmarks.point(mesh::LIP_TOP_INNER)?,
            landmarks.point(mesh::LIP_BOTTOM_INNER)?,
        ];

        Ok(Self { eye_contour, mouth })
    }
}
