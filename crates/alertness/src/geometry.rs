//! Landmark geometry: eye aspect ratio and mouth-curvature offset

use face_mesh::{mesh, FaceLandmarks, MeshError};
use thiserror::Error;

/// Geometry extraction failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error(transparent)]
    Malformed(#[from] MeshError),

    /// A reference distance collapsed to zero or produced a non-finite ratio
    #[error("degenerate {which} geometry, frame cannot be evaluated")]
    Degenerate { which: &'static str },
}

/// Signals derived from one frame's landmarks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSignal {
    /// Mean eye aspect ratio over both eyes; lower means more closed
    pub ear: f32,
    /// Mouth-corner offset from the lip center; positive means corners raised
    pub mouth_offset: f32,
}

/// Compute the per-frame signals. Pure function of the landmark set.
pub fn extract(landmarks: &FaceLandmarks) -> Result<FrameSignal, GeometryError> {
    let left = eye_aspect_ratio(
        landmarks,
        mesh::LEFT_EYE_TOP,
        mesh::LEFT_EYE_BOTTOM,
        mesh::LEFT_EYE_OUTER,
        mesh::LEFT_EYE_INNER,
        "left eye",
    )?;
    let right = eye_aspect_ratio(
        landmarks,
        mesh::RIGHT_EYE_TOP,
        mesh::RIGHT_EYE_BOTTOM,
        mesh::RIGHT_EYE_INNER,
        mesh::RIGHT_EYE_OUTER,
        "right eye",
    )?;
    let ear = (left + right) / 2.0;

    let top_lip = landmarks.point(mesh::LIP_TOP_INNER)?;
    let bottom_lip = landmarks.point(mesh::LIP_BOTTOM_INNER)?;
    let left_corner = landmarks.point(mesh::MOUTH_LEFT_CORNER)?;
    let right_corner = landmarks.point(mesh::MOUTH_RIGHT_CORNER)?;

    let mouth_center_y = (top_lip.y + bottom_lip.y) / 2.0;
    let left_offset = mouth_center_y - left_corner.y;
    let right_offset = mouth_center_y - right_corner.y;
    let mouth_offset = (left_offset + right_offset) / 2.0;

    if !mouth_offset.is_finite() {
        return Err(GeometryError::Degenerate { which: "mouth" });
    }

    Ok(FrameSignal { ear, mouth_offset })
}

/// Vertical lid distance over horizontal corner distance for one eye
fn eye_aspect_ratio(
    landmarks: &FaceLandmarks,
    top: usize,
    bottom: usize,
    corner_a: usize,
    corner_b: usize,
    which: &'static str,
) -> Result<f32, GeometryError> {
    let vertical = landmarks.point(top)?.distance(&landmarks.point(bottom)?);
    let horizontal = landmarks
        .point(corner_a)?
        .distance(&landmarks.point(corner_b)?);

    let ear = vertical / horizontal;
    if !ear.is_finite() {
        return Err(GeometryError::Degenerate { which });
    }
    Ok(ear)
}
