//! Fixed landmark-index scheme (face-mesh topology)
//!
//! Indices follow the 468-point mesh produced by the external landmark
//! model. Only the subsets the alertness pipeline reads are named here.

/// Full mesh size produced by the external model
pub const MESH_POINTS: usize = 468;

/// Left eye horizontal corners
pub const LEFT_EYE_OUTER: usize = 33;
pub const LEFT_EYE_INNER: usize = 133;

/// Left eye vertical lid pair
pub const LEFT_EYE_TOP: usize = 159;
pub const LEFT_EYE_BOTTOM: usize = 145;

/// Right eye horizontal corners
pub const RIGHT_EYE_INNER: usize = 362;
pub const RIGHT_EYE_OUTER: usize = 263;

/// Right eye vertical lid pair
pub const RIGHT_EYE_TOP: usize = 386;
pub const RIGHT_EYE_BOTTOM: usize = 374;

/// Mouth corners
pub const MOUTH_LEFT_CORNER: usize = 61;
pub const MOUTH_RIGHT_CORNER: usize = 291;

/// Inner lip vertical pair
pub const LIP_TOP_INNER: usize = 13;
pub const LIP_BOTTOM_INNER: usize = 14;

/// Contour points drawn around both eyes
pub const EYE_CONTOUR: &[usize] = &[
    33, 133, 160, 159, 158, 157, 173, 144, 145, 153, 154, 155, 246, 362, 263, 387, 386, 385, 384,
    398, 373, 374, 380, 381, 382, 466,
];
