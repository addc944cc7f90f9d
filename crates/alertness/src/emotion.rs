//! Mouth-curvature emotion classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse emotion label derived from mouth geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Sad,
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Emotion::Neutral => "Neutral",
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
        };
        f.write_str(label)
    }
}

/// Stateless threshold classifier over the smoothed mouth offset.
///
/// No hysteresis: labels may flicker near the thresholds.
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    smile_threshold: f32,
    frown_threshold: f32,
}

impl EmotionClassifier {
    pub fn new(smile_threshold: f32, frown_threshold: f32) -> Self {
        Self {
            smile_threshold,
            frown_threshold,
        }
    }

    pub fn classify(&self, smoothed_offset: f32) -> Emotion {
        if smoothed_offset > self.smile_threshold {
            Emotion::Happy
        } else if smoothed_offset < self.frown_threshold {
            Emotion::Sad
        } else {
            Emotion::Neutral
        }
    }
}
