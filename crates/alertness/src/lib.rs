//! Operator Alertness Core
//!
//! Per-frame alertness analysis over facial landmarks:
//! - Eye aspect ratio (EAR) and open/closed tracking
//! - Drowsiness latch on sustained closure
//! - Blink detection and rolling blink rate
//! - Mouth-geometry emotion classification
//!
//! The pipeline is a sequential reducer: one [`AlertnessMonitor::step`] call
//! per displayed frame with a caller-supplied monotonic clock. No internal
//! concurrency, no wall-clock reads, no hidden randomness.

pub mod analysis;
pub mod blink;
pub mod config;
pub mod emotion;
pub mod eye;
pub mod geometry;

pub use analysis::{EyeStatus, FrameAnalysis};
pub use blink::BlinkRateAccumulator;
pub use config::AlertnessConfig;
pub use emotion::{Emotion, EmotionClassifier};
pub use eye::EyeStateTracker;
pub use geometry::{FrameSignal, GeometryError};

use face_mesh::{FaceLandmarks, OverlayPoints};
use signal_window::SlidingMeanFilter;
use tracing::{debug, warn};

/// Per-frame alertness reducer.
///
/// Owns all cross-frame state: the smoothing window, the eye state machine,
/// and the blink window. Feed it one frame at a time via
/// [`step`](Self::step); identical input sequences produce identical output
/// sequences.
pub struct AlertnessMonitor {
    config: AlertnessConfig,
    smoother: SlidingMeanFilter,
    eyes: EyeStateTracker,
    blinks: BlinkRateAccumulator,
    emotion: EmotionClassifier,
    /// Last smoothed mouth offset, reused on non-evaluable frames
    last_offset: f32,
    /// Consecutive frames without a detected face
    face_absent_frames: u32,
}

impl AlertnessMonitor {
    pub fn new(config: AlertnessConfig) -> Self {
        Self {
            smoother: SlidingMeanFilter::new(config.smoothing_window),
            eyes: EyeStateTracker::new(config.drowsy_after_ms),
            blinks: BlinkRateAccumulator::new(
                config.blink_max_ms,
                config.rate_window_ms,
                config.max_blinks_per_minute,
            ),
            emotion: EmotionClassifier::new(config.smile_threshold, config.frown_threshold),
            last_offset: 0.0,
            face_absent_frames: 0,
            config,
        }
    }

    /// Process one frame.
    ///
    /// `face` is the first detected face for the frame, if any; additional
    /// faces are the caller's to discard. `now_ms` is a monotonic
    /// millisecond clock and must not decrease between calls.
    pub fn step(&mut self, face: Option<&FaceLandmarks>, now_ms: u64) -> FrameAnalysis {
        // Window bookkeeping runs before the count is read, face or no face
        self.blinks.roll_window(now_ms);

        let Some(landmarks) = face else {
            return self.step_no_face();
        };
        self.face_absent_frames = 0;

        let signal = match geometry::extract(landmarks) {
            Ok(signal) => signal,
            Err(e) => {
                warn!("skipping frame: {e}");
                // A degenerate frame still had a face; a malformed set is
                // reported like a missing one. State is untouched either way.
                return self.carry_over(matches!(e, GeometryError::Degenerate { .. }));
            }
        };

        let smoothed = self.smoother.push(signal.mouth_offset);
        self.last_offset = smoothed;

        let closed = signal.ear < self.config.ear_threshold;
        self.eyes.update(closed, now_ms);
        self.blinks.update(closed, now_ms);

        FrameAnalysis {
            face_detected: true,
            ear: signal.ear,
            eye_status: if closed {
                EyeStatus::Closed
            } else {
                EyeStatus::Open
            },
            emotion: self.emotion.classify(smoothed),
            blinks_per_minute: self.blinks.count(),
            drowsy: self.eyes.is_drowsy() || self.blinks.rate_exceeded(),
            overlay: OverlayPoints::select(landmarks).ok(),
        }
    }

    /// Consecutive frames without a detected face, for diagnostics
    pub fn face_absent_frames(&self) -> u32 {
        self.face_absent_frames
    }

    pub fn config(&self) -> &AlertnessConfig {
        &self.config
    }

    fn step_no_face(&mut self) -> FrameAnalysis {
        self.face_absent_frames += 1;
        if self.face_absent_frames == 1 {
            debug!("face lost");
            if self.config.reset_on_face_loss {
                self.eyes.reset();
                self.blinks.cancel_closure();
            }
            if self.config.clear_smoothing_on_face_loss {
                self.smoother.reset();
                self.last_offset = 0.0;
            }
        }

        let drowsy = if self.config.reset_on_face_loss {
            false
        } else {
            self.eyes.is_drowsy() || self.blinks.rate_exceeded()
        };

        FrameAnalysis {
            face_detected: false,
            ear: 0.0,
            eye_status: EyeStatus::Open,
            emotion: Emotion::Neutral,
            blinks_per_minute: self.blinks.count(),
            drowsy,
            overlay: None,
        }
    }

    /// Output for a frame whose geometry could not be evaluated: prior eye
    /// status and drowsy verdict are preserved, nothing advances.
    fn carry_over(&self, face_detected: bool) -> FrameAnalysis {
        FrameAnalysis {
            face_detected,
            ear: 0.0,
            eye_status: self.eyes.status(),
            emotion: self.emotion.classify(self.last_offset),
            blinks_per_minute: self.blinks.count(),
            drowsy: self.eyes.is_drowsy() || self.blinks.rate_exceeded(),
            overlay: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use face_mesh::{mesh, Point2D};

    const OPEN_EAR: f32 = 0.35;
    const CLOSED_EAR: f32 = 0.10;

    fn place_eye(
        points: &mut [Point2D],
        corner_a: usize,
        corner_b: usize,
        top: usize,
        bottom: usize,
        x0: f32,
        ear: f32,
    ) {
        points[corner_a] = Point2D::new(x0, 0.40);
        points[corner_b] = Point2D::new(x0 + 0.10, 0.40);
        points[top] = Point2D::new(x0 + 0.05, 0.40 - ear * 0.05);
        points[bottom] = Point2D::new(x0 + 0.05, 0.40 + ear * 0.05);
    }

    /// Build a full synthetic landmark set with the requested EAR and mouth
    /// offset
    fn synthetic_face(ear: f32, offset: f32) -> FaceLandmarks {
        let mut points = vec![Point2D::new(0.5, 0.5); mesh::MESH_POINTS];
        place_eye(
            &mut points,
            mesh::LEFT_EYE_OUTER,
            mesh::LEFT_EYE_INNER,
            mesh::LEFT_EYE_TOP,
            mesh::LEFT_EYE_BOTTOM,
            0.30,
            ear,
        );
        place_eye(
            &mut points,
            mesh::RIGHT_EYE_INNER,
            mesh::RIGHT_EYE_OUTER,
            mesh::RIGHT_EYE_TOP,
            mesh::RIGHT_EYE_BOTTOM,
            0.60,
            ear,
        );
        points[mesh::MOUTH_LEFT_CORNER] = Point2D::new(0.40, 0.70);
        points[mesh::MOUTH_RIGHT_CORNER] = Point2D::new(0.60, 0.70);
        points[mesh::LIP_TOP_INNER] = Point2D::new(0.50, 0.70 + offset - 0.01);
        points[mesh::LIP_BOTTOM_INNER] = Point2D::new(0.50, 0.70 + offset + 0.01);
        FaceLandmarks::new(points)
    }

    fn open_face() -> FaceLandmarks {
        synthetic_face(OPEN_EAR, 0.0)
    }

    fn closed_face() -> FaceLandmarks {
        synthetic_face(CLOSED_EAR, 0.0)
    }

    #[test]
    fn test_short_closure_is_a_blink_not_drowsiness() {
        let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
        let open = open_face();
        let closed = closed_face();

        assert!(!monitor.step(Some(&open), 0).drowsy);
        assert!(!monitor.step(Some(&closed), 1000).drowsy);
        assert!(!monitor.step(Some(&closed), 1100).drowsy);

        // Reopen after 200ms: exactly one blink, never drowsy
        let analysis = monitor.step(Some(&open), 1200);
        assert!(!analysis.drowsy);
        assert_eq!(analysis.blinks_per_minute, 1);
        assert_eq!(analysis.eye_status, EyeStatus::Open);
    }

    #[test]
    fn test_sustained_closure_latches_after_dwell() {
        let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
        let open = open_face();
        let closed = closed_face();

        monitor.step(Some(&open), 0);
        monitor.step(Some(&closed), 1000);
        assert!(!monitor.step(Some(&closed), 1500).drowsy);

        let analysis = monitor.step(Some(&closed), 1501);
        assert!(analysis.drowsy);
        assert_eq!(analysis.eye_status, EyeStatus::Closed);

        // Held while closed, no blink counted for the sustained closure
        assert!(monitor.step(Some(&closed), 1600).drowsy);
        let reopened = monitor.step(Some(&open), 1700);
        assert!(!reopened.drowsy);
        assert_eq!(reopened.blinks_per_minute, 0);
    }

    #[test]
    fn test_single_open_frame_resets_latch() {
        let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
        let open = open_face();
        let closed = closed_face();

        monitor.step(Some(&closed), 1000);
        assert!(monitor.step(Some(&closed), 1600).drowsy);
        assert!(!monitor.step(Some(&open), 1601).drowsy);
    }

    #[test]
    fn test_blink_rate_escalation_and_window_reset() {
        let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
        let open = open_face();
        let closed = closed_face();

        let mut last = FrameAnalysis::default();
        for i in 0..36u64 {
            monitor.step(Some(&closed), i * 1000);
            last = monitor.step(Some(&open), i * 1000 + 100);
        }

        // 36th blink crosses the rate limit: drowsy with eyes open
        assert_eq!(last.blinks_per_minute, 36);
        assert!(last.drowsy);
        assert_eq!(last.eye_status, EyeStatus::Open);

        // Stays forced until the window rolls over
        assert!(monitor.step(Some(&open), 40_000).drowsy);
        let rolled = monitor.step(Some(&open), 60_001);
        assert_eq!(rolled.blinks_per_minute, 0);
        assert!(!rolled.drowsy);
    }

    #[test]
    fn test_smoothing_drives_emotion_boundary() {
        let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());

        let mut analysis = FrameAnalysis::default();
        for i in 0..5u64 {
            analysis = monitor.step(Some(&synthetic_face(OPEN_EAR, 0.02)), i * 100);
        }
        assert_eq!(analysis.emotion, Emotion::Happy);

        // Sixth sample drags the mean to 0.012, under the Happy threshold
        let analysis = monitor.step(Some(&synthetic_face(OPEN_EAR, -0.02)), 500);
        assert_eq!(analysis.emotion, Emotion::Neutral);
    }

    #[test]
    fn test_no_face_round_trip_clears_latched_drowsy() {
        let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
        let closed = closed_face();

        monitor.step(Some(&closed), 1000);
        assert!(monitor.step(Some(&closed), 1600).drowsy);

        let analysis = monitor.step(None, 1700);
        assert!(!analysis.drowsy);
        assert!(!analysis.face_detected);
        assert_eq!(analysis.ear, 0.0);
        assert_eq!(analysis.eye_status, EyeStatus::Open);
        assert_eq!(analysis.emotion, Emotion::Neutral);
        assert_eq!(monitor.face_absent_frames(), 1);

        // Reappearing closed starts a fresh closure instead of inheriting
        // the pre-loss closure start
        assert!(!monitor.step(Some(&closed), 1800).drowsy);
        assert!(!monitor.step(Some(&closed), 2200).drowsy);
        assert!(monitor.step(Some(&closed), 2301).drowsy);
    }

    #[test]
    fn test_face_loss_persistence_policy() {
        let config = AlertnessConfig {
            reset_on_face_loss: false,
            ..Default::default()
        };
        let mut monitor = AlertnessMonitor::new(config);
        let closed = closed_face();

        monitor.step(Some(&closed), 1000);
        assert!(monitor.step(Some(&closed), 1600).drowsy);

        // Policy off: the latch rides through the gap
        assert!(monitor.step(None, 1700).drowsy);
        assert!(monitor.step(Some(&closed), 1800).drowsy);
    }

    #[test]
    fn test_degenerate_frame_preserves_state() {
        let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
        let closed = closed_face();

        monitor.step(Some(&closed), 1000);
        assert!(monitor.step(Some(&closed), 1600).drowsy);

        // Collapse the left eye's horizontal reference distance
        let degenerate = {
            let mut pts = vec![Point2D::new(0.5, 0.5); mesh::MESH_POINTS];
            place_eye(
                &mut pts,
                mesh::LEFT_EYE_OUTER,
                mesh::LEFT_EYE_INNER,
                mesh::LEFT_EYE_TOP,
                mesh::LEFT_EYE_BOTTOM,
                0.30,
                CLOSED_EAR,
            );
            pts[mesh::LEFT_EYE_INNER] = pts[mesh::LEFT_EYE_OUTER];
            FaceLandmarks::new(pts)
        };

        let analysis = monitor.step(Some(&degenerate), 1700);
        assert!(analysis.face_detected);
        assert_eq!(analysis.eye_status, EyeStatus::Closed);
        assert!(analysis.drowsy, "prior verdict is preserved");

        // The skipped frame did not clear the latch; reopening does
        assert!(!monitor.step(Some(&open_face()), 1800).drowsy);
    }

    #[test]
    fn test_malformed_frame_reports_no_face_and_keeps_state() {
        let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
        let closed = closed_face();

        monitor.step(Some(&closed), 1000);
        assert!(monitor.step(Some(&closed), 1600).drowsy);

        let malformed = FaceLandmarks::new(vec![Point2D::default(); 10]);
        let analysis = monitor.step(Some(&malformed), 1700);
        assert!(!analysis.face_detected);
        assert!(analysis.drowsy, "state is kept, not reset");
        assert_eq!(monitor.face_absent_frames(), 0);
    }

    #[test]
    fn test_identical_sequences_are_deterministic() {
        let frames: Vec<(Option<FaceLandmarks>, u64)> = vec![
            (Some(open_face()), 0),
            (Some(closed_face()), 100),
            (Some(closed_face()), 250),
            (Some(open_face()), 320),
            (None, 400),
            (Some(synthetic_face(OPEN_EAR, 0.02)), 500),
            (Some(synthetic_face(OPEN_EAR, -0.03)), 600),
        ];

        let run = || {
            let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
            frames
                .iter()
                .map(|(face, t)| monitor.step(face.as_ref(), *t))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_overlay_passthrough() {
        let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
        let analysis = monitor.step(Some(&open_face()), 0);
        let overlay = analysis.overlay.expect("overlay present for valid face");
        assert_eq!(overlay.eye_contour.len(), mesh::EYE_CONTOUR.len());
        assert_eq!(overlay.mouth[0], Point2D::new(0.40, 0.70));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn blink_count_never_exceeds_reopenings(
                pattern in proptest::collection::vec(any::<bool>(), 1..200)
            ) {
                let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
                let open = open_face();
                let closed = closed_face();

                let mut reopenings = 0u32;
                let mut was_closed = false;
                let mut now = 0u64;
                for &is_closed in &pattern {
                    now += 50;
                    let face = if is_closed { &closed } else { &open };
                    let analysis = monitor.step(Some(face), now);
                    if was_closed && !is_closed {
                        reopenings += 1;
                    }
                    was_closed = is_closed;
                    prop_assert!(analysis.blinks_per_minute <= reopenings);
                }
            }
        }
    }
}
