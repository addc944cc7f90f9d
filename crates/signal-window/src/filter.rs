//! Trailing-Mean Filter

use crate::BoundedWindow;

/// Sliding mean filter for noise reduction.
///
/// Output is deterministic given the exact sequence of pushed samples. The
/// window is never cleared implicitly; [`reset`](Self::reset) exists for
/// callers whose session policy asks for it.
#[derive(Debug, Clone)]
pub struct SlidingMeanFilter {
    window: BoundedWindow<f32>,
}

impl SlidingMeanFilter {
    /// Create a filter averaging over the last `size` samples
    pub fn new(size: usize) -> Self {
        Self {
            window: BoundedWindow::new(size),
        }
    }

    /// Add a sample and get the current trailing mean
    pub fn push(&mut self, value: f32) -> f32 {
        self.window.push(value);
        self.mean()
    }

    /// Mean of the current window contents (0.0 when empty)
    pub fn mean(&self) -> f32 {
        if self.window.is_empty() {
            return 0.0;
        }
        self.window.iter().sum::<f32>() / self.window.len() as f32
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Drop all samples
    pub fn reset(&mut self) {
        self.window.clear();
    }
}
