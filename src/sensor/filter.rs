//! Exponential low-pass smoothing of 3-axis samples.

use super::Vec3;

/// Single-pole low-pass filter.
///
/// `alpha` weights the newest sample against accumulated history: higher
/// values respond faster, lower values smooth harder. The filter itself is
/// stateless; the owning channel holds the running value across updates.
#[derive(Debug, Clone, Copy)]
pub struct LowPass {
    alpha: f32,
}

impl LowPass {
    pub fn new(alpha: f32) -> Self {
        debug_assert!((0.0..=1.0).contains(&alpha));
        Self { alpha }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Compute `alpha * raw + (1 - alpha) * previous` per component.
    pub fn update(&self, previous: Vec3, raw: Vec3) -> Vec3 {
        let a = self.alpha;
        Vec3 {
            x: a * raw.x + (1.0 - a) * previous.x,
            y: a * raw.y + (1.0 - a) * previous.y,
            z: a * raw.z + (1.0 - a) * previous.z,
        }
    }
}
