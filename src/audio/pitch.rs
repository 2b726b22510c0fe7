//! Clamped-linear mapping from a filtered sensor scalar to a frequency.

use serde::{Deserialize, Serialize};

/// Maps `|scalar|` from a sensor-value domain into an audible range.
///
/// Defaults map angular-rate magnitude `[0, 5]` rad/s onto `[200, 1000]` Hz.
/// Inputs outside the domain clamp to the nearest endpoint; in between the
/// mapping is linear, so it is monotonic and continuous.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PitchMap {
    pub domain_min: f32,
    pub domain_max: f32,
    pub freq_min: f32,
    pub freq_max: f32,
}

impl Default for PitchMap {
    fn default() -> Self {
        Self {
            domain_min: 0.0,
            domain_max: 5.0,
            freq_min: 200.0,
            freq_max: 1000.0,
        }
    }
}

impl PitchMap {
    pub fn map(&self, scalar: f32) -> f32 {
        let clamped = scalar.abs().clamp(self.domain_min, self.domain_max);
        let t = (clamped - self.domain_min) / (self.domain_max - self.domain_min);
        self.freq_min + t * (self.freq_max - self.freq_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_midpoint() {
        let map = PitchMap::default();
        assert_eq!(map.map(0.0), 200.0);
        assert_eq!(map.map(5.0), 1000.0);
        assert_eq!(map.map(2.5), 600.0);
    }

    #[test]
    fn test_out_of_domain_inputs_clamp() {
        let map = PitchMap::default();
        assert_eq!(map.map(-100.0), 1000.0); // magnitude clamps high
        assert_eq!(map.map(50.0), 1000.0);
        assert_eq!(map.map(-0.0), 200.0);
    }

    #[test]
    fn test_mapping_is_monotonic() {
        let map = PitchMap::default();
        let mut last = map.map(0.0);
        for i in 1..=100 {
            let hz = map.map(i as f32 * 0.05);
            assert!(hz >= last);
            last = hz;
        }
    }

    #[test]
    fn test_negative_scalar_uses_magnitude() {
        let map = PitchMap::default();
        assert_eq!(map.map(-2.5), map.map(2.5));
    }
}
