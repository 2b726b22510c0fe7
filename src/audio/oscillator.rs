//! Sine tone generation driven by a pull callback.

use std::f32::consts::TAU;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use super::backend::StreamSpec;

/// Oscillator frequency shared between the frame-tick context (writer) and
/// the audio-callback context (reader).
///
/// A single f32 stored as its bit pattern in an `AtomicU32`: the reader sees
/// either the old or the new value, never a torn one, and a one-frame-stale
/// read is harmless. Relaxed ordering is enough since no other state is
/// published alongside it.
#[derive(Debug, Clone)]
pub struct SharedFrequency(Arc<AtomicU32>);

impl SharedFrequency {
    pub fn new(hz: f32) -> Self {
        Self(Arc::new(AtomicU32::new(hz.to_bits())))
    }

    pub fn set(&self, hz: f32) {
        self.0.store(hz.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }
}

/// Fixed-amplitude sine oscillator.
///
/// Owned by the pull callback. `fill` synthesizes exactly the requested
/// interleaved samples at the frequency currently published in the shared
/// cell; frequency changes take effect at the next callback, phase stays
/// continuous across changes.
pub struct SineOscillator {
    frequency: SharedFrequency,
    amplitude: f32,
    sample_rate: f32,
    channels: usize,
    phase: f32,
}

impl SineOscillator {
    pub fn new(spec: StreamSpec, amplitude: f32, frequency: SharedFrequency) -> Self {
        Self {
            frequency,
            amplitude,
            sample_rate: spec.sample_rate as f32,
            channels: spec.channels as usize,
            phase: 0.0,
        }
    }

    /// Fill `out` with interleaved frames of the current waveform. Called
    /// from the audio callback; must not block or allocate.
    pub fn fill(&mut self, out: &mut [f32]) {
        let step = TAU * self.frequency.get() / self.sample_rate;
        for frame in out.chunks_mut(self.channels) {
            let sample = self.amplitude * self.phase.sin();
            for channel in frame {
                *channel = sample;
            }
            self.phase += step;
            if self.phase >= TAU {
                self.phase -= TAU;
            }
        }
    }
}
