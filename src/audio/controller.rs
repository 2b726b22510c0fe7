//! Oscillator lifecycle and frequency updates.

use super::backend::{AudioBackend, AudioError, StreamSpec};
use super::oscillator::{SharedFrequency, SineOscillator};

/// Owns the tone generator's control side.
///
/// `init` builds the oscillator, hands it to the backend's pull callback,
/// and is idempotent; a failed init leaves the controller disabled without
/// affecting the visual pipeline. `set_frequency` publishes into the shared
/// atomic cell and takes effect on the next audio callback.
pub struct ToneController {
    spec: StreamSpec,
    amplitude: f32,
    frequency: SharedFrequency,
    running: bool,
}

impl ToneController {
    pub fn new(spec: StreamSpec, amplitude: f32, initial_hz: f32) -> Self {
        Self {
            spec,
            amplitude,
            frequency: SharedFrequency::new(initial_hz),
            running: false,
        }
    }

    /// Start playback through `backend`. Safe to call again once running.
    pub fn init(&mut self, backend: &mut dyn AudioBackend) -> Result<(), AudioError> {
        if self.running {
            return Ok(());
        }

        let mut oscillator =
            SineOscillator::new(self.spec, self.amplitude, self.frequency.clone());
        backend.start(self.spec, Box::new(move |out| oscillator.fill(out)))?;
        self.running = true;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Update the tone frequency. Keeps the last value while not running.
    pub fn set_frequency(&mut self, hz: f32) {
        if self.running {
            self.frequency.set(hz);
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency.get()
    }

    /// Handle the audio callback reads from; exposed for tests and benches.
    pub fn shared_frequency(&self) -> SharedFrequency {
        self.frequency.clone()
    }
}
