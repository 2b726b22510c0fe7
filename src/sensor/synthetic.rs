//! Synthetic motion-signal generation for demos, benches, and tests.
//!
//! Stands in for the platform sensor subsystem when no hardware is present:
//! scripted streams replay a fixed event list, oscillating streams produce a
//! smooth sinusoidal motion signature indefinitely.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use super::{SensorError, SensorEvent, SensorHost, SensorKind, SensorStream, Vec3};

enum Mode {
    /// Replay a fixed list of events, then stay empty.
    Scripted(VecDeque<SensorEvent>),
    /// Generate a sinusoidal signal, a fixed number of events per drain.
    Oscillating {
        kind: SensorKind,
        phase: f32,
        step: f32,
        amplitude: f32,
        events_per_drain: usize,
    },
}

/// A fake sensor stream.
pub struct SyntheticStream {
    mode: Mode,
    enabled: bool,
}

impl SyntheticStream {
    /// Stream that replays `events` on the next drains, then goes quiet.
    pub fn scripted(events: Vec<SensorEvent>) -> Self {
        Self {
            mode: Mode::Scripted(events.into()),
            enabled: true,
        }
    }

    /// Stream producing `events_per_drain` sinusoidal events per drain, with
    /// the three axes phase-shifted against each other.
    pub fn oscillating(kind: SensorKind, signal_hz: f32, rate_hz: u32, amplitude: f32) -> Self {
        let rate = rate_hz.max(1) as f32;
        Self {
            mode: Mode::Oscillating {
                kind,
                phase: 0.0,
                step: TAU * signal_hz / rate,
                amplitude,
                // Sensor rate over a nominal 60 fps frame budget.
                events_per_drain: ((rate / 60.0).ceil() as usize).max(1),
            },
            enabled: true,
        }
    }

    /// Queue more events on a scripted stream. No effect on oscillating ones.
    pub fn push_event(&mut self, event: SensorEvent) {
        if let Mode::Scripted(queue) = &mut self.mode {
            queue.push_back(event);
        }
    }
}

impl SensorStream for SyntheticStream {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn drain_into(&mut self, out: &mut Vec<SensorEvent>) -> usize {
        match &mut self.mode {
            Mode::Scripted(queue) => {
                // Already-queued events drain even after disable; disable
                // only stops generation, and scripted streams generate
                // nothing.
                let drained = queue.len();
                out.extend(queue.drain(..));
                drained
            }
            Mode::Oscillating {
                kind,
                phase,
                step,
                amplitude,
                events_per_drain,
            } => {
                if !self.enabled {
                    return 0;
                }
                for _ in 0..*events_per_drain {
                    *phase = (*phase + *step) % TAU;
                    out.push(SensorEvent {
                        kind: *kind,
                        value: Vec3::new(
                            *amplitude * phase.sin(),
                            *amplitude * (*phase + TAU / 3.0).sin(),
                            *amplitude * (*phase + 2.0 * TAU / 3.0).sin(),
                        ),
                    });
                }
                *events_per_drain
            }
        }
    }
}

/// A fake sensor subsystem exposing oscillating streams for a configured set
/// of sensors.
pub struct SyntheticHost {
    kinds: Vec<SensorKind>,
    signal_hz: f32,
    amplitude: f32,
}

impl SyntheticHost {
    pub fn new(kinds: Vec<SensorKind>) -> Self {
        Self {
            kinds,
            signal_hz: 0.5,
            amplitude: 4.0,
        }
    }

    pub fn with_signal(mut self, signal_hz: f32, amplitude: f32) -> Self {
        self.signal_hz = signal_hz;
        self.amplitude = amplitude;
        self
    }
}

impl SensorHost for SyntheticHost {
    fn has(&self, kind: SensorKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn open(
        &mut self,
        kind: SensorKind,
        rate_hint_hz: u32,
    ) -> Result<Box<dyn SensorStream>, SensorError> {
        if !self.has(kind) {
            return Err(SensorError::NotPresent(kind.name()));
        }
        Ok(Box::new(SyntheticStream::oscillating(
            kind,
            self.signal_hz,
            rate_hint_hz,
            self.amplitude,
        )))
    }
}
