//! Motion-sensor acquisition, smoothing, and history.
//!
//! This module provides:
//! - The platform sensor abstraction (`SensorHost` / `SensorStream`)
//! - Exponential low-pass smoothing of 3-axis samples
//! - Double-length circular history buffers with contiguous windows
//! - The `Channel` pairing of one stream with its filter and history
//! - Synthetic motion signals for demos, benches, and tests

pub mod channel;
pub mod filter;
pub mod history;
pub mod synthetic;

// Re-export commonly used types
pub use channel::{Channel, ChannelKind};
pub use filter::LowPass;
pub use history::HistoryBuffer;
pub use synthetic::{SyntheticHost, SyntheticStream};

/// A single 3-axis sensor sample, either linear acceleration (m/s²) or
/// angular velocity (rad/s).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component by axis index (0 = x, 1 = y, 2 = z).
    pub fn axis(&self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }
}

/// Physical sensor types the platform can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    /// Raw accelerometer, gravity included.
    Accelerometer,
    /// Gravity-compensated linear acceleration.
    LinearAcceleration,
    /// Angular velocity in rad/s.
    Gyroscope,
}

impl SensorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Accelerometer => "accelerometer",
            Self::LinearAcceleration => "linear-acceleration",
            Self::Gyroscope => "gyroscope",
        }
    }
}

/// One pending event drained from a sensor stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorEvent {
    pub kind: SensorKind,
    pub value: Vec3,
}

/// Errors that can occur while talking to the platform sensor subsystem.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("No {0} sensor present")]
    NotPresent(&'static str),
    #[error("Failed to open {kind} stream: {reason}")]
    OpenFailed { kind: &'static str, reason: String },
}

/// An open event stream for one physical sensor.
///
/// Implementations wrap whatever queue the platform provides. All methods
/// must be non-blocking; `drain_into` in particular is called once per
/// display frame on a tight budget.
pub trait SensorStream {
    /// Re-enable event generation, restoring the sample-rate hint the stream
    /// was opened with.
    fn enable(&mut self);

    /// Stop event generation. Already-queued events may still be drained.
    fn disable(&mut self);

    /// Append all currently pending events, in arrival order, without
    /// blocking. Returns the number of events appended.
    fn drain_into(&mut self, out: &mut Vec<SensorEvent>) -> usize;
}

/// Platform sensor subsystem: sensor discovery and stream creation.
pub trait SensorHost {
    /// Whether the platform reports a sensor of the given kind.
    fn has(&self, kind: SensorKind) -> bool;

    /// Open an enabled event stream for `kind` at the given sample-rate hint.
    fn open(
        &mut self,
        kind: SensorKind,
        rate_hint_hz: u32,
    ) -> Result<Box<dyn SensorStream>, SensorError>;
}
