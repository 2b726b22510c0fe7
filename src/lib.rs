//! Motion Scope
//!
//! Real-time motion-sensor waveform visualization and sonification library.
//!
//! # Features
//!
//! - Non-blocking per-frame draining of accelerometer/gyroscope event streams
//! - Exponential low-pass smoothing of 3-axis samples
//! - Double-length circular history buffers exposing contiguous, wrap-free windows
//! - Line-strip waveform rendering against a pluggable graphics device
//! - Gyroscope-driven sine pitch mapping into a pull-based audio output (cpal)

pub mod assets;
pub mod audio;
pub mod pipeline;
pub mod render;
pub mod sensor;

// Re-export commonly used types
pub use assets::{AssetError, AssetSource, DirAssets};
pub use audio::{
    AudioBackend, AudioError, CpalBackend, PitchMap, SharedFrequency, SineOscillator, StreamSpec,
    ToneController,
};
pub use pipeline::{MotionScope, ScopeConfig, ScopeError, ToneConfig};
pub use render::{
    AttributeId, GraphicsDevice, ProgramHandles, ProgramId, RenderError, UniformId,
    WaveformRenderer,
};
pub use sensor::{
    Channel, ChannelKind, HistoryBuffer, LowPass, SensorError, SensorEvent, SensorHost,
    SensorKind, SensorStream, SyntheticHost, SyntheticStream, Vec3,
};
