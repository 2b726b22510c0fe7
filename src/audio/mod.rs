//! Tone synthesis and playback.
//!
//! This module provides:
//! - A sine oscillator filled frame-by-frame from the output backend's pull
//!   callback, never blocking or allocating on that path
//! - A shared atomic frequency cell bridging the frame-tick and
//!   audio-callback contexts
//! - The playback backend abstraction with a cpal implementation
//! - Clamped-linear pitch mapping from a filtered sensor scalar to Hz

pub mod backend;
pub mod controller;
pub mod oscillator;
pub mod pitch;

// Re-export commonly used types
pub use backend::{AudioBackend, AudioError, CpalBackend, StreamSpec};
pub use controller::ToneController;
pub use oscillator::{SharedFrequency, SineOscillator};
pub use pitch::PitchMap;
