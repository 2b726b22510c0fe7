//! Audio playback backend abstraction and cpal implementation.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

/// Output stream parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSpec {
    pub sample_rate: u32,
    pub channels: u16,
}

impl Default for StreamSpec {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            channels: 2,
        }
    }
}

/// Errors that can occur while setting up audio playback.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("No output audio device available")]
    NoDevice,
    #[error("Failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("Failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
    #[error("Playback already running")]
    AlreadyRunning,
}

/// Playback device consuming samples through a pull callback.
///
/// `start` hands ownership of the render closure to the backend, which
/// invokes it on its own schedule with an output buffer to fill completely.
pub trait AudioBackend {
    fn start(
        &mut self,
        spec: StreamSpec,
        render: Box<dyn FnMut(&mut [f32]) + Send>,
    ) -> Result<(), AudioError>;

    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// cpal-backed output stream.
///
/// The stream keeps playing until `stop` or drop; the render closure runs on
/// cpal's audio thread.
#[derive(Default)]
pub struct CpalBackend {
    stream: Option<cpal::Stream>,
}

impl CpalBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioBackend for CpalBackend {
    fn start(
        &mut self,
        spec: StreamSpec,
        mut render: Box<dyn FnMut(&mut [f32]) + Send>,
    ) -> Result<(), AudioError> {
        if self.stream.is_some() {
            return Err(AudioError::AlreadyRunning);
        }

        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
        let config = cpal::StreamConfig {
            channels: spec.channels,
            sample_rate: cpal::SampleRate(spec.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let stream = device.build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| render(data),
            |err| log::error!("audio stream error: {err}"),
            None,
        )?;
        stream.play()?;

        log::info!(
            "audio output started: {} Hz, {} channels",
            spec.sample_rate,
            spec.channels
        );
        self.stream = Some(stream);
        Ok(())
    }

    fn stop(&mut self) {
        if self.stream.take().is_some() {
            log::info!("audio output stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.stream.is_some()
    }
}
