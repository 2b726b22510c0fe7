//! Full sensing-filtering-buffering-presentation pipeline.
//!
//! `MotionScope` is the single context object the host drives through its
//! lifecycle callbacks: `initialize`, `surface_created`, `surface_changed`,
//! `frame_tick`, `pause`, `resume`, `init_audio`. One instance owns the
//! sensor channels, the renderer, and the tone controller; nothing lives in
//! process-wide state.

use serde::{Deserialize, Serialize};

use crate::assets::{AssetError, AssetSource};
use crate::audio::{AudioBackend, AudioError, PitchMap, StreamSpec, ToneController};
use crate::render::{
    GraphicsDevice, RenderError, WaveformRenderer, FRAGMENT_SHADER_ASSET, VERTEX_SHADER_ASSET,
};
use crate::sensor::{Channel, ChannelKind, LowPass, SensorError, SensorHost, SensorKind};

/// Tone generator settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    pub sample_rate: u32,
    pub channels: u16,
    pub amplitude: f32,
    pub initial_hz: f32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            channels: 2,
            amplitude: 0.2,
            initial_hz: 220.0,
        }
    }
}

impl ToneConfig {
    pub fn stream_spec(&self) -> StreamSpec {
        StreamSpec {
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Number of history slots per channel; also the line-strip vertex count.
    pub history_len: usize,
    /// Low-pass weight for new samples.
    pub filter_alpha: f32,
    /// Sample-rate hint passed when opening sensor streams.
    pub sensor_rate_hz: u32,
    pub pitch: PitchMap,
    pub tone: ToneConfig,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            history_len: 100,
            filter_alpha: 0.1,
            sensor_rate_hz: 100,
            pitch: PitchMap::default(),
            tone: ToneConfig::default(),
        }
    }
}

impl ScopeConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Errors that can occur during pipeline setup.
///
/// Only setup paths report errors; per-frame operations either proceed with
/// stale/duplicate data or no-op.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
    #[error("Sensor error: {0}")]
    Sensor(#[from] SensorError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),
    #[error("initialize() must complete before {0}")]
    NotInitialized(&'static str),
}

struct ShaderSources {
    vertex: String,
    fragment: String,
}

/// The pipeline instance driven by the host's lifecycle callbacks.
pub struct MotionScope {
    config: ScopeConfig,
    sensors: Box<dyn SensorHost>,
    graphics: Box<dyn GraphicsDevice>,
    audio: Box<dyn AudioBackend>,
    shaders: Option<ShaderSources>,
    channels: Vec<Channel>,
    renderer: WaveformRenderer,
    tone: ToneController,
}

impl MotionScope {
    pub fn new(
        config: ScopeConfig,
        sensors: Box<dyn SensorHost>,
        graphics: Box<dyn GraphicsDevice>,
        audio: Box<dyn AudioBackend>,
    ) -> Self {
        let renderer = WaveformRenderer::new(config.history_len);
        let tone = ToneController::new(
            config.tone.stream_spec(),
            config.tone.amplitude,
            config.tone.initial_hz,
        );
        Self {
            config,
            sensors,
            graphics,
            audio,
            shaders: None,
            channels: Vec::with_capacity(2),
            renderer,
            tone,
        }
    }

    /// Load shader assets and open the sensor channels.
    ///
    /// The accelerometer channel is required (gravity-compensated linear
    /// acceleration preferred, raw accelerometer accepted). The gyroscope is
    /// best-effort: absence is a valid permanent state, not an error.
    pub fn initialize(&mut self, assets: &dyn AssetSource) -> Result<(), ScopeError> {
        let vertex = assets.load_utf8(VERTEX_SHADER_ASSET)?;
        let fragment = assets.load_utf8(FRAGMENT_SHADER_ASSET)?;
        self.shaders = Some(ShaderSources { vertex, fragment });

        let rate = self.config.sensor_rate_hz;
        let filter = LowPass::new(self.config.filter_alpha);

        let accel_kind = if self.sensors.has(SensorKind::LinearAcceleration) {
            SensorKind::LinearAcceleration
        } else {
            SensorKind::Accelerometer
        };
        let accel_stream = self.sensors.open(accel_kind, rate)?;
        log::info!("opened {} stream at {rate} Hz", accel_kind.name());
        self.channels.push(Channel::new(
            ChannelKind::Accelerometer,
            accel_stream,
            filter,
            self.config.history_len,
        ));

        if self.sensors.has(SensorKind::Gyroscope) {
            let gyro_stream = self.sensors.open(SensorKind::Gyroscope, rate)?;
            log::info!("opened gyroscope stream at {rate} Hz");
            self.channels.push(Channel::new(
                ChannelKind::Gyroscope,
                gyro_stream,
                filter,
                self.config.history_len,
            ));
        } else {
            log::warn!("no gyroscope present; pitch stays at the initial frequency");
        }

        Ok(())
    }

    /// One-time program setup once a surface exists.
    pub fn surface_created(&mut self) -> Result<(), ScopeError> {
        let shaders = self
            .shaders
            .as_ref()
            .ok_or(ScopeError::NotInitialized("surface_created"))?;
        self.renderer
            .setup(self.graphics.as_mut(), &shaders.vertex, &shaders.fragment)?;
        Ok(())
    }

    pub fn surface_changed(&mut self, width: u32, height: u32) {
        self.graphics.set_viewport(width, height);
    }

    /// Per-frame pipeline: drain sensors, update the tone frequency, draw.
    ///
    /// Never fails observably: disabled channels are skipped, disabled audio
    /// keeps its last frequency, and rendering waits for `surface_created`.
    pub fn frame_tick(&mut self) {
        for channel in &mut self.channels {
            channel.pump();
        }

        if self.tone.is_running() {
            if let Some(gyro) = self.channel(ChannelKind::Gyroscope) {
                let hz = self.config.pitch.map(gyro.filtered().z);
                self.tone.set_frequency(hz);
            }
        }

        if self.renderer.is_ready() {
            // Draw order is fixed by channel construction order, so overlap
            // between traces is reproducible.
            let _ = self.renderer.draw(self.graphics.as_mut(), &self.channels);
        }
    }

    /// Start tone playback. Idempotent; a failure leaves audio disabled and
    /// does not affect the sensor/visual pipeline.
    pub fn init_audio(&mut self) -> Result<(), ScopeError> {
        match self.tone.init(self.audio.as_mut()) {
            Ok(()) => Ok(()),
            Err(err) => {
                log::warn!("audio unavailable, tone disabled: {err}");
                Err(err.into())
            }
        }
    }

    /// Stop sensor event generation; history and audio keep running state.
    /// Safe to call from the host's background-transition path.
    pub fn pause(&mut self) {
        for channel in &mut self.channels {
            channel.disable();
        }
    }

    /// Re-enable sensor streams at their original rate hint.
    pub fn resume(&mut self) {
        for channel in &mut self.channels {
            channel.enable();
        }
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, kind: ChannelKind) -> Option<&Channel> {
        self.channels.iter().find(|c| c.kind() == kind)
    }

    pub fn is_audio_running(&self) -> bool {
        self.tone.is_running()
    }

    pub fn current_frequency(&self) -> f32 {
        self.tone.frequency()
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }
}
