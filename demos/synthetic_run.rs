//! Run the full pipeline against synthetic sensors, a tracing graphics
//! device, and the real cpal output device.
//!
//! ```sh
//! RUST_LOG=info cargo run --example synthetic_run
//! ```

use std::time::Duration;

use anyhow::Result;
use motion_scope::{
    AttributeId, CpalBackend, DirAssets, GraphicsDevice, MotionScope, ProgramHandles, ProgramId,
    RenderError, ScopeConfig, SensorKind, SyntheticHost, UniformId,
};

/// Headless device that only counts draw calls.
#[derive(Default)]
struct TraceDevice {
    draws: u64,
}

impl GraphicsDevice for TraceDevice {
    fn compile_program(
        &mut self,
        _vertex_src: &str,
        _fragment_src: &str,
        _position_attr: &'static str,
        _value_attr: &'static str,
        _color_uniform: &'static str,
    ) -> Result<ProgramHandles, RenderError> {
        Ok(ProgramHandles {
            program: ProgramId(1),
            position: AttributeId(1),
            value: AttributeId(2),
            color: UniformId(3),
        })
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        log::info!("viewport {width}x{height}");
    }

    fn clear(&mut self, _rgba: [f32; 4]) {}
    fn use_program(&mut self, _program: ProgramId) {}
    fn bind_attribute(&mut self, _attribute: AttributeId, _values: &[f32], _stride_bytes: usize) {}
    fn set_color(&mut self, _uniform: UniformId, _rgba: [f32; 4]) {}

    fn draw_line_strip(&mut self, _vertex_count: usize) {
        self.draws += 1;
        if self.draws % 600 == 0 {
            log::debug!("{} line strips drawn", self.draws);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = ScopeConfig::default();
    log::info!("config: {}", serde_json::to_string(&config)?);

    let sensors = SyntheticHost::new(vec![
        SensorKind::LinearAcceleration,
        SensorKind::Gyroscope,
    ])
    .with_signal(0.5, 4.0);

    let mut scope = MotionScope::new(
        config,
        Box::new(sensors),
        Box::new(TraceDevice::default()),
        Box::new(CpalBackend::new()),
    );

    scope.initialize(&DirAssets::new("assets"))?;
    scope.surface_created()?;
    scope.surface_changed(800, 600);

    if let Err(err) = scope.init_audio() {
        log::warn!("running without audio: {err}");
    }

    // ~5 seconds at a 60 fps cadence, with a pause/resume in the middle.
    for frame in 0..300 {
        if frame == 120 {
            log::info!("pausing sensors");
            scope.pause();
        }
        if frame == 180 {
            log::info!("resuming sensors");
            scope.resume();
        }

        scope.frame_tick();

        if frame % 60 == 0 {
            let gyro_z = scope
                .channel(motion_scope::ChannelKind::Gyroscope)
                .map(|c| c.filtered().z)
                .unwrap_or(0.0);
            log::info!(
                "frame {frame}: gyro z {gyro_z:+.3} rad/s -> {:.1} Hz",
                scope.current_frequency()
            );
        }
        std::thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
