//! Line-strip waveform rendering against a pluggable graphics device.
//!
//! The device trait mirrors the handful of GL ES 2.0 calls the original
//! surface needs: program compilation with named attribute/uniform lookup,
//! strided attribute binding, a color uniform, and line-strip draws. Real
//! context/surface creation lives outside this crate.

use crate::sensor::{Channel, ChannelKind, Vec3};

pub const VERTEX_SHADER_ASSET: &str = "shader.glslv";
pub const FRAGMENT_SHADER_ASSET: &str = "shader.glslf";

const POSITION_ATTRIBUTE: &str = "vPosition";
const VALUE_ATTRIBUTE: &str = "vSensorValue";
const COLOR_UNIFORM: &str = "uFragColor";

/// Per-axis trace colors: x, y, z.
const ACCEL_COLORS: [[f32; 4]; 3] = [
    [1.0, 1.0, 0.0, 1.0], // yellow
    [1.0, 0.0, 1.0, 1.0], // magenta
    [0.0, 1.0, 1.0, 1.0], // cyan
];
const GYRO_COLORS: [[f32; 4]; 3] = [
    [0.6, 0.6, 0.0, 1.0],
    [0.6, 0.0, 0.6, 1.0],
    [0.0, 0.6, 0.6, 1.0],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformId(pub u32);

/// Handles produced by one-time program setup.
#[derive(Debug, Clone, Copy)]
pub struct ProgramHandles {
    pub program: ProgramId,
    pub position: AttributeId,
    pub value: AttributeId,
    pub color: UniformId,
}

/// Errors that can occur during graphics setup.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Shader compilation failed: {0}")]
    ShaderCompile(String),
    #[error("Program link failed: {0}")]
    ProgramLink(String),
    #[error("Missing program input: {0}")]
    MissingInput(&'static str),
    #[error("Renderer used before program setup")]
    NotReady,
}

/// The rendering backend surface this crate draws through.
///
/// All draw-path methods are synchronous and bounded; none may fail
/// observably once `compile_program` has succeeded.
pub trait GraphicsDevice {
    /// Compile and link two shader sources, resolving the named attribute
    /// and uniform handles.
    fn compile_program(
        &mut self,
        vertex_src: &str,
        fragment_src: &str,
        position_attr: &'static str,
        value_attr: &'static str,
        color_uniform: &'static str,
    ) -> Result<ProgramHandles, RenderError>;

    fn set_viewport(&mut self, width: u32, height: u32);

    fn clear(&mut self, rgba: [f32; 4]);

    fn use_program(&mut self, program: ProgramId);

    /// Bind `values` as the source for a per-vertex float attribute.
    /// `stride_bytes` of zero means tightly packed.
    fn bind_attribute(&mut self, attribute: AttributeId, values: &[f32], stride_bytes: usize);

    fn set_color(&mut self, uniform: UniformId, rgba: [f32; 4]);

    fn draw_line_strip(&mut self, vertex_count: usize);
}

/// Draws each enabled channel's three axes as colored line strips over the
/// channel's current history window.
pub struct WaveformRenderer {
    handles: Option<ProgramHandles>,
    x_axis: Vec<f32>,
}

impl WaveformRenderer {
    /// Precompute the shared horizontal template: `history_len` values
    /// evenly spaced in `[-1, 1]`.
    pub fn new(history_len: usize) -> Self {
        assert!(history_len > 0, "history length must be non-zero");
        let last = (history_len - 1).max(1) as f32;
        let x_axis = (0..history_len)
            .map(|i| {
                let t = i as f32 / last;
                -1.0 * (1.0 - t) + 1.0 * t
            })
            .collect();
        Self {
            handles: None,
            x_axis,
        }
    }

    pub fn x_axis(&self) -> &[f32] {
        &self.x_axis
    }

    pub fn is_ready(&self) -> bool {
        self.handles.is_some()
    }

    /// One-time program setup; call when the surface is created.
    pub fn setup(
        &mut self,
        device: &mut dyn GraphicsDevice,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<(), RenderError> {
        let handles = device.compile_program(
            vertex_src,
            fragment_src,
            POSITION_ATTRIBUTE,
            VALUE_ATTRIBUTE,
            COLOR_UNIFORM,
        )?;
        log::info!("waveform program linked");
        self.handles = Some(handles);
        Ok(())
    }

    /// Draw all channels in fixed order: accelerometer x, y, z then
    /// gyroscope x, y, z, one line strip each. Requires `setup`.
    pub fn draw(
        &self,
        device: &mut dyn GraphicsDevice,
        channels: &[Channel],
    ) -> Result<(), RenderError> {
        let handles = self.handles.ok_or(RenderError::NotReady)?;

        device.clear([0.0, 0.0, 0.0, 1.0]);
        device.use_program(handles.program);
        device.bind_attribute(handles.position, &self.x_axis, 0);

        let stride = std::mem::size_of::<Vec3>();
        for channel in channels {
            if !channel.is_enabled() {
                continue;
            }
            let colors = match channel.kind() {
                ChannelKind::Accelerometer => &ACCEL_COLORS,
                ChannelKind::Gyroscope => &GYRO_COLORS,
            };
            let flat: &[f32] = bytemuck::cast_slice(channel.window());
            for (axis, color) in colors.iter().enumerate() {
                // Strided view starting at the axis component, one float per
                // history slot.
                device.bind_attribute(handles.value, &flat[axis..], stride);
                device.set_color(handles.color, *color);
                device.draw_line_strip(channel.history_len());
            }
        }
        Ok(())
    }
}
