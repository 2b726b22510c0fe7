//! Shared scripted fakes for pipeline integration tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use motion_scope::{
    AttributeId, AudioBackend, AudioError, GraphicsDevice, ProgramHandles, ProgramId, RenderError,
    SensorError, SensorEvent, SensorHost, SensorKind, SensorStream, StreamSpec, UniformId, Vec3,
};

type EventQueue = Arc<Mutex<VecDeque<SensorEvent>>>;

/// Stream fed by a shared queue the test injects into.
pub struct ScriptedStream {
    queue: EventQueue,
    enabled: Arc<AtomicBool>,
}

impl SensorStream for ScriptedStream {
    fn enable(&mut self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    fn disable(&mut self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    fn drain_into(&mut self, out: &mut Vec<SensorEvent>) -> usize {
        let mut queue = self.queue.lock().unwrap();
        let drained = queue.len();
        out.extend(queue.drain(..));
        drained
    }
}

/// Sensor host whose streams replay events injected by the test, with
/// visibility into each stream's enabled state.
#[derive(Default)]
pub struct ScriptedHost {
    kinds: Vec<SensorKind>,
    queues: HashMap<SensorKind, EventQueue>,
    enabled: HashMap<SensorKind, Arc<AtomicBool>>,
}

impl ScriptedHost {
    pub fn new(kinds: Vec<SensorKind>) -> Self {
        let enabled = kinds
            .iter()
            .map(|kind| (*kind, Arc::new(AtomicBool::new(false))))
            .collect();
        Self {
            kinds,
            queues: HashMap::new(),
            enabled,
        }
    }

    fn queue(&mut self, kind: SensorKind) -> EventQueue {
        self.queues.entry(kind).or_default().clone()
    }

    /// Handle for pushing events to every stream of `kind`.
    pub fn injector(&mut self, kind: SensorKind) -> Injector {
        Injector {
            kind,
            queue: self.queue(kind),
        }
    }

    /// Flag tracking whether the stream for `kind` is generating events;
    /// stays valid after the host moves into the pipeline.
    pub fn enabled_flag(&self, kind: SensorKind) -> Arc<AtomicBool> {
        self.enabled[&kind].clone()
    }
}

impl SensorHost for ScriptedHost {
    fn has(&self, kind: SensorKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn open(
        &mut self,
        kind: SensorKind,
        _rate_hint_hz: u32,
    ) -> Result<Box<dyn SensorStream>, SensorError> {
        if !self.has(kind) {
            return Err(SensorError::NotPresent(kind.name()));
        }
        let enabled = self.enabled[&kind].clone();
        enabled.store(true, Ordering::SeqCst);
        Ok(Box::new(ScriptedStream {
            queue: self.queue(kind),
            enabled,
        }))
    }
}

pub struct Injector {
    kind: SensorKind,
    queue: EventQueue,
}

impl Injector {
    pub fn push(&self, value: Vec3) {
        self.queue.lock().unwrap().push_back(SensorEvent {
            kind: self.kind,
            value,
        });
    }
}

/// One recorded graphics call, reduced to what the tests assert on.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsCall {
    Viewport(u32, u32),
    Clear,
    UseProgram,
    BindPosition { len: usize },
    BindValue { first: f32, stride: usize },
    SetColor([f32; 4]),
    DrawLineStrip(usize),
}

/// Graphics device that records every call instead of drawing.
#[derive(Default)]
pub struct RecordingDevice {
    pub calls: Vec<GraphicsCall>,
    pub compiled: Option<(String, String)>,
    pub fail_compile: bool,
    position_attr: u32,
}

impl RecordingDevice {
    /// Device whose program compilation always fails.
    pub fn failing() -> Self {
        Self {
            fail_compile: true,
            ..Default::default()
        }
    }

    pub fn draw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, GraphicsCall::DrawLineStrip(_)))
            .count()
    }

    pub fn colors(&self) -> Vec<[f32; 4]> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                GraphicsCall::SetColor(rgba) => Some(*rgba),
                _ => None,
            })
            .collect()
    }
}

impl GraphicsDevice for RecordingDevice {
    fn compile_program(
        &mut self,
        vertex_src: &str,
        fragment_src: &str,
        _position_attr: &'static str,
        _value_attr: &'static str,
        _color_uniform: &'static str,
    ) -> Result<ProgramHandles, RenderError> {
        if self.fail_compile {
            return Err(RenderError::ShaderCompile("scripted failure".into()));
        }
        self.compiled = Some((vertex_src.to_string(), fragment_src.to_string()));
        self.position_attr = 1;
        Ok(ProgramHandles {
            program: ProgramId(1),
            position: AttributeId(1),
            value: AttributeId(2),
            color: UniformId(3),
        })
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.calls.push(GraphicsCall::Viewport(width, height));
    }

    fn clear(&mut self, _rgba: [f32; 4]) {
        self.calls.push(GraphicsCall::Clear);
    }

    fn use_program(&mut self, _program: ProgramId) {
        self.calls.push(GraphicsCall::UseProgram);
    }

    fn bind_attribute(&mut self, attribute: AttributeId, values: &[f32], stride_bytes: usize) {
        if attribute.0 == self.position_attr {
            self.calls.push(GraphicsCall::BindPosition {
                len: values.len(),
            });
        } else {
            self.calls.push(GraphicsCall::BindValue {
                first: values[0],
                stride: stride_bytes,
            });
        }
    }

    fn set_color(&mut self, _uniform: UniformId, rgba: [f32; 4]) {
        self.calls.push(GraphicsCall::SetColor(rgba));
    }

    fn draw_line_strip(&mut self, vertex_count: usize) {
        self.calls.push(GraphicsCall::DrawLineStrip(vertex_count));
    }
}

/// Audio backend that captures the render closure so tests invoke the pull
/// callback themselves.
#[derive(Default)]
pub struct ManualAudio {
    render: Arc<Mutex<Option<Box<dyn FnMut(&mut [f32]) + Send>>>>,
    pub fail: bool,
    running: bool,
}

impl ManualAudio {
    /// Backend whose start always fails, leaving audio disabled.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Shared handle to the captured callback, usable after the backend has
    /// been boxed into the pipeline.
    pub fn callback(&self) -> PullHandle {
        PullHandle {
            render: self.render.clone(),
        }
    }
}

pub struct PullHandle {
    render: Arc<Mutex<Option<Box<dyn FnMut(&mut [f32]) + Send>>>>,
}

impl PullHandle {
    /// Run one pull of `frames * channels` samples; panics if audio never
    /// started.
    pub fn pull(&self, out: &mut [f32]) {
        let mut guard = self.render.lock().unwrap();
        guard.as_mut().expect("audio not started")(out);
    }

    pub fn is_started(&self) -> bool {
        self.render.lock().unwrap().is_some()
    }
}

impl AudioBackend for ManualAudio {
    fn start(
        &mut self,
        _spec: StreamSpec,
        render: Box<dyn FnMut(&mut [f32]) + Send>,
    ) -> Result<(), AudioError> {
        if self.fail {
            return Err(AudioError::NoDevice);
        }
        *self.render.lock().unwrap() = Some(render);
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) {
        *self.render.lock().unwrap() = None;
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

/// In-memory asset source with the two shader sources preloaded.
pub struct MemoryAssets {
    pub files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn with_shaders() -> Self {
        let mut files = HashMap::new();
        files.insert("shader.glslv".to_string(), b"vertex".to_vec());
        files.insert("shader.glslf".to_string(), b"fragment".to_vec());
        Self { files }
    }

    pub fn empty() -> Self {
        Self {
            files: HashMap::new(),
        }
    }
}

impl motion_scope::AssetSource for MemoryAssets {
    fn load(&self, name: &str) -> Result<Vec<u8>, motion_scope::AssetError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| motion_scope::AssetError::NotFound(name.to_string()))
    }
}
