//! One sensor stream paired with its filter and history buffer.

use super::{HistoryBuffer, LowPass, SensorEvent, SensorKind, SensorStream, Vec3};

/// Which logical channel a stream feeds. Each kind accepts a fixed set of
/// platform event tags, so the accelerometer channel works whether the
/// platform delivers raw or gravity-compensated samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Accelerometer,
    Gyroscope,
}

impl ChannelKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Accelerometer => "accelerometer",
            Self::Gyroscope => "gyroscope",
        }
    }

    /// Whether an event with the given tag belongs to this channel.
    pub fn accepts(&self, kind: SensorKind) -> bool {
        match self {
            Self::Accelerometer => matches!(
                kind,
                SensorKind::Accelerometer | SensorKind::LinearAcceleration
            ),
            Self::Gyroscope => kind == SensorKind::Gyroscope,
        }
    }
}

/// A platform sensor stream, its running filter value, and its history.
///
/// Created during initialization (accelerometer always, gyroscope only when
/// present), disabled on pause, re-enabled on resume. Disabling freezes the
/// history at the last pushed value.
pub struct Channel {
    kind: ChannelKind,
    stream: Box<dyn SensorStream>,
    filter: LowPass,
    filtered: Vec3,
    history: HistoryBuffer,
    enabled: bool,
    scratch: Vec<SensorEvent>,
}

impl Channel {
    pub fn new(
        kind: ChannelKind,
        stream: Box<dyn SensorStream>,
        filter: LowPass,
        history_len: usize,
    ) -> Self {
        Self {
            kind,
            stream,
            filter,
            filtered: Vec3::ZERO,
            history: HistoryBuffer::new(history_len),
            enabled: true,
            scratch: Vec::with_capacity(64),
        }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The most recent filtered sample.
    pub fn filtered(&self) -> Vec3 {
        self.filtered
    }

    /// Contiguous window of the last N filtered samples, oldest first.
    pub fn window(&self) -> &[Vec3] {
        self.history.window()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drain all pending events non-blockingly, feed each through the filter
    /// in arrival order, then push the filter value into the history exactly
    /// once. A frame with zero events re-pushes the previous value, which
    /// renders as a flat segment. Disabled channels are skipped entirely.
    pub fn pump(&mut self) {
        if !self.enabled {
            return;
        }

        self.scratch.clear();
        self.stream.drain_into(&mut self.scratch);
        for event in &self.scratch {
            if self.kind.accepts(event.kind) {
                self.filtered = self.filter.update(self.filtered, event.value);
            }
        }

        self.history.push(self.filtered);
    }

    /// Stop event generation; history stays frozen at the last pushed value.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.stream.disable();
    }

    /// Restart event generation at the stream's original rate hint.
    pub fn enable(&mut self) {
        self.stream.enable();
        self.enabled = true;
    }
}
