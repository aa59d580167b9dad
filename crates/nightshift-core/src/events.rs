//! Outbound signals - fire-and-forget events for the rendering and audio
//! layers.
//!
//! The engine queues signals as side effects of ticks and commands; the
//! embedding layer drains the queue once per frame and reacts (play a
//! sound, flash static, record analytics). Nothing here is awaited or
//! acknowledged.

use serde::{Deserialize, Serialize};

use crate::session::{AntagonistId, FailureCause, View};

/// Synthesized audio cues the presentation layer knows how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// Light or camera toggle click.
    Switch,
    /// Door slam (toggle or a blocked antagonist hitting it).
    Door,
    /// Jumpscare sting.
    Scare,
    /// Camera blip when movement is detected on the monitor.
    Blip,
}

/// One outbound event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// The state machine changed phase.
    PhaseChanged(View),
    /// Transient camera disturbance while the monitor is open.
    CameraDisturbance { duration_ms: u64 },
    /// Ambient room/drone audio should start or stop.
    Ambience(bool),
    /// Monitor static hiss should start or stop.
    MonitorStatic(bool),
    /// Play a one-shot audio cue.
    Sound(SoundCue),
    /// The shift was survived.
    NightCompleted { night: u32 },
    /// The shift was lost.
    NightFailed {
        night: u32,
        cause: FailureCause,
        antagonist: AntagonistId,
    },
}

/// FIFO queue of pending signals, drained by the embedding layer.
#[derive(Debug, Clone, Default)]
pub struct SignalQueue {
    signals: Vec<Signal>,
}

impl SignalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    /// Take all pending signals, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Pending signals without consuming them.
    pub fn pending(&self) -> &[Signal] {
        &self.signals
    }
}
