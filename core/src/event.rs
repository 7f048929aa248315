//! Events emitted by the engine.
//!
//! Every tick and every applied command reports what happened as a list
//! of events. The engine never reads them back; they exist for the
//! surrounding layers (logging, replay, the runner's IPC stream).

use crate::{
    field::Field,
    intent::ControlIntent,
    types::{AgentKey, Millis, Tick},
};
use serde::{Deserialize, Serialize};

/// Variants are only ever appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Engine events ──────────────────────────────
    TickStarted {
        tick: Tick,
        dt: Millis,
    },
    TickCompleted {
        tick: Tick,
    },
    /// The delivered dt exceeded the frame ceiling and was cut down.
    FrameClamped {
        tick: Tick,
        requested: Millis,
        applied: Millis,
    },
    RunInitialized {
        seed: u64,
        agents: Vec<AgentKey>,
    },

    // ── Command events ─────────────────────────────
    Started {
        tick: Tick,
    },
    Paused {
        tick: Tick,
    },
    IntentChanged {
        tick: Tick,
        intent: ControlIntent,
    },
    FieldResized {
        tick: Tick,
        field: Field,
    },
    AgentsReset {
        agents: Vec<AgentKey>,
    },
}

impl SimEvent {
    /// Stable name of the variant, for log lines.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::TickStarted { .. }    => "tick_started",
            Self::TickCompleted { .. }  => "tick_completed",
            Self::FrameClamped { .. }   => "frame_clamped",
            Self::RunInitialized { .. } => "run_initialized",
            Self::Started { .. }        => "started",
            Self::Paused { .. }         => "paused",
            Self::IntentChanged { .. }  => "intent_changed",
            Self::FieldResized { .. }   => "field_resized",
            Self::AgentsReset { .. }    => "agents_reset",
        }
    }
}
