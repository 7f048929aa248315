use serde::{Deserialize, Serialize};

use crate::{agent::AgentConfig, intent::ControlIntent};

/// All commands the surrounding layers may issue between ticks.
/// Variants are only ever appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SimCommand {
    // ── Clock control ─────────────────────────────
    Start,
    Pause,

    // ── Viewport ──────────────────────────────────
    Resize { width: f64, height: f64 },

    // ── Control ───────────────────────────────────
    /// Replaces the active intent; a non-idle intent also starts the clock.
    SetIntent { intent: ControlIntent },

    // ── Lifecycle ─────────────────────────────────
    /// Fresh agent collection with these limits; clock back to tick 0.
    Reset { config: AgentConfig },
}

impl SimCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start            => "start",
            Self::Pause            => "pause",
            Self::Resize { .. }    => "resize",
            Self::SetIntent { .. } => "set_intent",
            Self::Reset { .. }     => "reset",
        }
    }
}
