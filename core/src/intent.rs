//! Control intents: the single active command for the controlled agent.

use serde::{Deserialize, Serialize};

/// What the controlled agent should do this tick.
/// Exactly one variant is active; switching is instantaneous.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum ControlIntent {
    /// No active command; the agent coasts and its tilt decays.
    #[default]
    Idle,
    /// Raw stick inputs, conventionally in [-1, 1].
    Thrust { main: f64, side: f64 },
    /// Desired heading vector. Need not be normalised; zero is treated as idle.
    Direction { x: f64, y: f64 },
    /// World-space point to circle around.
    Orbit { x: f64, y: f64 },
}

impl ControlIntent {
    /// Assemble an intent from optional sources.
    ///
    /// Precedence: orbit, then direction, then thrust. Nothing set is idle.
    pub fn from_parts(
        thrust: Option<(f64, f64)>,
        direction: Option<(f64, f64)>,
        orbit: Option<(f64, f64)>,
    ) -> Self {
        match (orbit, direction, thrust) {
            (Some((x, y)), _, _) => Self::Orbit { x, y },
            (None, Some((x, y)), _) => Self::Direction { x, y },
            (None, None, Some((main, side))) => Self::Thrust { main, side },
            (None, None, None) => Self::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Idle             => "idle",
            Self::Thrust { .. }    => "thrust",
            Self::Direction { .. } => "direction",
            Self::Orbit { .. }     => "orbit",
        }
    }
}
