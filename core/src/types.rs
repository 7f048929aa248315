//! Shared primitive types used across the entire simulation.

/// A simulation tick. One tick = one delivered frame.
pub type Tick = u64;

/// Frame delta time in milliseconds.
pub type Millis = f64;

/// The opaque, boundary-facing identifier of an agent.
/// Stable for the agent's lifetime; used by renderers to bind sprites.
pub type AgentKey = String;

/// Dense index of an agent inside the engine's agent collection.
pub type AgentIndex = usize;

/// The agent that receives the active control intent.
pub const CONTROLLED_AGENT: AgentIndex = 0;
