//! Read-only view of the simulation for the rendering collaborator.
//!
//! A snapshot is a copy: it stays valid after the next tick, but it
//! describes only the tick it was taken at.

use crate::{
    agent::Agent,
    field::Field,
    intent::ControlIntent,
    types::{AgentKey, Millis, Tick},
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub key:      AgentKey,
    pub position: DVec2,
    pub velocity: DVec2,
    pub v:        f64,
    pub angle:    f64,
    pub tilt:     f64,
}

impl From<&Agent> for AgentSnapshot {
    fn from(a: &Agent) -> Self {
        Self {
            key:      a.key.clone(),
            position: a.position,
            velocity: a.velocity,
            v:        a.v,
            angle:    a.angle,
            tilt:     a.tilt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub tick:       Tick,
    pub elapsed_ms: Millis,
    pub running:    bool,
    pub field:      Field,
    pub intent:     ControlIntent,
    pub agents:     Vec<AgentSnapshot>,
}
