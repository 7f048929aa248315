//! Agent kinematic state and performance limits.

use crate::{
    error::{SimError, SimResult},
    types::AgentKey,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Per-agent performance limits, fixed at creation.
/// Speeds are in field units per millisecond, `a_max` in units/ms².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub v_min: f64,
    pub v_max: f64,
    pub a_max: f64,
}

impl AgentConfig {
    /// Reject configs that would break the speed invariant.
    pub fn validate(&self) -> SimResult<()> {
        let reject = |reason: String| Err(SimError::InvalidAgentConfig { reason });

        if !(self.v_min.is_finite() && self.v_max.is_finite() && self.a_max.is_finite()) {
            return reject(format!("non-finite limits in {self:?}"));
        }
        if self.v_min < 0.0 {
            return reject(format!("v_min {} is negative", self.v_min));
        }
        if self.v_min > self.v_max {
            return reject(format!("v_min {} exceeds v_max {}", self.v_min, self.v_max));
        }
        if self.a_max < 0.0 {
            return reject(format!("a_max {} is negative", self.a_max));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        // 100 units/s cruise, double that flat out.
        let speed = 100.0 / 1000.0;
        Self {
            v_min: speed,
            v_max: speed * 2.0,
            a_max: speed * 2.0 / 1000.0,
        }
    }
}

/// A single steerable craft.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub key:      AgentKey,
    pub config:   AgentConfig,
    pub position: DVec2,
    pub velocity: DVec2,
    /// Scalar speed, always `velocity.length()` after an integration step.
    pub v:        f64,
    /// Heading in radians, `atan2(velocity.y, velocity.x)`.
    pub angle:    f64,
    /// Smoothed, signed heading-delta history. Unbounded, only damped.
    pub tilt:     f64,
}

impl Agent {
    /// Create an agent at the origin cruising along +x at `v_min`.
    pub fn new(key: AgentKey, config: AgentConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            key,
            config,
            position: DVec2::ZERO,
            velocity: DVec2::new(config.v_min, 0.0),
            v:        config.v_min,
            angle:    0.0,
            tilt:     0.0,
        })
    }
}
