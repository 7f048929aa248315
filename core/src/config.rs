use crate::{
    agent::AgentConfig,
    error::{SimError, SimResult},
    types::Millis,
};
use serde::{Deserialize, Serialize};

/// Tunable constants of the steering and integration stages.
///
/// None of these are derived quantities; the defaults are the values the
/// behaviour was tuned with and must be kept for compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Main-thrust input to fractional speed change per ms.
    #[serde(default = "default_thrust_scale")]
    pub thrust_scale: f64,
    /// Time constant (ms) of the tilt smoothing filter.
    #[serde(default = "default_tilt_damping")]
    pub tilt_damping: f64,
    /// Ceiling applied to incoming frame deltas.
    #[serde(default = "default_max_frame_dt")]
    pub max_frame_dt: Millis,
}

fn default_thrust_scale() -> f64 { 0.001 }
fn default_tilt_damping() -> f64 { 200.0 }
fn default_max_frame_dt() -> Millis { 100.0 }

impl Default for Tuning {
    fn default() -> Self {
        Self {
            thrust_scale: default_thrust_scale(),
            tilt_damping: default_tilt_damping(),
            max_frame_dt: default_max_frame_dt(),
        }
    }
}

impl Tuning {
    /// The tilt filter only decays while `tilt_damping > dt`, and dt is
    /// capped at `max_frame_dt`.
    pub fn validate(&self) -> SimResult<()> {
        let reject = |reason: String| Err(SimError::InvalidTuning { reason });

        if !self.thrust_scale.is_finite() {
            return reject(format!("thrust_scale {} is not finite", self.thrust_scale));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return reject(format!("max_frame_dt {} must be positive", self.max_frame_dt));
        }
        if !(self.tilt_damping.is_finite() && self.tilt_damping > self.max_frame_dt) {
            return reject(format!(
                "tilt_damping {} must exceed max_frame_dt {}",
                self.tilt_damping, self.max_frame_dt
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width:  f64,
    pub height: f64,
}

impl Default for FieldSize {
    fn default() -> Self {
        Self { width: 300.0, height: 300.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default = "default_agent_count")]
    pub agent_count: usize,
    #[serde(default)]
    pub field: FieldSize,
    #[serde(default)]
    pub tuning: Tuning,
}

fn default_agent_count() -> usize { 1 }

impl SimConfig {
    /// Load from `<data_dir>/airspace.json`.
    /// In tests, use SimConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/airspace.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Bad config in {path}: {e}"))?;
        log::info!("Loaded config from {path}");
        Ok(config)
    }

    /// Parse and validate a config document.
    pub fn from_json(content: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        self.agent.validate()?;
        self.tuning.validate()?;
        if self.agent_count == 0 {
            return Err(SimError::InvalidAgentConfig {
                reason: "agent_count must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            agent: AgentConfig { v_min: 0.1, v_max: 0.2, a_max: 0.0002 },
            agent_count: 1,
            field: FieldSize::default(),
            tuning: Tuning::default(),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            agent: AgentConfig::default(),
            agent_count: default_agent_count(),
            field: FieldSize::default(),
            tuning: Tuning::default(),
        }
    }
}
