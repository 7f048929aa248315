//! The simulation driver.
//!
//! EXECUTION ORDER per tick (fixed, never reordered):
//!   1. Steering:   controlled agent only, from the active intent
//!   2. Integrator: controlled agent only
//!   3. Wrapper:    every agent, in collection order
//!
//! RULES:
//!   - The engine exclusively owns the agents, the field and the intent.
//!   - Commands are applied between ticks; the next tick sees them whole.
//!   - Ticks delivered while stopped change nothing.
//!   - Agents never read each other; collection order is for stability only.

use crate::{
    agent::{Agent, AgentConfig},
    clock::SimClock,
    command::SimCommand,
    config::{SimConfig, Tuning},
    error::SimResult,
    event::SimEvent,
    field::Field,
    intent::ControlIntent,
    integrator::integrate,
    rng::{RngStream, SimRng},
    snapshot::{AgentSnapshot, SimSnapshot},
    steering::steer,
    types::{AgentIndex, AgentKey, Millis, Tick, CONTROLLED_AGENT},
};

pub struct SimEngine {
    pub clock: SimClock,
    seed:      u64,
    config:    SimConfig,
    field:     Field,
    intent:    ControlIntent,
    agents:    Vec<Agent>,
    key_rng:   SimRng,
}

impl SimEngine {
    /// Build an engine from a validated config. The clock starts stopped.
    pub fn new(seed: u64, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let field = Field::new(config.field.width, config.field.height)?;
        let mut engine = Self {
            clock:   SimClock::new(),
            seed,
            field,
            intent:  ControlIntent::Idle,
            agents:  Vec::new(),
            key_rng: SimRng::derived(seed, RngStream::AgentKeys),
            config,
        };
        let agent_config = engine.config.agent;
        engine.agents = engine.spawn_agents(agent_config)?;
        log::info!(
            "engine initialised: seed={seed} agents={} field={}x{}",
            engine.agents.len(),
            engine.field.width,
            engine.field.height
        );
        Ok(engine)
    }

    /// Engine over `SimConfig::default_test()`.
    pub fn build_test(seed: u64) -> SimResult<Self> {
        Self::new(seed, SimConfig::default_test())
    }

    /// The event describing the freshly built run.
    pub fn init_event(&self) -> SimEvent {
        SimEvent::RunInitialized {
            seed:   self.seed,
            agents: self.agent_keys(),
        }
    }

    // ── Commands ───────────────────────────────────────────────

    /// Apply a command between ticks.
    pub fn apply(&mut self, command: SimCommand) -> SimResult<Vec<SimEvent>> {
        log::debug!("tick={} command: {}", self.clock.current_tick, command.name());
        match command {
            SimCommand::Start => Ok(self.start().into_iter().collect()),
            SimCommand::Pause => Ok(self.pause().into_iter().collect()),
            SimCommand::Resize { width, height } => Ok(vec![self.resize(width, height)?]),
            SimCommand::SetIntent { intent } => Ok(self.set_intent(intent)),
            SimCommand::Reset { config } => Ok(vec![self.reset(config)?]),
        }
    }

    /// Start the clock. Returns `None` if it was already running.
    pub fn start(&mut self) -> Option<SimEvent> {
        if self.clock.running {
            return None;
        }
        self.clock.start();
        log::info!("simulation started at tick {}", self.clock.current_tick);
        Some(SimEvent::Started { tick: self.clock.current_tick })
    }

    /// Stop the clock. Returns `None` if it was already stopped.
    pub fn pause(&mut self) -> Option<SimEvent> {
        if !self.clock.running {
            return None;
        }
        self.clock.stop();
        log::info!("simulation paused at tick {}", self.clock.current_tick);
        Some(SimEvent::Paused { tick: self.clock.current_tick })
    }

    /// Replace the field. Positions are re-wrapped on the next tick.
    pub fn resize(&mut self, width: f64, height: f64) -> SimResult<SimEvent> {
        self.field = Field::new(width, height)?;
        log::info!("field resized to {width}x{height}");
        Ok(SimEvent::FieldResized {
            tick:  self.clock.current_tick,
            field: self.field,
        })
    }

    /// Replace the active intent. The first non-idle intent starts the clock.
    pub fn set_intent(&mut self, intent: ControlIntent) -> Vec<SimEvent> {
        if let ControlIntent::Direction { x, y } = intent {
            if x == 0.0 && y == 0.0 {
                log::warn!("zero-length direction intent; agent will not turn");
            }
        }
        self.intent = intent;

        let mut events = vec![SimEvent::IntentChanged {
            tick: self.clock.current_tick,
            intent,
        }];
        if !intent.is_idle() {
            events.extend(self.start());
        }
        events
    }

    /// Replace the agent collection with fresh agents built from `config`.
    /// The clock returns to tick 0, stopped, and the intent to idle.
    pub fn reset(&mut self, config: AgentConfig) -> SimResult<SimEvent> {
        config.validate()?;
        self.agents = self.spawn_agents(config)?;
        self.config.agent = config;
        self.clock = SimClock::new();
        self.intent = ControlIntent::Idle;
        log::info!("agents reset: {} agent(s)", self.agents.len());
        Ok(SimEvent::AgentsReset { agents: self.agent_keys() })
    }

    // ── Tick ───────────────────────────────────────────────────

    /// Advance one frame of `dt` milliseconds.
    ///
    /// Stopped engines and non-positive or non-finite `dt` are no-ops
    /// and return no events. `dt` above the frame ceiling is clamped.
    pub fn tick(&mut self, dt: Millis) -> Vec<SimEvent> {
        if !self.clock.running {
            log::trace!("tick ignored: engine stopped");
            return Vec::new();
        }
        if !(dt.is_finite() && dt > 0.0) {
            log::warn!("tick ignored: dt={dt}");
            return Vec::new();
        }

        let tuning = self.config.tuning;
        let applied = dt.min(tuning.max_frame_dt);
        let tick = self.clock.advance(applied);

        let mut events = vec![SimEvent::TickStarted { tick, dt: applied }];
        if applied < dt {
            log::debug!("tick={tick} dt {dt} clamped to {applied}");
            events.push(SimEvent::FrameClamped { tick, requested: dt, applied });
        }

        self.step(applied, &tuning);

        if let Some(a) = self.agents.get(CONTROLLED_AGENT) {
            log::debug!(
                "tick={tick} {}: pos=({:.2}, {:.2}) v={:.4} angle={:.3} tilt={:.5}",
                self.intent.kind(),
                a.position.x,
                a.position.y,
                a.v,
                a.angle,
                a.tilt
            );
        }

        events.push(SimEvent::TickCompleted { tick });
        events
    }

    /// Run `n` ticks of `dt` each. Returns the final tick number.
    pub fn run_ticks(&mut self, n: u64, dt: Millis) -> Tick {
        for _ in 0..n {
            self.tick(dt);
        }
        self.clock.current_tick
    }

    fn step(&mut self, dt: Millis, tuning: &Tuning) {
        if let Some(controlled) = self.agents.get_mut(CONTROLLED_AGENT) {
            let cmd = steer(controlled, &self.intent, dt, tuning);
            integrate(controlled, cmd, dt, tuning);
        }
        for agent in &mut self.agents {
            agent.position = self.field.advance(agent.position, agent.velocity, dt);
        }
    }

    // ── Read access ────────────────────────────────────────────

    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            tick:       self.clock.current_tick,
            elapsed_ms: self.clock.elapsed_ms,
            running:    self.clock.running,
            field:      self.field,
            intent:     self.intent,
            agents:     self.agents.iter().map(AgentSnapshot::from).collect(),
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, index: AgentIndex) -> Option<&Agent> {
        self.agents.get(index)
    }

    pub fn agent_by_key(&self, key: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.key == key)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn intent(&self) -> ControlIntent {
        self.intent
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn agent_keys(&self) -> Vec<AgentKey> {
        self.agents.iter().map(|a| a.key.clone()).collect()
    }

    fn spawn_agents(&mut self, config: AgentConfig) -> SimResult<Vec<Agent>> {
        (0..self.config.agent_count)
            .map(|_| Agent::new(self.next_key(), config))
            .collect()
    }

    fn next_key(&mut self) -> AgentKey {
        let id = self.key_rng.uuid().simple().to_string();
        format!("agent-{}", &id[..6])
    }
}
