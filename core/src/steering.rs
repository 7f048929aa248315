//! Steering controller: (agent, intent, dt) -> acceleration command.
//!
//! Pure. Every degenerate input (zero dt, zero speed, zero-length heading,
//! unreachable orbit) yields the zero command rather than a non-finite one.

use crate::{
    agent::Agent,
    calc::length,
    config::Tuning,
    intent::ControlIntent,
    types::Millis,
};

/// Lateral and main acceleration-equivalents for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Steer {
    pub a_side: f64,
    pub a_main: f64,
}

impl Steer {
    pub const NONE: Steer = Steer { a_side: 0.0, a_main: 0.0 };

    pub fn is_none(&self) -> bool {
        self.a_side == 0.0 && self.a_main == 0.0
    }

    fn lateral(a_side: f64) -> Self {
        Self { a_side, a_main: 0.0 }
    }
}

/// Compute the command for `agent` under `intent`.
pub fn steer(agent: &Agent, intent: &ControlIntent, dt: Millis, tuning: &Tuning) -> Steer {
    if !(dt.is_finite() && dt > 0.0) {
        return Steer::NONE;
    }

    let cmd = match *intent {
        ControlIntent::Idle => Steer::NONE,
        ControlIntent::Thrust { main, side } => Steer {
            a_side: side * agent.config.a_max,
            a_main: main * tuning.thrust_scale,
        },
        ControlIntent::Direction { x, y } => toward(agent, x, y),
        ControlIntent::Orbit { x, y } => orbit(agent, x, y, dt),
    };

    if cmd.a_side.is_finite() && cmd.a_main.is_finite() {
        cmd
    } else {
        Steer::NONE
    }
}

/// Turn toward heading `(x, y)` in proportion to the sine of the error.
fn toward(agent: &Agent, x: f64, y: f64) -> Steer {
    let d = length(x, y);
    if d == 0.0 || agent.v == 0.0 {
        return Steer::NONE;
    }
    let vel = agent.velocity;
    let cross = x * vel.y - y * vel.x;
    Steer::lateral(cross / agent.v / d * agent.config.a_max)
}

/// Lateral command that puts the agent back on the circle through its
/// current position around `(cx, cy)` after one step of `dt`.
///
/// Solves the quadratic in the turn rate exactly and takes the root of
/// smaller magnitude. A negative discriminant means the circle cannot be
/// reached in one step; no correction is applied.
fn orbit(agent: &Agent, cx: f64, cy: f64, dt: Millis) -> Steer {
    let v = agent.v;
    if v == 0.0 {
        return Steer::NONE;
    }
    let vel = agent.velocity;
    let p = agent.position.x - cx;
    let q = agent.position.y - cy;

    // closing rate and tangential terms
    let inn = p * vel.x + q * vel.y;
    let out = p * vel.y - q * vel.x;

    let b = out * 2.0 / dt;
    let v2 = v * v;
    let d = b * b - 4.0 * v2 * (v2 + inn * 2.0 / dt);
    if d < 0.0 {
        return Steer::NONE;
    }

    let sd = d.sqrt();
    let m1 = (b - sd) / 2.0 / v2 * v / dt;
    let m2 = (-b - sd) / 2.0 / v2 * v / dt;
    Steer::lateral(if m1.abs() <= m2.abs() { -m1 } else { m2 })
}
