//! Integrator: applies a steering command to an agent's velocity,
//! enforces the speed limits and updates heading and tilt.

use crate::{
    agent::Agent,
    calc::{clamp, length, wrap},
    config::Tuning,
    steering::Steer,
    types::Millis,
};
use glam::DVec2;
use std::f64::consts::PI;

/// Advance `agent`'s velocity, speed, heading and tilt by one tick.
///
/// With no command the velocity is untouched and tilt decays toward zero.
pub fn integrate(agent: &mut Agent, cmd: Steer, dt: Millis, tuning: &Tuning) {
    let damping = tuning.tilt_damping;

    if cmd.is_none() {
        agent.tilt = agent.tilt * (damping - dt) / damping;
        return;
    }

    let a_max = agent.config.a_max;
    let a_main = cmd.a_main;
    // lateral acceleration -> turn rate
    let turn = if agent.v > 0.0 {
        clamp(cmd.a_side, -a_max, a_max) / agent.v
    } else {
        0.0
    };

    let mut vel = agent.velocity;

    // Main thrust acts along the current direction of travel.
    vel.x += vel.x * a_main * dt;
    vel.y += vel.y * a_main * dt;

    // First-order rotation by turn * dt; y uses the updated x.
    vel.x += vel.y * turn * dt;
    vel.y += -vel.x * turn * dt;

    let old_angle = agent.angle;
    let len = length(vel.x, vel.y);
    if len > 0.0 {
        agent.v = clamp(len, agent.config.v_min, agent.config.v_max);
        vel *= agent.v / len;
        agent.angle = vel.y.atan2(vel.x);
    } else {
        // Thrust cancelled the velocity: keep the heading at minimum speed.
        agent.v = agent.config.v_min;
        vel = DVec2::from_angle(old_angle) * agent.v;
    }
    agent.velocity = vel;

    agent.tilt = (agent.tilt * (damping - dt) + wrap(old_angle - agent.angle, -PI, PI)) / damping;
}
