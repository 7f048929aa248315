//! Steering and integration engine for craft flying in a toroidal field.
//!
//! Per tick the [`engine::SimEngine`] runs a fixed pipeline:
//! [`steering::steer`] → [`integrator::integrate`] → [`field::Field::advance`].

pub mod agent;
pub mod calc;
pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod field;
pub mod input;
pub mod intent;
pub mod integrator;
pub mod rng;
pub mod snapshot;
pub mod steering;
pub mod types;
