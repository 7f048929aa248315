//! Simulation clock. Owns tick count, elapsed time and the running flag.

use crate::types::{Millis, Tick};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimClock {
    pub current_tick: Tick,
    pub elapsed_ms:   Millis,
    pub running:      bool,
}

impl SimClock {
    /// A stopped clock at tick 0. Ticks are inert until `start()`.
    pub fn new() -> Self {
        Self {
            current_tick: 0,
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// Advance one tick of `dt`. Returns the new tick number.
    /// Panics if called while stopped; callers must check.
    pub fn advance(&mut self, dt: Millis) -> Tick {
        assert!(self.running, "advance() called on stopped clock");
        self.current_tick += 1;
        self.elapsed_ms += dt;
        self.current_tick
    }

    pub fn start(&mut self) { self.running = true;  }
    pub fn stop(&mut self)  { self.running = false; }
}

impl Default for SimClock {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_ticks_and_time() {
        let mut clock = SimClock::new();
        clock.start();
        assert_eq!(clock.advance(16.0), 1);
        assert_eq!(clock.advance(20.0), 2);
        assert_eq!(clock.elapsed_ms, 36.0);
    }

    #[test]
    #[should_panic(expected = "stopped clock")]
    fn advance_while_stopped_panics() {
        SimClock::new().advance(16.0);
    }
}
