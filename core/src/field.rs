//! The toroidal field and the position wrapper.
//!
//! The field is a box centred at the origin. Positions leaving one edge
//! re-enter on the opposite edge.

use crate::{
    calc::wrap,
    error::{SimError, SimResult},
    types::Millis,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Toroidal bounds of the simulated world.
/// Replaced as a whole on resize; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width:  f64,
    pub height: f64,
    pub x_min:  f64,
    pub x_max:  f64,
    pub y_min:  f64,
    pub y_max:  f64,
}

impl Field {
    /// Build a field of the given size centred at the origin.
    pub fn new(width: f64, height: f64) -> SimResult<Self> {
        let valid = |s: f64| s.is_finite() && s > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SimError::InvalidField { width, height });
        }
        Ok(Self {
            width,
            height,
            x_min: -width / 2.0,
            x_max:  width / 2.0,
            y_min: -height / 2.0,
            y_max:  height / 2.0,
        })
    }

    /// Euler-step `position` by `velocity * dt` and wrap it into the field.
    pub fn advance(&self, position: DVec2, velocity: DVec2, dt: Millis) -> DVec2 {
        DVec2::new(
            wrap(position.x + velocity.x * dt, self.x_min, self.x_max),
            wrap(position.y + velocity.y * dt, self.y_min, self.y_max),
        )
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x_min && p.x < self.x_max && p.y >= self.y_min && p.y < self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_is_centred_on_the_origin() {
        let f = Field::new(300.0, 200.0).unwrap();
        assert_eq!((f.x_min, f.x_max), (-150.0, 150.0));
        assert_eq!((f.y_min, f.y_max), (-100.0, 100.0));
        assert!(f.x_min < f.x_max && f.y_min < f.y_max);
    }

    #[test]
    fn degenerate_sizes_are_rejected() {
        assert!(Field::new(0.0, 100.0).is_err());
        assert!(Field::new(100.0, -1.0).is_err());
        assert!(Field::new(f64::NAN, 100.0).is_err());
        assert!(Field::new(100.0, f64::INFINITY).is_err());
    }

    #[test]
    fn advance_wraps_across_both_edges() {
        let f = Field::new(300.0, 300.0).unwrap();

        let p = f.advance(DVec2::new(145.0, 0.0), DVec2::new(0.5, 0.0), 20.0);
        assert_eq!(p, DVec2::new(-145.0, 0.0));

        let p = f.advance(DVec2::new(0.0, -149.0), DVec2::new(0.0, -0.1), 20.0);
        assert_eq!(p, DVec2::new(0.0, 149.0));
    }

    #[test]
    fn advance_with_zero_dt_keeps_position() {
        let f = Field::new(300.0, 300.0).unwrap();
        let p = DVec2::new(12.5, -40.0);
        assert_eq!(f.advance(p, DVec2::new(0.2, 0.1), 0.0), p);
    }
}
