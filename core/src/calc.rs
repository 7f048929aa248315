//! Numeric primitives shared by the steering and integration stages.
//!
//! All functions are pure and allocation-free.

/// Euclidean length of the 2D vector `(a, b)`.
pub fn length(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// Clamp `x` into `[min, max]`.
///
/// Precondition: `min <= max`. Callers pass bounds that were validated
/// at construction (agent limits, tuning), so a reversed pair is a bug
/// in the caller; debug builds panic on it, release builds return `min`
/// for values below it and `max` for values above it.
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "clamp() called with min {min} > max {max}");
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Toroidal wrap of `x` into the interval spanned by `min` and `max`.
///
/// - `max > min`: the result lies in `[min, max)`.
/// - `max < min`: the bounds are reversed and the result lies in `(max, min]`.
/// - `max == min`: the interval is empty; `min` is returned.
///
/// A value already inside the interval is returned unchanged, so the
/// operation is idempotent without floating-point drift.
pub fn wrap(x: f64, min: f64, max: f64) -> f64 {
    if max > min {
        if x >= min && x < max {
            return x;
        }
        let r = (x - min) % (max - min);
        let w = if r < 0.0 { r + max } else { r + min };
        // r + max can round up onto the open bound.
        if w >= max {
            min
        } else {
            w
        }
    } else if max < min {
        if x > max && x <= min {
            return x;
        }
        let r = (x - max) % (min - max);
        let w = if r <= 0.0 { r + min } else { r + max };
        if w <= max {
            min
        } else {
            w
        }
    } else {
        min
    }
}

/// [`wrap`] with the lower bound fixed at zero.
pub fn wrap_to(x: f64, max: f64) -> f64 {
    wrap(x, 0.0, max)
}

/// [`wrap`] into the unit interval `[0, 1)`.
pub fn wrap_unit(x: f64) -> f64 {
    wrap(x, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimRng;
    use std::f64::consts::PI;

    #[test]
    fn length_matches_pythagoras() {
        assert_eq!(length(3.0, 4.0), 5.0);
        assert_eq!(length(0.0, 0.0), 0.0);
        assert_eq!(length(-3.0, -4.0), 5.0);
    }

    #[test]
    fn clamp_returns_nearest_violated_bound() {
        let mut rng = SimRng::new(7);
        for _ in 0..1_000 {
            let a = rng.range(-100.0, 100.0);
            let b = rng.range(-100.0, 100.0);
            let (min, max) = if a <= b { (a, b) } else { (b, a) };
            let x = rng.range(-200.0, 200.0);

            let c = clamp(x, min, max);
            if x < min {
                assert_eq!(c, min);
            } else if x > max {
                assert_eq!(c, max);
            } else {
                assert_eq!(c, x);
            }
        }
    }

    #[test]
    fn clamp_with_equal_bounds_pins_the_value() {
        assert_eq!(clamp(5.0, 1.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn wrap_lands_in_half_open_range_and_is_idempotent() {
        let mut rng = SimRng::new(11);
        for _ in 0..5_000 {
            let min = rng.range(-500.0, 500.0);
            let max = min + rng.range(0.001, 400.0);
            let x = rng.range(-5_000.0, 5_000.0);

            let w = wrap(x, min, max);
            assert!(
                w >= min && w < max,
                "wrap({x}, {min}, {max}) = {w} is outside [min, max)"
            );
            assert_eq!(wrap(w, min, max), w, "wrap is not idempotent for x={x}");
        }
    }

    #[test]
    fn wrap_maps_the_upper_bound_onto_the_lower() {
        assert_eq!(wrap(150.0, -150.0, 150.0), -150.0);
        assert_eq!(wrap(-150.0, -150.0, 150.0), -150.0);
        assert_eq!(wrap(-160.0, -150.0, 150.0), 140.0);
        assert_eq!(wrap(460.0, -150.0, 150.0), -140.0);
    }

    #[test]
    fn wrap_reversed_bounds_use_the_upper_closed_interval() {
        // (0, 10]
        assert_eq!(wrap(5.0, 10.0, 0.0), 5.0);
        assert_eq!(wrap(10.0, 10.0, 0.0), 10.0);
        assert_eq!(wrap(0.0, 10.0, 0.0), 10.0);
        assert_eq!(wrap(-3.0, 10.0, 0.0), 7.0);
        assert_eq!(wrap(13.0, 10.0, 0.0), 3.0);
    }

    #[test]
    fn wrap_of_an_empty_interval_returns_the_bound() {
        assert_eq!(wrap(42.0, 3.0, 3.0), 3.0);
    }

    #[test]
    fn wrap_defaults() {
        assert_eq!(wrap_to(7.0, 5.0), 2.0);
        assert_eq!(wrap_to(-1.0, 5.0), 4.0);
        assert!((wrap_unit(1.25) - 0.25).abs() < 1e-12);
        assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn wrap_angle_delta_stays_within_half_turn() {
        let d = wrap(3.0 * PI / 2.0, -PI, PI);
        assert!((d + PI / 2.0).abs() < 1e-12);
        let d = wrap(-3.0 * PI / 2.0, -PI, PI);
        assert!((d - PI / 2.0).abs() < 1e-12);
    }
}
