use nalgebra::Point2;
use std::f64::consts::{PI, TAU};

/// Wraps an angle difference into (-PI, PI] by whole turns.
///
/// Non-finite input is returned unchanged.
pub fn normalize_angle(mut a: f64) -> f64 {
    if !a.is_finite() {
        return a;
    }
    while a > PI {
        a -= TAU;
    }
    while a <= -PI {
        a += TAU;
    }
    a
}

/// Returns the minimal signed turn from heading `from` to heading `to`.
pub fn angle_diff(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

/// Returns the angle of the ray from `from` to `to` in radians.
///
/// Coincident points yield `atan2(0, 0)`, which is 0.
pub fn bearing(from: Point2<f64>, to: Point2<f64>) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}
