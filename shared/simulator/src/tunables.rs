use serde::{Deserialize, Serialize};

/// Control-law constants, fixed for the lifetime of a controller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub max_speed: f64,
    /// Speed change per tick, applied up or down by the throttle.
    pub acceleration: f64,
    /// The target advances once the kart is strictly closer than this.
    pub waypoint_arrival_radius: f64,
    /// The kart speeds up inside this distance of its target and slows down outside it.
    pub acceleration_radius: f64,
    pub obstacle_avoidance_radius: f64,
    /// Fixed heading nudge per obstacle in range, in radians.
    pub obstacle_steer_step: f64,
    pub boost_speed_bonus: f64,
    /// Fraction of the remaining turn toward the target taken each tick.
    pub heading_blend_factor: f64,
}

impl Default for Tunables {
    fn default() -> Tunables {
        Tunables {
            max_speed: 5.0,
            acceleration: 0.1,
            waypoint_arrival_radius: 10.0,
            acceleration_radius: 100.0,
            obstacle_avoidance_radius: 50.0,
            obstacle_steer_step: 0.1,
            boost_speed_bonus: 2.0,
            heading_blend_factor: 0.1,
        }
    }
}
