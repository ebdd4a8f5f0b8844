use crate::math::{angle_diff, bearing};
use crate::track::Track;
use crate::tunables::Tunables;
use nalgebra::{distance, point, Point2};

/// Steering and throttle state for a single kart chasing a lap of waypoints.
///
/// The controller is deterministic: every call to [`KartController::update`]
/// depends only on the current state and its arguments.
#[derive(Clone, Debug)]
pub struct KartController {
    track: Track,
    tunables: Tunables,
    position: Point2<f64>,
    target_index: usize,
    speed: f64,
    heading: f64,
    boost_pending: bool,
    laps: u32,
}

impl KartController {
    pub fn new(track: Track, tunables: Tunables) -> KartController {
        KartController {
            track,
            tunables,
            position: point![0.0, 0.0],
            target_index: 0,
            speed: 0.0,
            heading: 0.0,
            boost_pending: false,
            laps: 0,
        }
    }

    /// Advances the controller by one tick.
    ///
    /// `observed_position` replaces the kart's position outright. The kart then
    /// moves one tick along its new heading at its new speed, so after this call
    /// `position()` is the observed sample plus one tick of self-motion.
    pub fn update(&mut self, observed_position: Point2<f64>, obstacles: &[Point2<f64>]) {
        self.position = observed_position;
        self.advance_waypoint();
        self.steer_towards_target();
        self.throttle();
        self.avoid_obstacles(obstacles);
        self.apply_boost();
        self.integrate();
        log::trace!(
            "position={:?} speed={} heading={} target={}",
            self.position,
            self.speed,
            self.heading,
            self.target_index
        );
    }

    /// Arms a one-shot speed bonus for the next update.
    pub fn activate_boost(&mut self) {
        self.boost_pending = true;
    }

    fn advance_waypoint(&mut self) {
        if distance(&self.position, &self.target()) < self.tunables.waypoint_arrival_radius {
            let next = self.track.next_index(self.target_index);
            if next == 0 {
                self.laps += 1;
            }
            log::debug!(
                "Reached waypoint {} at {:?}, next {}",
                self.target_index,
                self.position,
                next
            );
            self.target_index = next;
        }
    }

    fn steer_towards_target(&mut self) {
        let desired = bearing(self.position, self.target());
        self.heading += angle_diff(self.heading, desired) * self.tunables.heading_blend_factor;
    }

    // Speeds up near the target and slows down away from it.
    fn throttle(&mut self) {
        if distance(&self.position, &self.target()) < self.tunables.acceleration_radius {
            self.speed += self.tunables.acceleration;
        } else {
            self.speed -= self.tunables.acceleration;
        }
        self.speed = self.speed.min(self.tunables.max_speed).max(0.0);
    }

    fn avoid_obstacles(&mut self, obstacles: &[Point2<f64>]) {
        for obstacle in obstacles {
            if distance(&self.position, obstacle) < self.tunables.obstacle_avoidance_radius {
                // Each nudge sees the heading left by the previous one.
                let diff = angle_diff(self.heading, bearing(self.position, *obstacle));
                if diff > 0.0 {
                    self.heading -= self.tunables.obstacle_steer_step;
                } else {
                    self.heading += self.tunables.obstacle_steer_step;
                }
                log::debug!("Avoiding obstacle at {:?}, heading {}", obstacle, self.heading);
            }
        }
    }

    // Not clamped: a boost may push speed past max_speed for this tick.
    fn apply_boost(&mut self) {
        if self.boost_pending {
            self.speed += self.tunables.boost_speed_bonus;
            self.boost_pending = false;
            log::debug!("Boost applied, speed {}", self.speed);
        }
    }

    fn integrate(&mut self) {
        self.position.x += self.speed * self.heading.cos();
        self.position.y += self.speed * self.heading.sin();
    }

    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Heading in radians. Accumulates without wrapping.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn target(&self) -> Point2<f64> {
        self.track.waypoint(self.target_index)
    }

    pub fn boost_pending(&self) -> bool {
        self.boost_pending
    }

    /// Number of times the target has wrapped from the last waypoint back to the first.
    pub fn laps(&self) -> u32 {
        self.laps
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }
}

impl Default for KartController {
    fn default() -> KartController {
        KartController::new(Track::reference(), Tunables::default())
    }
}
