use crate::rng::{new_rng, SeededRng};
use anyhow::bail;
use nalgebra::{point, Point2};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TICKS: u32 = 100;

#[derive(PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Copy, Clone)]
pub enum Status {
    Running,
    Finished,
}

/// Knobs for the synthetic input stream fed to the kart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub ticks: u32,
    pub width: u32,
    pub height: u32,
    /// Obstacles generated per tick.
    pub obstacles: usize,
    /// Chance per tick that a boost is triggered before the update.
    pub boost_probability: f64,
}

impl Default for ScenarioConfig {
    fn default() -> ScenarioConfig {
        ScenarioConfig {
            ticks: DEFAULT_TICKS,
            width: 1000,
            height: 1000,
            obstacles: 5,
            boost_probability: 0.05,
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "Track bounds must be non-empty, got {}x{}",
                self.width,
                self.height
            );
        }
        if !(0.0..=1.0).contains(&self.boost_probability) {
            bail!(
                "Boost probability must be within [0, 1], got {}",
                self.boost_probability
            );
        }
        Ok(())
    }
}

/// Everything the driver hands the controller for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickInput {
    pub position: Point2<f64>,
    pub obstacles: Vec<Point2<f64>>,
    pub boost: bool,
}

/// Seeded generator of random position samples and obstacle fields.
pub struct RandomCourse {
    config: ScenarioConfig,
    rng: SeededRng,
}

impl RandomCourse {
    pub fn new(config: ScenarioConfig, seed: u32) -> Result<RandomCourse, anyhow::Error> {
        config.validate()?;
        Ok(RandomCourse {
            config,
            rng: new_rng(seed),
        })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    // Coordinates are whole numbers within the bounds.
    fn random_point(&mut self) -> Point2<f64> {
        point![
            self.rng.gen_range(0..self.config.width) as f64,
            self.rng.gen_range(0..self.config.height) as f64
        ]
    }

    pub fn next_input(&mut self) -> TickInput {
        let position = self.random_point();
        let obstacles = (0..self.config.obstacles)
            .map(|_| self.random_point())
            .collect();
        let boost = self.rng.gen_bool(self.config.boost_probability);
        TickInput {
            position,
            obstacles,
            boost,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn test_inputs_within_bounds() {
        let config = ScenarioConfig {
            width: 40,
            height: 30,
            obstacles: 7,
            ..Default::default()
        };
        let mut course = RandomCourse::new(config, 3).unwrap();
        for _ in 0..200 {
            let input = course.next_input();
            assert_eq!(input.obstacles.len(), 7);
            for p in std::iter::once(&input.position).chain(input.obstacles.iter()) {
                assert!(p.x >= 0.0 && p.x < 40.0, "{:?}", p);
                assert!(p.y >= 0.0 && p.y < 30.0, "{:?}", p);
                assert_eq!(p.x.fract(), 0.0);
                assert_eq!(p.y.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_boost_probability_extremes() {
        let mut never = RandomCourse::new(
            ScenarioConfig {
                boost_probability: 0.0,
                ..Default::default()
            },
            0,
        )
        .unwrap();
        let mut always = RandomCourse::new(
            ScenarioConfig {
                boost_probability: 1.0,
                ..Default::default()
            },
            0,
        )
        .unwrap();
        for _ in 0..100 {
            assert!(!never.next_input().boost);
            assert!(always.next_input().boost);
        }
    }

    #[test]
    fn test_invalid_config() {
        let zero_width = ScenarioConfig {
            width: 0,
            ..Default::default()
        };
        assert!(RandomCourse::new(zero_width, 0).is_err());

        let bad_probability = ScenarioConfig {
            boost_probability: 1.5,
            ..Default::default()
        };
        let err = RandomCourse::new(bad_probability, 0).err().unwrap();
        assert!(err.to_string().contains("Boost probability"), "{}", err);
    }

    #[test]
    fn test_same_seed_same_inputs() {
        let mut a = RandomCourse::new(Default::default(), 42).unwrap();
        let mut b = RandomCourse::new(Default::default(), 42).unwrap();
        for _ in 0..50 {
            assert_eq!(a.next_input(), b.next_input());
        }
    }
}
