use crate::controller::KartController;
use crate::scenario::{RandomCourse, ScenarioConfig, Status};
use crate::snapshot::{KartSnapshot, Snapshot};

/// Drives a [`KartController`] with seeded synthetic input for a fixed number of ticks.
pub struct Simulation {
    kart: KartController,
    course: RandomCourse,
    tick: u32,
    seed: u32,
}

impl Simulation {
    pub fn new(
        kart: KartController,
        config: ScenarioConfig,
        seed: u32,
    ) -> Result<Simulation, anyhow::Error> {
        log::info!("seed {seed}");
        Ok(Simulation {
            kart,
            course: RandomCourse::new(config, seed)?,
            tick: 0,
            seed,
        })
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn config(&self) -> &ScenarioConfig {
        self.course.config()
    }

    pub fn kart(&self) -> &KartController {
        &self.kart
    }

    pub fn status(&self) -> Status {
        if self.tick < self.config().ticks {
            Status::Running
        } else {
            Status::Finished
        }
    }

    /// Generates one tick of input and feeds it to the kart.
    ///
    /// A boost drawn for this tick is armed before the update, so it is
    /// consumed by that same update.
    pub fn step(&mut self) {
        let input = self.course.next_input();
        if input.boost {
            log::debug!("tick {}: boost", self.tick);
            self.kart.activate_boost();
        }
        self.kart.update(input.position, &input.obstacles);
        self.tick += 1;
    }

    pub fn run(&mut self) -> Status {
        while self.status() == Status::Running {
            self.step();
        }
        log::info!(
            "Finished after {} ticks: position {:?}, speed {}, target {}, laps {}",
            self.tick,
            self.kart.position(),
            self.kart.speed(),
            self.kart.target_index(),
            self.kart.laps()
        );
        self.status()
    }

    pub fn hash(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hasher;
        let fixedpoint = |v: f64| (v * 1e9) as i64;
        let mut s = DefaultHasher::new();
        s.write_u32(self.tick);
        s.write_i64(fixedpoint(self.kart.position().x));
        s.write_i64(fixedpoint(self.kart.position().y));
        s.write_i64(fixedpoint(self.kart.speed()));
        s.write_i64(fixedpoint(self.kart.heading()));
        s.write_usize(self.kart.target_index());
        s.write_u8(self.kart.boost_pending() as u8);
        s.finish()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            tick: self.tick,
            status: self.status(),
            kart: KartSnapshot {
                position: self.kart.position(),
                speed: self.kart.speed(),
                heading: self.kart.heading(),
                target_index: self.kart.target_index(),
                target: self.kart.target(),
                boost_pending: self.kart.boost_pending(),
                laps: self.kart.laps(),
            },
        }
    }
}
