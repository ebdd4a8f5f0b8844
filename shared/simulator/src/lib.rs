pub mod controller;
pub mod math;
pub mod rng;
pub mod scenario;
pub mod simulation;
pub mod snapshot;
pub mod track;
pub mod tunables;
