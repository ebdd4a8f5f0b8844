use crate::scenario::Status;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub seed: u32,
    pub tick: u32,
    pub status: Status,
    pub kart: KartSnapshot,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KartSnapshot {
    pub position: Point2<f64>,
    pub speed: f64,
    pub heading: f64,
    pub target_index: usize,
    pub target: Point2<f64>,
    pub boost_pending: bool,
    pub laps: u32,
}
