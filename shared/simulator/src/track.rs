use anyhow::bail;
use nalgebra::{point, Point2};
use serde::{Deserialize, Serialize};

/// A closed lap of waypoints, visited in order and wrapping back to the start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2<f64>>", into = "Vec<Point2<f64>>")]
pub struct Track {
    waypoints: Vec<Point2<f64>>,
}

impl Track {
    pub fn new(waypoints: Vec<Point2<f64>>) -> Result<Track, anyhow::Error> {
        if waypoints.is_empty() {
            bail!("Track needs at least one waypoint");
        }
        Ok(Track { waypoints })
    }

    /// The three-waypoint lap used by the reference driver.
    pub fn reference() -> Track {
        Track {
            waypoints: vec![
                point![500.0, 200.0],
                point![800.0, 600.0],
                point![200.0, 800.0],
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Returns the waypoint at `index`, wrapping modulo the lap length.
    pub fn waypoint(&self, index: usize) -> Point2<f64> {
        self.waypoints[index % self.waypoints.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.waypoints.len()
    }

    pub fn waypoints(&self) -> &[Point2<f64>] {
        &self.waypoints
    }
}

impl Default for Track {
    fn default() -> Track {
        Track::reference()
    }
}

impl TryFrom<Vec<Point2<f64>>> for Track {
    type Error = anyhow::Error;

    fn try_from(waypoints: Vec<Point2<f64>>) -> Result<Track, anyhow::Error> {
        Track::new(waypoints)
    }
}

impl From<Track> for Vec<Point2<f64>> {
    fn from(track: Track) -> Vec<Point2<f64>> {
        track.waypoints
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn test_empty_track_rejected() {
        let err = Track::new(vec![]).unwrap_err();
        assert!(err.to_string().contains("at least one waypoint"), "{}", err);
    }

    #[test]
    fn test_waypoint_wraps() {
        let track = Track::reference();
        assert_eq!(track.len(), 3);
        assert_eq!(track.waypoint(3), point![500.0, 200.0]);
        assert_eq!(track.waypoint(5), point![200.0, 800.0]);
        assert_eq!(track.next_index(2), 0);
    }

    #[test]
    fn test_deserialize() {
        let track: Track = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(track.waypoints(), &[point![1.0, 2.0], point![3.0, 4.0]]);
        assert!(serde_json::from_str::<Track>("[]").is_err());
    }
}
