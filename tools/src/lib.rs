use anyhow::Context;
use kart_simulator::controller::KartController;
use kart_simulator::track::Track;
use kart_simulator::tunables::Tunables;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Track and tunables for a race, as read from a JSON file.
///
/// Either field may be omitted to get the reference value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceConfig {
    pub track: Track,
    pub tunables: Tunables,
}

impl RaceConfig {
    pub fn parse(text: &str) -> anyhow::Result<RaceConfig> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<RaceConfig> {
        log::info!("Reading config {:?}", path);
        let text =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        RaceConfig::parse(&text).with_context(|| format!("Failed to parse {:?}", path))
    }

    pub fn controller(&self) -> KartController {
        KartController::new(self.track.clone(), self.tunables)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn test_empty_config_is_reference() {
        let config = RaceConfig::parse("{}").unwrap();
        assert_eq!(config.track, Track::reference());
        assert_eq!(config.tunables, Tunables::default());
    }

    #[test]
    fn test_custom_track_and_tunables() {
        let config = RaceConfig::parse(
            r#"{"track": [[0.0, 0.0], [10.0, 0.0]], "tunables": {"boost_speed_bonus": 3.5}}"#,
        )
        .unwrap();
        assert_eq!(config.track.len(), 2);
        assert_eq!(config.tunables.boost_speed_bonus, 3.5);
        assert_eq!(config.tunables.max_speed, 5.0);
        assert_eq!(config.controller().target(), config.track.waypoint(0));
    }

    #[test]
    fn test_empty_track_rejected() {
        let err = RaceConfig::parse(r#"{"track": []}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("at least one waypoint"), "{:#}", err);
    }

    #[test]
    fn test_missing_file() {
        let err = RaceConfig::load(Path::new("/nonexistent/race.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"), "{}", err);
    }
}
