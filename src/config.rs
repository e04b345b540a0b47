use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::codec::layout::{MAX_PLAYER_NUMBER, MIN_PLAYER_NUMBER};
use crate::codec::Message;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("player number {0} outside 1-5")]
    InvalidPlayerNumber(u8),
}

/// Skill values announced to teammates.
/// Set once before kick-off and never changed during a game.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CalibrationConfig {
    /// Typical walking speed (mm/s, default: 200)
    #[serde(default = "default_average_walk_speed")]
    pub average_walk_speed: i16,
    /// Distance the ball rolls after a strong kick (mm, default: 3000)
    #[serde(default = "default_max_kick_distance")]
    pub max_kick_distance: i16,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        CalibrationConfig {
            average_walk_speed: default_average_walk_speed(),
            max_kick_distance: default_max_kick_distance(),
        }
    }
}

fn default_average_walk_speed() -> i16 { 200 }
fn default_max_kick_distance() -> i16 { 3000 }

/// Identity of the robot sending messages.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RobotConfig {
    /// Team number as assigned by the organizers
    pub team_number: u8,
    /// 1-5
    pub player_number: u8,
    #[serde(default)]
    pub calibration: CalibrationConfig,
}

impl RobotConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RobotConfig = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: RobotConfig = serde_json::from_reader(reader)?;
        config.validate()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(MIN_PLAYER_NUMBER..=MAX_PLAYER_NUMBER).contains(&self.player_number) {
            return Err(ConfigError::InvalidPlayerNumber(self.player_number));
        }
        Ok(self)
    }

    /// Outgoing message pre-filled with identity and calibration.
    pub fn message_template(&self) -> Message {
        let mut message = Message::new(self.player_number, self.team_number);
        message.average_walk_speed = self.calibration.average_walk_speed;
        message.max_kick_distance = self.calibration.max_kick_distance;
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};

    #[test]
    fn test_defaults_applied() {
        let config = RobotConfig::from_json_str(r#"{"team_number": 12, "player_number": 2}"#).unwrap();
        assert_eq!(config.calibration, CalibrationConfig::default());
        assert_eq!(config.calibration.average_walk_speed, 200);
        assert_eq!(config.calibration.max_kick_distance, 3000);
    }

    #[test]
    fn test_calibration_override() {
        let json = r#"{
            "team_number": 7,
            "player_number": 5,
            "calibration": { "average_walk_speed": 150 }
        }"#;
        let config = RobotConfig::from_reader(json.as_bytes()).unwrap();
        assert_eq!(config.calibration.average_walk_speed, 150);
        assert_eq!(config.calibration.max_kick_distance, 3000);
    }

    #[test]
    fn test_player_number_validated() {
        let err = RobotConfig::from_json_str(r#"{"team_number": 7, "player_number": 6}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlayerNumber(6)));

        let err = RobotConfig::from_json_str(r#"{"team_number": 7, "player_number": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlayerNumber(0)));
    }

    #[test]
    fn test_malformed_json() {
        let err = RobotConfig::from_json_str(r#"{"team_number": 7"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RobotConfig::load("/nonexistent/robot.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_template_survives_wire() {
        let config = RobotConfig::from_json_str(
            r#"{"team_number": 33, "player_number": 1, "calibration": {"average_walk_speed": 180, "max_kick_distance": 4500}}"#,
        )
        .unwrap();
        let template = config.message_template();
        assert_eq!(template.player_num, 1);
        assert_eq!(template.team_num, 33);

        let decoded = decode(&encode(&template)).unwrap();
        assert_eq!(decoded.average_walk_speed, 180);
        assert_eq!(decoded.max_kick_distance, 4500);
    }
}
