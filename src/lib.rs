pub mod codec;
pub mod config;
pub mod logging;

pub use codec::{decode, encode, DecodeError, DecodeFailure, Intention, Message, Suggestion};
pub use config::{RobotConfig, CalibrationConfig, ConfigError};
