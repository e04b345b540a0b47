use serde::{Deserialize, Serialize};

use super::error::DecodeError;
use super::layout::{DATA_SIZE, MAX_NUM_OF_PLAYERS, STRUCT_HEADER, STRUCT_VERSION};
use super::traits::WireOrdinal;

/// What, in the sender's opinion, a teammate should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Suggestion {
    #[default]
    Nothing,
    Keeper,
    Defense,
    Offense,
    PlayBall,
}

impl WireOrdinal for Suggestion {
    const ALL: &'static [Self] = &[
        Suggestion::Nothing,
        Suggestion::Keeper,
        Suggestion::Defense,
        Suggestion::Offense,
        Suggestion::PlayBall,
    ];

    fn ordinal(self) -> u8 {
        match self {
            Suggestion::Nothing => 0,
            Suggestion::Keeper => 1,
            Suggestion::Defense => 2,
            Suggestion::Offense => 3,
            Suggestion::PlayBall => 4,
        }
    }

    fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(Suggestion::Nothing),
            1 => Some(Suggestion::Keeper),
            2 => Some(Suggestion::Defense),
            3 => Some(Suggestion::Offense),
            4 => Some(Suggestion::PlayBall),
            _ => None,
        }
    }
}

/// What the sender intends to do itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Intention {
    #[default]
    Nothing,
    Keeper,
    Defense,
    PlayBall,
    /// The robot does not know where it is.
    Lost,
}

impl WireOrdinal for Intention {
    const ALL: &'static [Self] = &[
        Intention::Nothing,
        Intention::Keeper,
        Intention::Defense,
        Intention::PlayBall,
        Intention::Lost,
    ];

    fn ordinal(self) -> u8 {
        match self {
            Intention::Nothing => 0,
            Intention::Keeper => 1,
            Intention::Defense => 2,
            Intention::PlayBall => 3,
            Intention::Lost => 4,
        }
    }

    fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(Intention::Nothing),
            1 => Some(Intention::Keeper),
            2 => Some(Intention::Defense),
            3 => Some(Intention::PlayBall),
            4 => Some(Intention::Lost),
            _ => None,
        }
    }
}

/// Planar point or vector, millimetres (or mm/s for velocities).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

/// Field position in millimetres plus heading in radians.
///
/// The origin is the centre of the field, +x points at the opponent goal and
/// theta increases counter-clockwise from +x.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub theta: f32,
}

impl Pose {
    pub const fn new(x: f32, y: f32, theta: f32) -> Self {
        Pose { x, y, theta }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// One broadcast frame exchanged between teammates.
///
/// Floats are carried bit-for-bit, so a record holding NaN does not compare
/// equal to itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub header: [u8; 4],
    pub version: u8,
    /// 1-5
    pub player_num: u8,
    pub team_num: u8,
    pub fallen: bool,

    pub pose: Pose,
    /// Where the robot is walking to; its own position when it has no target.
    pub walking_to: Vec2,
    /// Target of the next pass or goal shot; its own position when not shooting.
    pub shooting_to: Vec2,

    /// Seconds since the ball was last seen, -1 if never.
    pub ball_age: f32,
    /// Ball position relative to the robot.
    pub ball: Vec2,
    pub ball_vel: Vec2,

    /// One entry per teammate slot.
    pub suggestion: [Suggestion; MAX_NUM_OF_PLAYERS],
    pub intention: Intention,

    /// mm/s, fixed for the whole game.
    pub average_walk_speed: i16,
    /// mm, fixed for the whole game.
    pub max_kick_distance: i16,

    /// Percent, 0-100.
    pub current_position_confidence: u8,
    /// Percent, 0-100.
    pub current_side_confidence: u8,

    /// Opaque application data, at most `DATA_SIZE` bytes.
    pub data: Vec<u8>,
}

impl Message {
    pub const BALL_NOT_SEEN: f32 = -1.0;

    pub fn new(player_num: u8, team_num: u8) -> Self {
        Message {
            header: STRUCT_HEADER,
            version: STRUCT_VERSION,
            player_num,
            team_num,
            fallen: false,
            pose: Pose::default(),
            walking_to: Vec2::default(),
            shooting_to: Vec2::default(),
            ball_age: Self::BALL_NOT_SEEN,
            ball: Vec2::default(),
            ball_vel: Vec2::default(),
            suggestion: [Suggestion::Nothing; MAX_NUM_OF_PLAYERS],
            intention: Intention::Nothing,
            average_walk_speed: 0,
            max_kick_distance: 0,
            current_position_confidence: 0,
            current_side_confidence: 0,
            data: Vec::new(),
        }
    }

    pub fn ball_seen(&self) -> bool {
        self.ball_age >= 0.0
    }

    /// Replace the payload, refusing anything that would not fit the frame.
    pub fn set_data(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        if data.len() > DATA_SIZE {
            return Err(DecodeError::PayloadTooLarge {
                declared: data.len(),
            });
        }
        self.data.clear();
        self.data.extend_from_slice(data);
        Ok(())
    }
}
