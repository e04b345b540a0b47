//! Fixed byte layout of the SPL standard message.
//!
//! Every field sits at a fixed offset inside an 850-byte frame. Encoder and
//! decoder both address the frame exclusively through the constants below.

use std::ops::Range;

/// Tag carried in the first four bytes of every frame.
pub const STRUCT_HEADER: [u8; 4] = *b"SPL ";
/// The only protocol version this codec understands.
pub const STRUCT_VERSION: u8 = 6;
/// Size of the payload block at the end of the frame.
pub const DATA_SIZE: usize = 780;
/// Number of teammate slots in the suggestion array.
pub const MAX_NUM_OF_PLAYERS: usize = 5;
/// Valid player numbers are `MIN_PLAYER_NUMBER..=MAX_PLAYER_NUMBER`.
pub const MIN_PLAYER_NUMBER: u8 = 1;
pub const MAX_PLAYER_NUMBER: u8 = MAX_NUM_OF_PLAYERS as u8;
/// Confidence values are percentages.
pub const MAX_CONFIDENCE: u8 = 100;

/// A contiguous region of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub offset: usize,
    pub size: usize,
}

impl Field {
    pub const fn new(offset: usize, size: usize) -> Self {
        Field { offset, size }
    }

    /// Offset of the first byte after this field.
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Sub-field of `size` bytes starting `index * size` bytes into this one.
    pub const fn element(&self, index: usize, size: usize) -> Field {
        Field::new(self.offset + index * size, size)
    }
}

pub const HEADER: Field = Field::new(0, 4);
pub const VERSION: Field = Field::new(4, 1);
pub const PLAYER_NUM: Field = Field::new(5, 1);
pub const TEAM_NUM: Field = Field::new(6, 1);
pub const FALLEN: Field = Field::new(7, 1);
/// x, y, theta
pub const POSE: Field = Field::new(8, 12);
pub const WALKING_TO: Field = Field::new(20, 8);
pub const SHOOTING_TO: Field = Field::new(28, 8);
pub const BALL_AGE: Field = Field::new(36, 4);
pub const BALL: Field = Field::new(40, 8);
pub const BALL_VEL: Field = Field::new(48, 8);
pub const SUGGESTION: Field = Field::new(56, MAX_NUM_OF_PLAYERS);
pub const INTENTION: Field = Field::new(61, 1);
pub const AVERAGE_WALK_SPEED: Field = Field::new(62, 2);
pub const MAX_KICK_DISTANCE: Field = Field::new(64, 2);
pub const CURRENT_POSITION_CONFIDENCE: Field = Field::new(66, 1);
pub const CURRENT_SIDE_CONFIDENCE: Field = Field::new(67, 1);
pub const NUM_OF_DATA_BYTES: Field = Field::new(68, 2);
pub const DATA: Field = Field::new(70, DATA_SIZE);

/// Every field in wire order.
pub const FIELDS: [Field; 19] = [
    HEADER,
    VERSION,
    PLAYER_NUM,
    TEAM_NUM,
    FALLEN,
    POSE,
    WALKING_TO,
    SHOOTING_TO,
    BALL_AGE,
    BALL,
    BALL_VEL,
    SUGGESTION,
    INTENTION,
    AVERAGE_WALK_SPEED,
    MAX_KICK_DISTANCE,
    CURRENT_POSITION_CONFIDENCE,
    CURRENT_SIDE_CONFIDENCE,
    NUM_OF_DATA_BYTES,
    DATA,
];

/// Size of one frame on the wire.
pub const MESSAGE_SIZE: usize = DATA.end();

/// One complete frame.
pub type Frame = [u8; MESSAGE_SIZE];

/// Bytes preceding the payload block.
pub const PREFIX_SIZE: usize = DATA.offset;

const fn is_contiguous(fields: &[Field]) -> bool {
    let mut expected = 0;
    let mut i = 0;
    while i < fields.len() {
        if fields[i].offset != expected {
            return false;
        }
        expected = fields[i].end();
        i += 1;
    }
    true
}

const _: () = assert!(is_contiguous(&FIELDS));
const _: () = assert!(MESSAGE_SIZE == 850);
const _: () = assert!(PREFIX_SIZE == 70);
