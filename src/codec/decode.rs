use super::error::{DecodeError, WireField};
use super::layout::{
    self, DATA_SIZE, Frame, MAX_CONFIDENCE, MAX_NUM_OF_PLAYERS, MAX_PLAYER_NUMBER,
    MESSAGE_SIZE, MIN_PLAYER_NUMBER, STRUCT_HEADER, STRUCT_VERSION,
};
use super::message::{Intention, Message, Pose, Suggestion, Vec2};
use super::traits::{WireOrdinal, WireRead};

/// Parse and validate one frame received from a peer.
///
/// Checks run in wire order and stop at the first violation. Bytes past the
/// first `MESSAGE_SIZE` and payload padding past the declared length are
/// ignored.
pub fn decode(bytes: &[u8]) -> Result<Message, DecodeError> {
    let frame: &Frame = bytes
        .first_chunk::<MESSAGE_SIZE>()
        .ok_or(DecodeError::TruncatedInput { len: bytes.len() })?;

    let header = <[u8; 4]>::read_at(frame, layout::HEADER);
    if header != STRUCT_HEADER {
        return Err(DecodeError::InvalidHeader { found: header });
    }

    let version = u8::read_at(frame, layout::VERSION);
    if version != STRUCT_VERSION {
        return Err(DecodeError::UnsupportedVersion { found: version });
    }

    let player_num = u8::read_at(frame, layout::PLAYER_NUM);
    if !(MIN_PLAYER_NUMBER..=MAX_PLAYER_NUMBER).contains(&player_num) {
        return Err(DecodeError::InvalidPlayerNumber(player_num));
    }

    let team_num = u8::read_at(frame, layout::TEAM_NUM);
    let fallen = read_bool(frame)?;

    let pose = Pose::read_at(frame, layout::POSE);
    let walking_to = Vec2::read_at(frame, layout::WALKING_TO);
    let shooting_to = Vec2::read_at(frame, layout::SHOOTING_TO);
    let ball_age = f32::read_at(frame, layout::BALL_AGE);
    let ball = Vec2::read_at(frame, layout::BALL);
    let ball_vel = Vec2::read_at(frame, layout::BALL_VEL);

    let mut suggestion = [Suggestion::Nothing; MAX_NUM_OF_PLAYERS];
    for (i, slot) in suggestion.iter_mut().enumerate() {
        *slot = read_ordinal(
            frame,
            layout::SUGGESTION.element(i, 1),
            WireField::Suggestion(i),
        )?;
    }
    let intention: Intention = read_ordinal(frame, layout::INTENTION, WireField::Intention)?;

    let average_walk_speed = i16::read_at(frame, layout::AVERAGE_WALK_SPEED);
    let max_kick_distance = i16::read_at(frame, layout::MAX_KICK_DISTANCE);

    let current_position_confidence = read_confidence(
        frame,
        layout::CURRENT_POSITION_CONFIDENCE,
        WireField::PositionConfidence,
    )?;
    let current_side_confidence = read_confidence(
        frame,
        layout::CURRENT_SIDE_CONFIDENCE,
        WireField::SideConfidence,
    )?;

    let declared = usize::from(u16::read_at(frame, layout::NUM_OF_DATA_BYTES));
    if declared > DATA_SIZE {
        return Err(DecodeError::PayloadTooLarge { declared });
    }
    let data = frame[layout::DATA.range()][..declared].to_vec();

    Ok(Message {
        header,
        version,
        player_num,
        team_num,
        fallen,
        pose,
        walking_to,
        shooting_to,
        ball_age,
        ball,
        ball_vel,
        suggestion,
        intention,
        average_walk_speed,
        max_kick_distance,
        current_position_confidence,
        current_side_confidence,
        data,
    })
}

fn read_bool(frame: &Frame) -> Result<bool, DecodeError> {
    match u8::read_at(frame, layout::FALLEN) {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(DecodeError::InvalidBooleanEncoding(other)),
    }
}

fn read_ordinal<T: WireOrdinal>(
    frame: &Frame,
    at: layout::Field,
    field: WireField,
) -> Result<T, DecodeError> {
    let value = u8::read_at(frame, at);
    T::from_ordinal(value).ok_or(DecodeError::InvalidEnumValue { field, value })
}

fn read_confidence(
    frame: &Frame,
    at: layout::Field,
    field: WireField,
) -> Result<u8, DecodeError> {
    let value = u8::read_at(frame, at);
    if value > MAX_CONFIDENCE {
        return Err(DecodeError::InvalidConfidence { field, value });
    }
    Ok(value)
}
