use super::layout::{self, DATA_SIZE, Frame, MESSAGE_SIZE};
use super::message::Message;
use super::traits::{WireOrdinal, WireWrite};

/// Serialize `message` into a fresh frame.
///
/// The record is written verbatim; producing a record that breaks the
/// protocol's range rules is the caller's bug, not the encoder's.
pub fn encode(message: &Message) -> Frame {
    let mut frame = [0u8; MESSAGE_SIZE];
    encode_into(message, &mut frame);
    frame
}

/// Serialize `message` into `frame`, overwriting every byte of it.
pub fn encode_into(message: &Message, frame: &mut Frame) {
    message.header.write_at(frame, layout::HEADER);
    message.version.write_at(frame, layout::VERSION);
    message.player_num.write_at(frame, layout::PLAYER_NUM);
    message.team_num.write_at(frame, layout::TEAM_NUM);
    message.fallen.write_at(frame, layout::FALLEN);

    message.pose.write_at(frame, layout::POSE);
    message.walking_to.write_at(frame, layout::WALKING_TO);
    message.shooting_to.write_at(frame, layout::SHOOTING_TO);
    message.ball_age.write_at(frame, layout::BALL_AGE);
    message.ball.write_at(frame, layout::BALL);
    message.ball_vel.write_at(frame, layout::BALL_VEL);

    for (i, suggestion) in message.suggestion.iter().enumerate() {
        suggestion
            .ordinal()
            .write_at(frame, layout::SUGGESTION.element(i, 1));
    }
    message.intention.ordinal().write_at(frame, layout::INTENTION);

    message.average_walk_speed.write_at(frame, layout::AVERAGE_WALK_SPEED);
    message.max_kick_distance.write_at(frame, layout::MAX_KICK_DISTANCE);
    message
        .current_position_confidence
        .write_at(frame, layout::CURRENT_POSITION_CONFIDENCE);
    message
        .current_side_confidence
        .write_at(frame, layout::CURRENT_SIDE_CONFIDENCE);

    debug_assert!(
        message.data.len() <= DATA_SIZE,
        "payload of {} bytes does not fit the frame",
        message.data.len()
    );
    let data = &message.data[..message.data.len().min(DATA_SIZE)];
    (data.len() as u16).write_at(frame, layout::NUM_OF_DATA_BYTES);

    let block = &mut frame[layout::DATA.range()];
    block[..data.len()].copy_from_slice(data);
    block[data.len()..].fill(0);
}
