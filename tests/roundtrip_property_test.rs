use proptest::prelude::*;
use spl_message::codec::{
    decode, encode, Intention, Message, Pose, Suggestion, Vec2, WireOrdinal,
};

fn finite() -> impl Strategy<Value = f32> {
    -10_000.0f32..10_000.0f32
}

fn vec2() -> impl Strategy<Value = Vec2> {
    (finite(), finite()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn suggestion() -> impl Strategy<Value = Suggestion> {
    (0u8..5).prop_map(|o| Suggestion::ALL[o as usize])
}

fn intention() -> impl Strategy<Value = Intention> {
    (0u8..5).prop_map(|o| Intention::ALL[o as usize])
}

prop_compose! {
    fn valid_message()(
        player_num in 1u8..=5,
        team_num in any::<u8>(),
        fallen in any::<bool>(),
        pose in (finite(), finite(), -3.2f32..3.2f32),
        walking_to in vec2(),
        shooting_to in vec2(),
        ball_age in prop_oneof![Just(-1.0f32), 0.0f32..600.0],
        ball in vec2(),
        ball_vel in vec2(),
        suggestion in [suggestion(), suggestion(), suggestion(), suggestion(), suggestion()],
        intention in intention(),
        average_walk_speed in any::<i16>(),
        max_kick_distance in any::<i16>(),
        current_position_confidence in 0u8..=100,
        current_side_confidence in 0u8..=100,
        data in proptest::collection::vec(any::<u8>(), 0..=780),
    ) -> Message {
        let mut msg = Message::new(player_num, team_num);
        msg.fallen = fallen;
        msg.pose = Pose::new(pose.0, pose.1, pose.2);
        msg.walking_to = walking_to;
        msg.shooting_to = shooting_to;
        msg.ball_age = ball_age;
        msg.ball = ball;
        msg.ball_vel = ball_vel;
        msg.suggestion = suggestion;
        msg.intention = intention;
        msg.average_walk_speed = average_walk_speed;
        msg.max_kick_distance = max_kick_distance;
        msg.current_position_confidence = current_position_confidence;
        msg.current_side_confidence = current_side_confidence;
        msg.data = data;
        msg
    }
}

proptest! {
    #[test]
    fn decode_inverts_encode(msg in valid_message()) {
        let frame = encode(&msg);
        prop_assert_eq!(frame.len(), 850);
        prop_assert_eq!(decode(&frame).unwrap(), msg);
    }

    #[test]
    fn arbitrary_bytes_rejected_consistently(bytes in proptest::collection::vec(any::<u8>(), 0..900)) {
        let first = decode(&bytes).err();
        prop_assert_eq!(first, decode(&bytes).err());
    }
}
