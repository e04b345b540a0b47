//! # SPL Standard Message Codec
//!
//! Bit-exact encoding and validating decoding of the 850-byte team
//! communication frame.
//!
//! ## Key Types
//!
//! - [`Message`] - one decoded frame
//! - [`Suggestion`] / [`Intention`] - role enumerations carried as ordinals
//! - [`DecodeError`] - why a received frame was rejected
//! - [`layout`] - the offset table shared by [`encode`] and [`decode`]
//!
//! ## Example
//!
//! ```
//! use spl_message::codec::{decode, encode, Message};
//!
//! let mut msg = Message::new(3, 17);
//! msg.current_position_confidence = 80;
//! let frame = encode(&msg);
//! assert_eq!(frame.len(), 850);
//! assert_eq!(decode(&frame).unwrap(), msg);
//! ```

pub mod layout;
pub mod traits;
pub mod primitives;
pub mod message;
pub mod error;
mod encode;
mod decode;

pub use message::{Intention, Message, Pose, Suggestion, Vec2};
pub use error::{DecodeError, DecodeFailure, WireField};
pub use traits::WireOrdinal;
pub use encode::{encode, encode_into};
pub use decode::decode;
pub use layout::{Frame, MESSAGE_SIZE};
