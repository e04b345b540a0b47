//! Receiver-side diagnostics.
//!
//! The codec itself never logs. Callers that want a record of dropped frames
//! route received bytes through [`decode_reported`].

use log::{debug, warn};

use crate::codec::{decode, DecodeError, Message};

/// Log target used for rejected frames.
pub const TARGET: &str = "spl_message::rx";

/// Install an `env_logger` honouring `RUST_LOG`. Safe to call more than once.
pub fn init() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .try_init();
}

/// Decode `bytes`, logging the reason when the frame is rejected.
///
/// Structural failures (wrong protocol, truncation) are logged at `warn`,
/// range failures from a well-framed peer at `debug`.
pub fn decode_reported(bytes: &[u8], origin: &str) -> Result<Message, DecodeError> {
    decode(bytes).inspect_err(|err| report_rejection(err, bytes, origin))
}

fn report_rejection(err: &DecodeError, bytes: &[u8], origin: &str) {
    let dump = prefix_dump(bytes);
    if err.is_structural() {
        warn!(target: TARGET, "dropped frame from {origin}: {err}{dump}");
    } else {
        debug!(target: TARGET, "dropped frame from {origin}: {err}{dump}");
    }
}

#[cfg(feature = "packet-dump")]
fn prefix_dump(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let prefix = &bytes[..bytes.len().min(crate::codec::layout::PREFIX_SIZE)];
    let mut out = String::from(" [");
    for (i, b) in prefix.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{b:02x}");
    }
    out.push(']');
    out
}

#[cfg(not(feature = "packet-dump"))]
fn prefix_dump(_bytes: &[u8]) -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode, DecodeFailure};

    #[test]
    fn test_reported_result_matches_decode() {
        init();
        let frame = encode(&Message::new(4, 9));
        assert_eq!(decode_reported(&frame, "10.0.0.4").unwrap(), decode(&frame).unwrap());

        let err = decode_reported(&frame[..100], "10.0.0.4").unwrap_err();
        assert_eq!(err.kind(), DecodeFailure::TruncatedInput);
    }

    #[cfg(feature = "packet-dump")]
    #[test]
    fn test_prefix_dump_covers_header() {
        let frame = encode(&Message::new(4, 9));
        let dump = prefix_dump(&frame);
        assert!(dump.starts_with(" [53 50 4c 20 06 04 09 00"));
    }
}
