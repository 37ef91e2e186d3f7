//! 7-bit ASCII.

use crate::codepoint::Codepoint;
use crate::outcome::DecodeAttempt;

/// Succeeds only for a single byte below 128.
pub fn decode(bytes: &[u8]) -> DecodeAttempt {
    match bytes {
        [byte] if *byte < 0x80 => DecodeAttempt::Success(Codepoint::from(char::from(*byte))),
        [_] => DecodeAttempt::failure("MSB set"),
        [] => DecodeAttempt::failure("no bytes"),
        _ => DecodeAttempt::failure("too many bytes"),
    }
}

/// The single ASCII byte for `codepoint`, if it has one.
pub fn encode(codepoint: Codepoint) -> Option<u8> {
    u8::try_from(codepoint.value()).ok().filter(u8::is_ascii)
}
