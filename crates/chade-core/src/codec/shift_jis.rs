//! Shift-JIS byte classification.
//!
//! The lead byte decides whether a character is one or two bytes long and
//! whether it is allowed at all; the trail byte of a two-byte character is
//! checked against the ranges JIS X 0208 rows use. Only structurally valid
//! sequences are handed to the legacy codec for the table lookup.

use crate::outcome::DecodeAttempt;
use crate::services::LegacyCodec;

use super::convert;

/// Charset label passed to the legacy codec.
pub const CHARSET: &str = "shift_jis";

/// Reason reported for a structurally valid sequence with a vendor lead byte.
pub const NONSTANDARD_LEAD: &str = "non-standard first byte, possibly an emoji";

/// Class of the first byte of a Shift-JIS character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadByte {
    /// ASCII/JIS-Roman (`00–7F`) or half-width katakana (`A1–DF`).
    SingleByte,
    /// Never valid as a first byte.
    Forbidden,
    /// First byte of a JIS X 0208 character (`81–9F`, `E0–EF`).
    DoubleByte,
    /// Vendor extension area (`F3–F9`), used by carrier emoji sets.
    NonStandard,
}

/// Class of the second byte of a two-byte Shift-JIS character.
///
/// Odd and even refer to the JIS row parity the byte selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailByte {
    Odd,
    Even,
    Forbidden,
}

pub fn classify_lead(byte: u8) -> LeadByte {
    match byte {
        0x00..=0x7F | 0xA1..=0xDF => LeadByte::SingleByte,
        0x81..=0x9F | 0xE0..=0xEF => LeadByte::DoubleByte,
        0xF3..=0xF9 => LeadByte::NonStandard,
        _ => LeadByte::Forbidden,
    }
}

pub fn classify_trail(byte: u8) -> TrailByte {
    match byte {
        0x40..=0x7E | 0x80..=0x9E => TrailByte::Odd,
        0x9F..=0xFC => TrailByte::Even,
        _ => TrailByte::Forbidden,
    }
}

/// Why `bytes` cannot be a two-byte character, or `None` if it can.
fn check_trail(bytes: &[u8]) -> Option<String> {
    match *bytes {
        [_, trail] => match classify_trail(trail) {
            TrailByte::Forbidden => Some(format!("unacceptable second byte: {trail:02X}")),
            TrailByte::Odd | TrailByte::Even => None,
        },
        [lead] => Some(format!(
            "not enough bytes for a Shift-JIS sequence starting with {lead:02X}"
        )),
        _ => Some("too many bytes (never more than 2 bytes in a Shift-JIS character)".to_string()),
    }
}

/// Decode one Shift-JIS character, delegating valid sequences to `codec`.
pub fn decode(bytes: &[u8], codec: &dyn LegacyCodec) -> DecodeAttempt {
    let Some(&lead) = bytes.first() else {
        return DecodeAttempt::failure("no bytes");
    };
    match classify_lead(lead) {
        LeadByte::SingleByte if bytes.len() > 1 => {
            DecodeAttempt::failure("too many bytes, the first byte indicates only one is needed")
        }
        LeadByte::SingleByte => convert(codec, bytes, CHARSET),
        LeadByte::Forbidden => DecodeAttempt::failure("first (only?) byte is forbidden in Shift-JIS"),
        LeadByte::DoubleByte => match check_trail(bytes) {
            Some(reason) => DecodeAttempt::Failure(reason),
            None => convert(codec, bytes, CHARSET),
        },
        LeadByte::NonStandard => match check_trail(bytes) {
            Some(reason) => DecodeAttempt::Failure(reason),
            None => DecodeAttempt::failure(NONSTANDARD_LEAD),
        },
    }
}
