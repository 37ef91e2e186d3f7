//! UTF-8, decoded with the original (pre-RFC 3629) lead byte table.
//!
//! Lead bytes announce sequences of up to six bytes. Overlong forms and
//! surrogates are accepted; only values beyond the codespace are refused.

use crate::codepoint::Codepoint;
use crate::outcome::DecodeAttempt;

/// Sequence length announced by `lead` and the payload bits it carries.
///
/// Returns `None` for continuation bytes and for `0xFE`/`0xFF`, which never
/// start a sequence.
pub fn classify_lead(lead: u8) -> Option<(usize, u32)> {
    let (length, mask) = match lead {
        b if b & 0x80 == 0x00 => (1, 0x7F),
        b if b & 0xE0 == 0xC0 => (2, 0x1F),
        b if b & 0xF0 == 0xE0 => (3, 0x0F),
        b if b & 0xF8 == 0xF0 => (4, 0x07),
        b if b & 0xFC == 0xF8 => (5, 0x03),
        b if b & 0xFE == 0xFC => (6, 0x01),
        _ => return None,
    };
    Some((length, u32::from(lead & mask)))
}

/// Whether `byte` has the `10xxxxxx` continuation pattern.
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decode exactly one UTF-8 sequence.
pub fn decode(bytes: &[u8]) -> DecodeAttempt {
    let Some((&lead, continuation)) = bytes.split_first() else {
        return DecodeAttempt::failure("no bytes");
    };
    let Some((length, mut acc)) = classify_lead(lead) else {
        return DecodeAttempt::failure(format!("invalid first byte of a UTF-8 sequence: {lead:02X}"));
    };
    if bytes.len() != length {
        return DecodeAttempt::failure(format!(
            "first byte requires a sequence of {length} bytes but {} were provided",
            bytes.len()
        ));
    }

    for (index, &byte) in continuation.iter().enumerate() {
        if !is_continuation(byte) {
            return DecodeAttempt::failure(format!(
                "byte {index} cannot be part of a UTF-8 sequence (not a continuation byte)"
            ));
        }
        acc = (acc << 6) | u32::from(byte & 0x3F);
    }

    match Codepoint::new(acc) {
        Some(cp) => DecodeAttempt::Success(cp),
        None => DecodeAttempt::failure(format!(
            "decoded value {acc:X} is outside the Unicode range"
        )),
    }
}

/// Shortest UTF-8 form of `codepoint`. Surrogates get their three-byte form.
pub fn encode(codepoint: Codepoint) -> Vec<u8> {
    let v = codepoint.value();
    match v {
        0..=0x7F => vec![v as u8],
        0x80..=0x7FF => vec![0xC0 | (v >> 6) as u8, continuation_byte(v)],
        0x800..=0xFFFF => vec![
            0xE0 | (v >> 12) as u8,
            continuation_byte(v >> 6),
            continuation_byte(v),
        ],
        _ => vec![
            0xF0 | (v >> 18) as u8,
            continuation_byte(v >> 12),
            continuation_byte(v >> 6),
            continuation_byte(v),
        ],
    }
}

fn continuation_byte(bits: u32) -> u8 {
    0x80 | (bits & 0x3F) as u8
}
