//! UTF-16 in either byte order, one character (one unit or one surrogate pair) at a time.

use crate::codepoint::Codepoint;
use crate::outcome::DecodeAttempt;

/// Byte order of the 16-bit code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    fn unit(self, pair: [u8; 2]) -> u16 {
        match self {
            Endian::Little => u16::from_le_bytes(pair),
            Endian::Big => u16::from_be_bytes(pair),
        }
    }

    fn bytes(self, unit: u16) -> [u8; 2] {
        match self {
            Endian::Little => unit.to_le_bytes(),
            Endian::Big => unit.to_be_bytes(),
        }
    }
}

pub const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
pub const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Decode 2 or 4 bytes as one UTF-16 character.
///
/// A lone unit is returned as is, surrogate or not.
pub fn decode(bytes: &[u8], endian: Endian) -> DecodeAttempt {
    match *bytes {
        [a, b] => DecodeAttempt::Success(Codepoint::from_unit(endian.unit([a, b]))),
        [a, b, c, d] => combine(endian.unit([a, b]), endian.unit([c, d])),
        _ => DecodeAttempt::failure(format!(
            "unacceptable number of bytes for a UTF-16 character (can be 2 or 4, was {})",
            bytes.len()
        )),
    }
}

fn combine(high: u16, low: u16) -> DecodeAttempt {
    if !HIGH_SURROGATES.contains(&high) {
        return DecodeAttempt::failure(format!(
            "first element of the pair is not a high surrogate ({high:04X})"
        ));
    }
    if !LOW_SURROGATES.contains(&low) {
        return DecodeAttempt::failure(format!(
            "second element of the pair is not a low surrogate ({low:04X})"
        ));
    }
    let value = ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00) + 0x10000;
    match Codepoint::new(value) {
        Some(cp) => DecodeAttempt::Success(cp),
        None => DecodeAttempt::failure(format!(
            "decoded value {value:X} is outside the Unicode range"
        )),
    }
}

/// Code units for `codepoint`; surrogate codepoints yield themselves as a single unit.
pub fn units(codepoint: Codepoint) -> Vec<u16> {
    let v = codepoint.value();
    if v < 0x10000 {
        return vec![v as u16];
    }
    let offset = v - 0x10000;
    vec![0xD800 + (offset >> 10) as u16, 0xDC00 + (offset & 0x3FF) as u16]
}

/// The 2 or 4 bytes for `codepoint` in the given byte order.
pub fn encode(codepoint: Codepoint, endian: Endian) -> Vec<u8> {
    units(codepoint)
        .into_iter()
        .flat_map(|unit| endian.bytes(unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(value: u32) -> Codepoint {
        Codepoint::new(value).unwrap()
    }

    #[test]
    fn single_unit_little_and_big() {
        assert_eq!(decode(&[0x41, 0x00], Endian::Little), DecodeAttempt::Success(cp(0x41)));
        assert_eq!(decode(&[0x41, 0x00], Endian::Big), DecodeAttempt::Success(cp(0x4100)));
    }

    #[test]
    fn lone_surrogate_unit_is_returned() {
        assert_eq!(decode(&[0xD8, 0x00], Endian::Big), DecodeAttempt::Success(cp(0xD800)));
    }

    #[test]
    fn surrogate_pair_little_endian() {
        // U+10000 is D800 DC00.
        assert_eq!(
            decode(&[0x00, 0xD8, 0x00, 0xDC], Endian::Little),
            DecodeAttempt::Success(cp(0x10000))
        );
    }

    #[test]
    fn surrogate_pair_with_non_zero_high_bits() {
        // D83D DC00 in little-endian order is U+1F400.
        assert_eq!(
            decode(&[0x3D, 0xD8, 0x00, 0xDC], Endian::Little),
            DecodeAttempt::Success(cp(0x1F400))
        );
    }

    #[test]
    fn surrogate_pair_big_endian() {
        // U+1F600 is D83D DE00.
        assert_eq!(
            decode(&[0xD8, 0x3D, 0xDE, 0x00], Endian::Big),
            DecodeAttempt::Success(cp(0x1F600))
        );
    }

    #[test]
    fn first_unit_not_high_surrogate() {
        let attempt = decode(&[0x41, 0x00, 0x00, 0xDC], Endian::Little);
        assert_eq!(
            attempt.reason(),
            Some("first element of the pair is not a high surrogate (0041)")
        );
    }

    #[test]
    fn second_unit_not_low_surrogate() {
        let attempt = decode(&[0x00, 0xD8, 0x41, 0x00], Endian::Little);
        assert_eq!(
            attempt.reason(),
            Some("second element of the pair is not a low surrogate (0041)")
        );
    }

    #[test]
    fn odd_lengths_fail_with_length() {
        for len in [1usize, 3, 5, 6] {
            let attempt = decode(&vec![0u8; len], Endian::Big);
            assert!(attempt.reason().unwrap().ends_with(&format!("was {len})")));
        }
    }

    #[test]
    fn encode_bmp_and_astral() {
        assert_eq!(encode(cp(0xE9), Endian::Little), vec![0xE9, 0x00]);
        assert_eq!(encode(cp(0xE9), Endian::Big), vec![0x00, 0xE9]);
        assert_eq!(encode(cp(0x1F600), Endian::Big), vec![0xD8, 0x3D, 0xDE, 0x00]);
        assert_eq!(encode(cp(0x10FFFF), Endian::Little), vec![0xFF, 0xDB, 0xFF, 0xDF]);
    }

    #[test]
    fn units_match_std() {
        for ch in ['A', '€', '😀', '\u{10FFFF}'] {
            let mut buf = [0u16; 2];
            assert_eq!(units(Codepoint::from(ch)), ch.encode_utf16(&mut buf));
        }
    }
}
