//! Round-trip checks of the decoders against the encoders.
//!
//! Every codepoint is encoded and the bytes fed back through the matching
//! decoder. A disagreement is recorded as a [`Mismatch`]; the checks never
//! stop at the first one.

use std::ops::RangeInclusive;

use crate::codec::{utf16, utf8};
use crate::codepoint::{ByteSequence, Codepoint};
use crate::decode::{Decoder, DecoderKind};
use crate::outcome::DecodeAttempt;
use crate::services::{LegacyCodec, Services};
use crate::codec::utf16::Endian;

/// Codepoints the Shift-JIS converter maps onto another character's bytes.
///
/// YEN SIGN and OVERLINE become the ASCII backslash and tilde; MINUS SIGN
/// becomes the bytes of FULLWIDTH HYPHEN-MINUS.
pub const SHIFT_JIS_EXCLUSIONS: [u32; 3] = [0x00A5, 0x203E, 0x2212];

/// Lead bytes the converter emits but the Shift-JIS classifier never accepts.
///
/// `80` is U+0080, `F0–F9` the private use area and `FA–FC` the IBM
/// extensions outside the NEC-selected rows.
pub const SHIFT_JIS_LEAD_GAPS: [RangeInclusive<u8>; 3] = [0x80..=0x80, 0xF0..=0xF9, 0xFA..=0xFC];

/// A codepoint that did not survive the round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub codepoint: Codepoint,
    /// Name of the codec under test.
    pub codec: String,
    pub detail: String,
}

/// Summary of one round-trip run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundTripReport {
    /// Codepoints whose bytes were decoded and compared.
    pub checked: usize,
    /// Codepoints left out: unencodable, excluded, or encoded with a gap lead byte.
    pub skipped: usize,
    pub mismatches: Vec<Mismatch>,
}

impl RoundTripReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    fn compare(&mut self, codec: &str, codepoint: Codepoint, bytes: &[u8], attempt: DecodeAttempt) {
        self.checked += 1;
        let detail = match attempt {
            DecodeAttempt::Success(decoded) if decoded == codepoint => return,
            DecodeAttempt::Success(decoded) => format!("{} decoded as {decoded:X}", hex(bytes)),
            DecodeAttempt::Failure(reason) => format!("{} failed: {reason}", hex(bytes)),
        };
        self.mismatches.push(Mismatch {
            codepoint,
            codec: codec.to_string(),
            detail,
        });
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// UTF-8 over the whole codespace, UTF-16 in both byte orders over every
/// non-surrogate codepoint.
pub fn check_unicode_roundtrip() -> RoundTripReport {
    let mut report = RoundTripReport::default();
    for codepoint in Codepoint::all() {
        let bytes = utf8::encode(codepoint);
        report.compare("UTF-8", codepoint, &bytes, utf8::decode(&bytes));

        if codepoint.is_surrogate() {
            report.skipped += 1;
            continue;
        }
        for (name, endian) in [("UTF-16LE", Endian::Little), ("UTF-16BE", Endian::Big)] {
            let bytes = utf16::encode(codepoint, endian);
            report.compare(name, codepoint, &bytes, utf16::decode(&bytes, endian));
        }
    }
    tracing::info!(
        checked = report.checked,
        mismatches = report.mismatches.len(),
        "unicode round trip finished"
    );
    report
}

/// Encode every non-ASCII codepoint with `codec` in `charset` and decode the
/// bytes with `decoder`.
///
/// Codepoints the codec cannot encode, those in `exclusions`, and those whose
/// bytes start with a lead byte in `lead_gaps` are skipped. Any decode failure
/// or a different codepoint is a mismatch.
pub fn check_legacy_roundtrip(
    codec: &dyn LegacyCodec,
    charset: &str,
    decoder: &Decoder,
    exclusions: &[u32],
    lead_gaps: &[RangeInclusive<u8>],
) -> RoundTripReport {
    let services = Services::codec_only(codec);
    let mut report = RoundTripReport::default();

    for codepoint in Codepoint::all().skip(0x80) {
        if codepoint.is_surrogate() || exclusions.contains(&codepoint.value()) {
            report.skipped += 1;
            continue;
        }
        let Ok(bytes) = codec.encode(codepoint, charset) else {
            report.skipped += 1;
            continue;
        };
        let Ok(sequence) = ByteSequence::new(bytes) else {
            report.skipped += 1;
            continue;
        };
        let lead = sequence.lead();
        if lead_gaps.iter().any(|gap| gap.contains(&lead)) {
            tracing::trace!(%codepoint, lead, "lead byte outside the decoder, skipping");
            report.skipped += 1;
            continue;
        }
        let attempt = decoder.decode(&sequence, &services);
        report.compare(decoder.name(), codepoint, sequence.as_bytes(), attempt);
    }
    tracing::info!(
        decoder = decoder.name(),
        checked = report.checked,
        skipped = report.skipped,
        mismatches = report.mismatches.len(),
        "legacy round trip finished"
    );
    report
}

/// [`check_legacy_roundtrip`] for Shift-JIS with [`SHIFT_JIS_EXCLUSIONS`]
/// and [`SHIFT_JIS_LEAD_GAPS`].
pub fn check_shift_jis_roundtrip(codec: &dyn LegacyCodec) -> RoundTripReport {
    let decoder = Decoder::new("Shift-JIS", DecoderKind::ShiftJis);
    check_legacy_roundtrip(
        codec,
        crate::codec::shift_jis::CHARSET,
        &decoder,
        &SHIFT_JIS_EXCLUSIONS,
        &SHIFT_JIS_LEAD_GAPS,
    )
}
