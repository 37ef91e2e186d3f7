//! Decode dispatcher: one byte sequence against every known decoder.

use crate::codec::{ascii, convert, shift_jis, utf16, utf8};
use crate::codepoint::ByteSequence;
use crate::outcome::{DecodeAttempt, DecodeReport};
use crate::services::Services;
use crate::codec::utf16::Endian;

/// Single-byte legacy charsets: display name and codec label.
const LEGACY_DECODERS: &[(&str, &str)] = &[
    ("ISO-8859-1 (latin1)", "iso-8859-1"),
    ("Windows-1252 (latin1 for windows)", "windows-1252"),
    ("Windows-1256 (arab windows)", "windows-1256"),
    ("ISO-8859-7 (greek)", "iso-8859-7"),
    ("Windows-1253 (greek windows)", "windows-1253"),
    ("ISO-8859-8 (hebrew)", "iso-8859-8"),
    ("Windows-1255 (hebrew windows)", "windows-1255"),
    ("KOI8-R (cyrillic)", "koi8-r"),
    ("Windows-1251 (russian windows)", "windows-1251"),
    ("Windows-874 (thai windows)", "windows-874"),
    ("ISO-8859-11 (thai)", "iso-8859-11"),
    ("TIS-620 (thai)", "tis-620"),
    ("Windows-1258 (vietnamese)", "windows-1258"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoderKind {
    Ascii,
    Utf8,
    Utf16(Endian),
    ShiftJis,
    /// A single-byte charset decoded through the legacy codec.
    Legacy { charset: String },
}

/// A named decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoder {
    name: String,
    kind: DecoderKind,
}

impl Decoder {
    pub fn new(name: impl Into<String>, kind: DecoderKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn legacy(name: impl Into<String>, charset: impl Into<String>) -> Self {
        Self::new(
            name,
            DecoderKind::Legacy {
                charset: charset.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &DecoderKind {
        &self.kind
    }

    pub fn decode(&self, bytes: &ByteSequence, services: &Services<'_>) -> DecodeAttempt {
        let bytes = bytes.as_bytes();
        match &self.kind {
            DecoderKind::Ascii => ascii::decode(bytes),
            DecoderKind::Utf8 => utf8::decode(bytes),
            DecoderKind::Utf16(endian) => utf16::decode(bytes, *endian),
            DecoderKind::ShiftJis => shift_jis::decode(bytes, services.codec),
            DecoderKind::Legacy { charset } => {
                if bytes.len() > 1 {
                    DecodeAttempt::failure("more than one byte")
                } else {
                    convert(services.codec, bytes, charset)
                }
            }
        }
    }
}

/// Ordered list of decoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderSet {
    decoders: Vec<Decoder>,
}

impl DecoderSet {
    pub fn new(decoders: Vec<Decoder>) -> Self {
        Self { decoders }
    }

    /// ASCII, UTF-8 and UTF-16, then the single-byte charsets, then Shift-JIS.
    pub fn standard() -> Self {
        let mut decoders = vec![
            Decoder::new("ASCII", DecoderKind::Ascii),
            Decoder::new("UTF-8", DecoderKind::Utf8),
            Decoder::new("UTF-16LE", DecoderKind::Utf16(Endian::Little)),
            Decoder::new("UTF-16BE", DecoderKind::Utf16(Endian::Big)),
        ];
        decoders.extend(
            LEGACY_DECODERS
                .iter()
                .map(|&(name, charset)| Decoder::legacy(name, charset)),
        );
        decoders.push(Decoder::new("Shift-JIS", DecoderKind::ShiftJis));
        Self::new(decoders)
    }

    pub fn decoders(&self) -> &[Decoder] {
        &self.decoders
    }

    /// Run every decoder and collect the outcomes.
    pub fn decode(&self, bytes: &ByteSequence, services: &Services<'_>) -> DecodeReport {
        let mut report = DecodeReport::new();
        for decoder in &self.decoders {
            let attempt = decoder.decode(bytes, services);
            if let Some(reason) = attempt.reason() {
                tracing::debug!(decoder = %decoder.name, reason, "decoder rejected bytes");
            }
            report.record(&decoder.name, attempt);
        }
        report
    }
}

impl Default for DecoderSet {
    fn default() -> Self {
        Self::standard()
    }
}
