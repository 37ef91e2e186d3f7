//! chade-core: Character inspection pipeline.
//!
//! An input string is first *interpreted* (a literal character, an escape,
//! an HTML reference or entity, or a list of hex bytes). Bytes are then
//! *decoded* by every known decoder, and each resulting codepoint is
//! *encoded* into every representation that accepts it.
//!
//! Data-backed collaborators (the Unicode character database, the HTML
//! entity table and legacy charset conversion) are reached through the
//! traits in [`services`], so this crate does no I/O.

pub mod codec;
pub mod codepoint;
pub mod decode;
pub mod encode;
pub mod error;
pub mod interpret;
pub mod outcome;
pub mod selfcheck;
pub mod services;

pub use codec::utf16::Endian;
pub use codepoint::{ByteSequence, Codepoint};
pub use decode::{Decoder, DecoderKind, DecoderSet};
pub use encode::{Encoder, EncoderKind, EncoderSet, hex_dump};
pub use error::{ChadeError, CodecError};
pub use interpret::{Interpreter, InterpreterSet, parse_byte_list};
pub use outcome::{
    DecodeAttempt, DecodeFailure, DecodeReport, EncodeAttempt, Interpretation,
    InterpretationOutcome, Representation,
};
pub use selfcheck::{
    Mismatch, RoundTripReport, SHIFT_JIS_EXCLUSIONS, SHIFT_JIS_LEAD_GAPS, check_legacy_roundtrip,
    check_shift_jis_roundtrip, check_unicode_roundtrip,
};
pub use services::{
    CharProperties, CharacterDatabase, EmptyTables, EntityTable, LegacyCodec, NO_BLOCK, Services,
};
