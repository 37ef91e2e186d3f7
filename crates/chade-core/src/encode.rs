//! Encode dispatcher: every representation of one codepoint.
//!
//! Each [`Encoder`] either accepts a codepoint and renders it, or declines
//! silently. An [`EncoderSet`] runs all of them in registry order and keeps
//! the accepted outputs.

use crate::codec::{ascii, utf16, utf8};
use crate::codepoint::Codepoint;
use crate::outcome::{EncodeAttempt, Representation};
use crate::services::{NO_BLOCK, Services};
use crate::codec::utf16::Endian;

/// General categories whose characters have no visible glyph to print.
const INVISIBLE_CATEGORIES: [&str; 7] = ["Cc", "Cf", "Co", "Cs", "Zl", "Zp", "Zs"];

/// Legacy charset encoders: display name and codec label.
///
/// No ISO-2022-KR: encoding_rs maps that label to the replacement encoding,
/// which cannot encode anything.
const LEGACY_ENCODERS: &[(&str, &str)] = &[
    ("ISO-8859-1 (latin1)", "iso-8859-1"),
    ("Windows-1252 (latin1 for windows)", "windows-1252"),
    ("Windows-1256 (arab windows)", "windows-1256"),
    ("ISO-8859-7 (greek)", "iso-8859-7"),
    ("Windows-1253 (greek windows)", "windows-1253"),
    ("ISO-8859-8 (hebrew)", "iso-8859-8"),
    ("Windows-1255 (hebrew windows)", "windows-1255"),
    ("Shift-JIS", "shift_jis"),
    ("ISO-2022-JP", "iso-2022-jp"),
    ("EUC-JP", "euc-jp"),
    ("EUC-KR", "euc-kr"),
    ("KOI8-R (cyrillic)", "koi8-r"),
    ("Windows-1251 (russian windows)", "windows-1251"),
    ("Windows-874 (thai windows)", "windows-874"),
    ("ISO-8859-11 (thai)", "iso-8859-11"),
    ("TIS-620 (thai)", "tis-620"),
    ("Windows-1258 (vietnamese)", "windows-1258"),
    ("EUC-CN (chinese)", "gb2312"),
    ("BIG5 (chinese)", "big5"),
    ("GBK (chinese)", "gbk"),
];

/// Render bytes as `(hex) XX XX ...`.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::from("(hex)");
    for byte in bytes {
        out.push_str(&format!(" {byte:02X}"));
    }
    out
}

/// What an encoder renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderKind {
    /// The glyph itself, unless it is invisible.
    Character,
    /// `F (decimal: 15)`
    Codepoint,
    /// The character database record.
    UnicodeInfo,
    /// `\uXXXX`
    EscapedLiteral,
    /// Numeric references plus the named entity when there is one.
    HtmlEntity,
    Ascii,
    Utf8,
    Utf16(Endian),
    /// Bytes from the legacy codec in `charset`.
    Legacy {
        charset: String,
        /// Decline codepoints below 128, which every legacy charset shares with ASCII.
        exclude_ascii: bool,
    },
}

/// A named encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoder {
    name: String,
    kind: EncoderKind,
}

impl Encoder {
    pub fn new(name: impl Into<String>, kind: EncoderKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// A legacy charset encoder that leaves ASCII to the ASCII encoder.
    pub fn legacy(name: impl Into<String>, charset: impl Into<String>) -> Self {
        Self::new(
            name,
            EncoderKind::Legacy {
                charset: charset.into(),
                exclude_ascii: true,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &EncoderKind {
        &self.kind
    }

    pub fn encode(&self, codepoint: Codepoint, services: &Services<'_>) -> EncodeAttempt {
        match &self.kind {
            EncoderKind::Character => encode_character(codepoint, services),
            EncoderKind::Codepoint => EncodeAttempt::Accepted(format!(
                "{codepoint:X} (decimal: {})",
                codepoint.value()
            )),
            EncoderKind::UnicodeInfo => EncodeAttempt::Accepted(unicode_info(codepoint, services)),
            EncoderKind::EscapedLiteral => {
                EncodeAttempt::Accepted(format!("\\u{codepoint:04X}"))
            }
            EncoderKind::HtmlEntity => EncodeAttempt::Accepted(html_references(codepoint, services)),
            EncoderKind::Ascii => match ascii::encode(codepoint) {
                Some(byte) => EncodeAttempt::Accepted(hex_dump(&[byte])),
                None => EncodeAttempt::Declined,
            },
            EncoderKind::Utf8 => EncodeAttempt::Accepted(hex_dump(&utf8::encode(codepoint))),
            EncoderKind::Utf16(endian) => {
                EncodeAttempt::Accepted(hex_dump(&utf16::encode(codepoint, *endian)))
            }
            EncoderKind::Legacy {
                charset,
                exclude_ascii,
            } => {
                if *exclude_ascii && codepoint.value() < 0x80 {
                    return EncodeAttempt::Declined;
                }
                match services.codec.encode(codepoint, charset) {
                    Ok(bytes) if !bytes.is_empty() => EncodeAttempt::Accepted(hex_dump(&bytes)),
                    Ok(_) => EncodeAttempt::Declined,
                    Err(err) => {
                        tracing::trace!(encoder = %self.name, error = %err, "encoder declined");
                        EncodeAttempt::Declined
                    }
                }
            }
        }
    }
}

fn encode_character(codepoint: Codepoint, services: &Services<'_>) -> EncodeAttempt {
    let Some(ch) = codepoint.as_char() else {
        return EncodeAttempt::Declined;
    };
    let invisible = match services.characters.lookup(codepoint) {
        Some(props) => INVISIBLE_CATEGORIES.contains(&props.category()),
        None => ch.is_control() || ch.is_whitespace(),
    };
    if invisible {
        EncodeAttempt::Declined
    } else {
        EncodeAttempt::Accepted(ch.to_string())
    }
}

fn unicode_info(codepoint: Codepoint, services: &Services<'_>) -> String {
    match services.characters.lookup(codepoint) {
        Some(props) => props.to_string(),
        None => format!("Name: <unknown>\nBlock: {NO_BLOCK}"),
    }
}

fn html_references(codepoint: Codepoint, services: &Services<'_>) -> String {
    let mut out = format!(
        "decimal: &#{}; hexadecimal: &#{codepoint:X};",
        codepoint.value()
    );
    if let Some(name) = services.entities.by_codepoint(codepoint) {
        out.push_str(&format!(" entity: &{name};"));
    }
    out
}

/// Ordered list of encoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderSet {
    encoders: Vec<Encoder>,
}

impl EncoderSet {
    pub fn new(encoders: Vec<Encoder>) -> Self {
        Self { encoders }
    }

    /// The built-in encoders followed by the legacy charsets.
    pub fn standard() -> Self {
        let mut encoders = vec![
            Encoder::new("Character", EncoderKind::Character),
            Encoder::new("Codepoint", EncoderKind::Codepoint),
            Encoder::new("Unicode Informations", EncoderKind::UnicodeInfo),
            Encoder::new("Java String Literal", EncoderKind::EscapedLiteral),
            Encoder::new("HTML Entity", EncoderKind::HtmlEntity),
            Encoder::new("ASCII", EncoderKind::Ascii),
            Encoder::new("UTF-8", EncoderKind::Utf8),
            Encoder::new("UTF-16LE", EncoderKind::Utf16(Endian::Little)),
            Encoder::new("UTF-16BE", EncoderKind::Utf16(Endian::Big)),
        ];
        encoders.extend(
            LEGACY_ENCODERS
                .iter()
                .map(|&(name, charset)| Encoder::legacy(name, charset)),
        );
        Self::new(encoders)
    }

    pub fn encoders(&self) -> &[Encoder] {
        &self.encoders
    }

    pub fn get(&self, name: &str) -> Option<&Encoder> {
        self.encoders.iter().find(|e| e.name == name)
    }

    /// Run every encoder; declined encoders are left out.
    pub fn encode(&self, codepoint: Codepoint, services: &Services<'_>) -> Vec<Representation> {
        self.encoders
            .iter()
            .filter_map(|encoder| {
                encoder
                    .encode(codepoint, services)
                    .accepted()
                    .map(|value| Representation {
                        encoder: encoder.name.clone(),
                        value,
                    })
            })
            .collect()
    }
}

impl Default for EncoderSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::services::{CharProperties, CharacterDatabase, EmptyTables, EntityTable, LegacyCodec};

    struct Characters;

    impl CharacterDatabase for Characters {
        fn lookup(&self, codepoint: Codepoint) -> Option<CharProperties> {
            let (name, category) = match codepoint.value() {
                0x09 => ("<control>", "Cc"),
                0x20 => ("SPACE", "Zs"),
                0x41 => ("LATIN CAPITAL LETTER A", "Lu"),
                0xAD => ("SOFT HYPHEN", "Cf"),
                0xE9 => ("LATIN SMALL LETTER E WITH ACUTE", "Ll"),
                0x2028 => ("LINE SEPARATOR", "Zl"),
                0xE000 => ("<Private Use, First>", "Co"),
                _ => return None,
            };
            Some(CharProperties {
                name: name.to_string(),
                block: "Test Block".to_string(),
                general_category: category.to_string(),
                ..CharProperties::default()
            })
        }
    }

    struct Entities;

    impl EntityTable for Entities {
        fn by_name(&self, _name: &str) -> Option<Codepoint> {
            None
        }

        fn by_codepoint(&self, codepoint: Codepoint) -> Option<&str> {
            (codepoint.value() == 0xE9).then_some("eacute")
        }
    }

    /// Latin-1 only.
    struct Latin1;

    impl LegacyCodec for Latin1 {
        fn decode(&self, bytes: &[u8], _charset: &str) -> Result<Codepoint, CodecError> {
            Ok(Codepoint::from(char::from(bytes[0])))
        }

        fn encode(&self, codepoint: Codepoint, charset: &str) -> Result<Vec<u8>, CodecError> {
            match (charset, u8::try_from(codepoint.value())) {
                ("iso-8859-1", Ok(byte)) => Ok(vec![byte]),
                _ => Err(CodecError::Unrepresentable {
                    codepoint,
                    charset: charset.to_string(),
                }),
            }
        }
    }

    fn services() -> Services<'static> {
        Services::new(&Characters, &Entities, &Latin1)
    }

    fn cp(value: u32) -> Codepoint {
        Codepoint::new(value).unwrap()
    }

    fn encode(name: &str, value: u32) -> EncodeAttempt {
        EncoderSet::standard()
            .get(name)
            .unwrap()
            .encode(cp(value), &services())
    }

    fn accepted(value: &str) -> EncodeAttempt {
        EncodeAttempt::Accepted(value.to_string())
    }

    // ========== Character ==========

    #[test]
    fn character_renders_glyph() {
        assert_eq!(encode("Character", 0xE9), accepted("é"));
    }

    #[test]
    fn character_declines_invisible_categories() {
        for value in [0x09, 0x20, 0xAD, 0x2028, 0xE000] {
            assert_eq!(encode("Character", value), EncodeAttempt::Declined, "{value:X}");
        }
    }

    #[test]
    fn character_declines_surrogates() {
        assert_eq!(encode("Character", 0xD800), EncodeAttempt::Declined);
    }

    #[test]
    fn character_without_record_falls_back_to_std() {
        assert_eq!(encode("Character", 0x4E00), accepted("一"));
        assert_eq!(encode("Character", 0x0A), EncodeAttempt::Declined);
        assert_eq!(encode("Character", 0x3000), EncodeAttempt::Declined);
    }

    // ========== textual forms ==========

    #[test]
    fn codepoint_form() {
        assert_eq!(encode("Codepoint", 0x0F), accepted("F (decimal: 15)"));
        assert_eq!(encode("Codepoint", 0x1F600), accepted("1F600 (decimal: 128512)"));
    }

    #[test]
    fn escaped_literal_pads_to_four_digits() {
        assert_eq!(encode("Java String Literal", 0x41), accepted("\\u0041"));
        assert_eq!(encode("Java String Literal", 0x1F600), accepted("\\u1F600"));
    }

    #[test]
    fn html_entity_with_and_without_name() {
        assert_eq!(
            encode("HTML Entity", 0xE9),
            accepted("decimal: &#233; hexadecimal: &#E9; entity: &eacute;")
        );
        assert_eq!(
            encode("HTML Entity", 0x41),
            accepted("decimal: &#65; hexadecimal: &#41;")
        );
    }

    #[test]
    fn legacy_encoders_skip_iso_2022_kr() {
        let set = EncoderSet::standard();
        assert!(set.get("EUC-KR").is_some());
        assert!(
            set.encoders()
                .iter()
                .all(|e| !e.name().contains("2022-KR"))
        );
    }

    #[test]
    fn html_hexadecimal_reference_reads_back() {
        use crate::interpret::InterpreterSet;
        use crate::outcome::InterpretationOutcome;

        for value in [0x41, 0xE9, 0x1F600] {
            let rendered = encode("HTML Entity", value).accepted().unwrap();
            let token = rendered
                .split_whitespace()
                .skip_while(|word| *word != "hexadecimal:")
                .nth(1)
                .unwrap();
            let result = InterpreterSet::standard().interpret(token, &services());
            assert_eq!(
                result.interpreter.as_deref(),
                Some("HTML hexadecimal character reference"),
                "{token}"
            );
            assert_eq!(result.outcome, InterpretationOutcome::Codepoint(cp(value)));
        }
    }

    #[test]
    fn unicode_info_uses_database() {
        let info = encode("Unicode Informations", 0x41).accepted().unwrap();
        assert!(info.starts_with("Name: LATIN CAPITAL LETTER A\nBlock: Test Block"));
        assert!(info.contains("General Category: Lu"));
    }

    #[test]
    fn unicode_info_without_record() {
        assert_eq!(
            encode("Unicode Informations", 0x10FFFF),
            accepted("Name: <unknown>\nBlock: No_Block")
        );
    }

    // ========== byte forms ==========

    #[test]
    fn hex_dump_format() {
        assert_eq!(hex_dump(&[0xE3, 0x81, 0x82]), "(hex) E3 81 82");
        assert_eq!(hex_dump(&[]), "(hex)");
    }

    #[test]
    fn ascii_only_below_128() {
        assert_eq!(encode("ASCII", 0x41), accepted("(hex) 41"));
        assert_eq!(encode("ASCII", 0xE9), EncodeAttempt::Declined);
    }

    #[test]
    fn utf8_and_utf16_forms() {
        assert_eq!(encode("UTF-8", 0x20AC), accepted("(hex) E2 82 AC"));
        assert_eq!(encode("UTF-16LE", 0x20AC), accepted("(hex) AC 20"));
        assert_eq!(encode("UTF-16BE", 0x1F600), accepted("(hex) D8 3D DE 00"));
    }

    #[test]
    fn legacy_excludes_ascii() {
        assert_eq!(encode("ISO-8859-1 (latin1)", 0x41), EncodeAttempt::Declined);
        assert_eq!(encode("ISO-8859-1 (latin1)", 0xE9), accepted("(hex) E9"));
    }

    #[test]
    fn legacy_declines_on_codec_rejection() {
        assert_eq!(encode("ISO-8859-1 (latin1)", 0x20AC), EncodeAttempt::Declined);
        assert_eq!(encode("KOI8-R (cyrillic)", 0xE9), EncodeAttempt::Declined);
    }

    #[test]
    fn legacy_without_ascii_exclusion() {
        let encoder = Encoder::new(
            "latin1 incl. ASCII",
            EncoderKind::Legacy {
                charset: "iso-8859-1".to_string(),
                exclude_ascii: false,
            },
        );
        assert_eq!(encoder.encode(cp(0x41), &services()), accepted("(hex) 41"));
    }

    // ========== dispatcher ==========

    #[test]
    fn tab_declines_character_only() {
        let names: Vec<String> = EncoderSet::standard()
            .encode(cp(0x09), &services())
            .into_iter()
            .map(|r| r.encoder)
            .collect();
        assert!(!names.iter().any(|n| n == "Character"));
        for expected in ["Codepoint", "Java String Literal", "HTML Entity", "ASCII", "UTF-8"] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn results_follow_registry_order() {
        let results = EncoderSet::standard().encode(cp(0xE9), &services());
        let names: Vec<&str> = results.iter().map(|r| r.encoder.as_str()).collect();
        assert_eq!(
            names,
            [
                "Character",
                "Codepoint",
                "Unicode Informations",
                "Java String Literal",
                "HTML Entity",
                "UTF-8",
                "UTF-16LE",
                "UTF-16BE",
                "ISO-8859-1 (latin1)",
            ]
        );
    }

    #[test]
    fn empty_tables_still_encode() {
        let services = Services::codec_only(&EmptyTables);
        let results = EncoderSet::standard().encode(cp(0x41), &services);
        assert_eq!(results[0].value, "A");
        assert_eq!(results.len(), 9);
    }
}
