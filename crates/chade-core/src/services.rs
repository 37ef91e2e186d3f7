//! Collaborator interfaces the pipeline depends on.
//!
//! The pipeline never loads data itself. Character properties, HTML entity
//! names and legacy charset conversion are reached through the traits in
//! this module, bundled in [`Services`]. Implementations backed by real data
//! files and `encoding_rs` live in the `chade-data` crate; tests can supply
//! small fixture tables instead.

use std::fmt;

use crate::codepoint::Codepoint;
use crate::error::CodecError;

/// Block name reported for codepoints outside every known block.
pub const NO_BLOCK: &str = "No_Block";

/// The Unicode character database record for one codepoint.
///
/// All fields are stored as the raw text of the database; empty strings mean
/// the field is not set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharProperties {
    pub name: String,
    pub block: String,
    pub general_category: String,
    pub combining_class: String,
    pub bidi_class: String,
    pub decomposition_type: String,
    pub decomposition_mapping: String,
    pub numeric_type: String,
    pub numeric_value: String,
    pub bidi_mirrored: String,
    pub unicode1_name: String,
    pub iso_comment: String,
    pub uppercase_mapping: String,
    pub lowercase_mapping: String,
    pub titlecase_mapping: String,
}

impl CharProperties {
    /// Two-letter general category, e.g. `"Lu"` or `"Cc"`.
    pub fn category(&self) -> &str {
        &self.general_category
    }
}

impl fmt::Display for CharProperties {
    /// One `Label: value` line per field. Name and block are always shown,
    /// every other field only when set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Block: {}", self.block)?;
        let optional = [
            ("General Category", &self.general_category),
            ("Canonical Combining Class", &self.combining_class),
            ("Bidi Class", &self.bidi_class),
            ("Decomposition Type", &self.decomposition_type),
            ("Decomposition Mapping", &self.decomposition_mapping),
            ("Numeric Type", &self.numeric_type),
            ("Numeric Value", &self.numeric_value),
            ("Bidi Mirrored", &self.bidi_mirrored),
            ("Unicode 1 Name", &self.unicode1_name),
            ("ISO Comment", &self.iso_comment),
            ("Simple Uppercase Mapping", &self.uppercase_mapping),
            ("Simple Lowercase Mapping", &self.lowercase_mapping),
            ("Simple Titlecase Mapping", &self.titlecase_mapping),
        ];
        for (label, value) in optional {
            if !value.is_empty() {
                write!(f, "\n{label}: {value}")?;
            }
        }
        Ok(())
    }
}

/// Answers property questions about codepoints.
pub trait CharacterDatabase: Send + Sync {
    /// Full property record, including the block name, or `None` when the
    /// database has nothing for this codepoint.
    fn lookup(&self, codepoint: Codepoint) -> Option<CharProperties>;
}

/// Bidirectional map between HTML entity names and codepoints.
pub trait EntityTable: Send + Sync {
    /// Codepoint named by `name` (without `&` and `;`).
    fn by_name(&self, name: &str) -> Option<Codepoint>;

    /// Preferred entity name for `codepoint`.
    fn by_codepoint(&self, codepoint: Codepoint) -> Option<&str>;
}

/// Converts between codepoints and named legacy charsets.
pub trait LegacyCodec: Send + Sync {
    /// Decode `bytes` in `charset`, returning the first decoded codepoint.
    fn decode(&self, bytes: &[u8], charset: &str) -> Result<Codepoint, CodecError>;

    /// Encode `codepoint` in `charset`.
    fn encode(&self, codepoint: Codepoint, charset: &str) -> Result<Vec<u8>, CodecError>;
}

/// Tables with no entries and a codec that supports no charset.
///
/// Stands in for collaborators a caller does not need, e.g. the round-trip
/// checks only use codecs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyTables;

impl CharacterDatabase for EmptyTables {
    fn lookup(&self, _codepoint: Codepoint) -> Option<CharProperties> {
        None
    }
}

impl EntityTable for EmptyTables {
    fn by_name(&self, _name: &str) -> Option<Codepoint> {
        None
    }

    fn by_codepoint(&self, _codepoint: Codepoint) -> Option<&str> {
        None
    }
}

impl LegacyCodec for EmptyTables {
    fn decode(&self, _bytes: &[u8], charset: &str) -> Result<Codepoint, CodecError> {
        Err(CodecError::UnsupportedCharset(charset.to_string()))
    }

    fn encode(&self, _codepoint: Codepoint, charset: &str) -> Result<Vec<u8>, CodecError> {
        Err(CodecError::UnsupportedCharset(charset.to_string()))
    }
}

/// The collaborators one pipeline run reads from.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    pub characters: &'a dyn CharacterDatabase,
    pub entities: &'a dyn EntityTable,
    pub codec: &'a dyn LegacyCodec,
}

impl<'a> Services<'a> {
    pub fn new(
        characters: &'a dyn CharacterDatabase,
        entities: &'a dyn EntityTable,
        codec: &'a dyn LegacyCodec,
    ) -> Self {
        Self {
            characters,
            entities,
            codec,
        }
    }

    /// Services backed by [`EmptyTables`] except for `codec`.
    pub fn codec_only(codec: &'a dyn LegacyCodec) -> Self {
        Self {
            characters: &EmptyTables,
            entities: &EmptyTables,
            codec,
        }
    }
}

impl fmt::Debug for Services<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin_capital_a() -> CharProperties {
        CharProperties {
            name: "LATIN CAPITAL LETTER A".to_string(),
            block: "Basic Latin".to_string(),
            general_category: "Lu".to_string(),
            combining_class: "0".to_string(),
            bidi_class: "L".to_string(),
            bidi_mirrored: "N".to_string(),
            lowercase_mapping: "0061".to_string(),
            ..CharProperties::default()
        }
    }

    #[test]
    fn display_omits_empty_fields() {
        let text = latin_capital_a().to_string();
        assert_eq!(
            text,
            "Name: LATIN CAPITAL LETTER A\n\
             Block: Basic Latin\n\
             General Category: Lu\n\
             Canonical Combining Class: 0\n\
             Bidi Class: L\n\
             Bidi Mirrored: N\n\
             Simple Lowercase Mapping: 0061"
        );
    }

    #[test]
    fn display_always_shows_name_and_block() {
        let text = CharProperties::default().to_string();
        assert_eq!(text, "Name: \nBlock: ");
    }

    #[test]
    fn category_accessor() {
        assert_eq!(latin_capital_a().category(), "Lu");
    }

    #[test]
    fn empty_tables_know_nothing() {
        let cp = Codepoint::from('A');
        assert_eq!(CharacterDatabase::lookup(&EmptyTables, cp), None);
        assert_eq!(EmptyTables.by_name("amp"), None);
        assert_eq!(EmptyTables.by_codepoint(cp), None);
        assert_eq!(
            LegacyCodec::decode(&EmptyTables, &[0x41], "koi8-r"),
            Err(CodecError::UnsupportedCharset("koi8-r".to_string()))
        );
    }
}
