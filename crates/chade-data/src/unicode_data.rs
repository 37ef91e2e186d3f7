//! The Unicode character database: `UnicodeData.txt` plus `Blocks.txt`.
//!
//! `UnicodeData.txt` lists one codepoint per line with fifteen `;`-separated
//! fields. Ranges such as the CJK ideographs are only listed by their first
//! and last codepoint, so a codepoint without its own line takes the record
//! of the nearest listed codepoint below it. Past the last listed codepoint
//! there is no record at all.
//!
//! `Blocks.txt` maps codepoint ranges to block names and is applied on top;
//! codepoints outside every block report [`NO_BLOCK`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chade_core::{CharProperties, CharacterDatabase, Codepoint, NO_BLOCK};

use crate::error::LoadError;

const UNICODE_DATA_FIELDS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Block {
    start: u32,
    end: u32,
    name: String,
}

/// In-memory character database.
#[derive(Debug, Clone, Default)]
pub struct UnicodeDatabase {
    /// Sorted by codepoint; the `block` field is filled in at lookup.
    entries: Vec<(Codepoint, CharProperties)>,
    /// Sorted, non-overlapping.
    blocks: Vec<Block>,
}

impl UnicodeDatabase {
    /// Parse both files from text. `unicode_data` and `blocks` are the file
    /// contents; error messages call them `UnicodeData.txt` and `Blocks.txt`.
    pub fn parse(unicode_data: &str, blocks: &str) -> Result<Self, LoadError> {
        Self::parse_named(
            ("UnicodeData.txt", unicode_data),
            ("Blocks.txt", blocks),
        )
    }

    /// Read both files from arbitrary readers.
    pub fn from_readers<R1: Read, R2: Read>(unicode_data: R1, blocks: R2) -> Result<Self, LoadError> {
        let unicode_data = std::io::read_to_string(unicode_data)?;
        let blocks = std::io::read_to_string(blocks)?;
        Self::parse(&unicode_data, &blocks)
    }

    /// Open and parse both files.
    pub fn open(unicode_data: impl AsRef<Path>, blocks: impl AsRef<Path>) -> Result<Self, LoadError> {
        let unicode_data = unicode_data.as_ref();
        let blocks = blocks.as_ref();
        let data_text = read_file(unicode_data)?;
        let blocks_text = read_file(blocks)?;
        Self::parse_named(
            (&unicode_data.display().to_string(), &data_text),
            (&blocks.display().to_string(), &blocks_text),
        )
    }

    fn parse_named(unicode_data: (&str, &str), blocks: (&str, &str)) -> Result<Self, LoadError> {
        let entries = parse_unicode_data(unicode_data.0, unicode_data.1)?;
        let blocks = parse_blocks(blocks.0, blocks.1)?;
        tracing::info!(
            entries = entries.len(),
            blocks = blocks.len(),
            "loaded unicode database"
        );
        Ok(Self { entries, blocks })
    }

    /// Number of listed codepoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The highest codepoint with its own line.
    pub fn last_listed(&self) -> Option<Codepoint> {
        self.entries.last().map(|(cp, _)| *cp)
    }

    /// Block containing `codepoint`, or [`NO_BLOCK`].
    pub fn block_of(&self, codepoint: Codepoint) -> &str {
        let value = codepoint.value();
        let idx = self.blocks.partition_point(|b| b.start <= value);
        match idx.checked_sub(1).map(|i| &self.blocks[i]) {
            Some(block) if value <= block.end => &block.name,
            _ => NO_BLOCK,
        }
    }
}

impl CharacterDatabase for UnicodeDatabase {
    fn lookup(&self, codepoint: Codepoint) -> Option<CharProperties> {
        if codepoint > self.last_listed()? {
            return None;
        }
        let idx = self.entries.partition_point(|(cp, _)| *cp <= codepoint);
        let (_, record) = self.entries.get(idx.checked_sub(1)?)?;
        let mut props = record.clone();
        props.block = self.block_of(codepoint).to_string();
        Some(props)
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    let mut file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(text)
}

fn parse_hex(file: &str, line: usize, text: &str) -> Result<Codepoint, LoadError> {
    let value = u32::from_str_radix(text.trim(), 16)
        .map_err(|_| LoadError::malformed(file, line, format!("invalid codepoint {text:?}")))?;
    Codepoint::new(value).ok_or_else(|| {
        LoadError::malformed(file, line, format!("codepoint {value:X} is out of range"))
    })
}

fn parse_unicode_data(file: &str, text: &str) -> Result<Vec<(Codepoint, CharProperties)>, LoadError> {
    let mut entries: Vec<(Codepoint, CharProperties)> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != UNICODE_DATA_FIELDS {
            return Err(LoadError::malformed(
                file,
                line_no,
                format!("expected {UNICODE_DATA_FIELDS} fields, found {}", fields.len()),
            ));
        }
        let codepoint = parse_hex(file, line_no, fields[0])?;
        if let Some((previous, _)) = entries.last() {
            if *previous >= codepoint {
                return Err(LoadError::malformed(
                    file,
                    line_no,
                    format!("codepoint {codepoint} does not follow {previous}"),
                ));
            }
        }

        let field = |i: usize| fields[i].to_string();
        entries.push((
            codepoint,
            CharProperties {
                name: field(1),
                block: String::new(),
                general_category: field(2),
                combining_class: field(3),
                bidi_class: field(4),
                decomposition_type: field(5),
                decomposition_mapping: field(6),
                numeric_type: field(7),
                numeric_value: field(8),
                bidi_mirrored: field(9),
                unicode1_name: field(10),
                iso_comment: field(11),
                uppercase_mapping: field(12),
                lowercase_mapping: field(13),
                titlecase_mapping: field(14),
            },
        ));
    }
    Ok(entries)
}

fn parse_blocks(file: &str, text: &str) -> Result<Vec<Block>, LoadError> {
    let mut blocks: Vec<Block> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((range, name)) = line.split_once(';') else {
            return Err(LoadError::malformed(file, line_no, "missing ';'"));
        };
        let Some((start, end)) = range.split_once("..") else {
            return Err(LoadError::malformed(file, line_no, "missing '..' in range"));
        };
        let start = parse_hex(file, line_no, start)?.value();
        let end = parse_hex(file, line_no, end)?.value();
        if start > end {
            return Err(LoadError::malformed(
                file,
                line_no,
                format!("range {start:04X}..{end:04X} is reversed"),
            ));
        }
        if blocks.last().is_some_and(|b| b.end >= start) {
            return Err(LoadError::malformed(
                file,
                line_no,
                "block overlaps or precedes the previous one",
            ));
        }
        blocks.push(Block {
            start,
            end,
            name: name.trim().to_string(),
        });
    }
    Ok(blocks)
}
