//! HTML entity names.
//!
//! The table file has one entity per line, `U+00C6<TAB>AElig`. The first two
//! characters of the codepoint column are a marker and are skipped; the rest
//! is hex.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chade_core::{Codepoint, EntityTable};

use crate::error::LoadError;

/// Entity names in both directions.
#[derive(Debug, Clone, Default)]
pub struct HtmlEntities {
    by_name: HashMap<String, Codepoint>,
    by_codepoint: HashMap<Codepoint, String>,
}

impl HtmlEntities {
    /// Parse the table from text; errors refer to it as `entities.txt`.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        Self::parse_named("entities.txt", text)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let text = std::io::read_to_string(reader)?;
        Self::parse(&text)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        Self::parse_named(&path.display().to_string(), &text)
    }

    fn parse_named(file: &str, text: &str) -> Result<Self, LoadError> {
        let mut table = Self::default();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let Some((marker, name)) = line.split_once('\t') else {
                return Err(LoadError::malformed(file, line_no, "expected <codepoint>\\t<name>"));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(LoadError::malformed(file, line_no, "empty entity name"));
            }
            let digits = marker
                .char_indices()
                .nth(2)
                .map(|(offset, _)| &marker[offset..])
                .ok_or_else(|| {
                    LoadError::malformed(file, line_no, format!("codepoint {marker:?} is too short"))
                })?;
            let codepoint = u32::from_str_radix(digits, 16)
                .ok()
                .and_then(Codepoint::new)
                .ok_or_else(|| {
                    LoadError::malformed(file, line_no, format!("invalid codepoint {marker:?}"))
                })?;

            table.insert(name, codepoint);
        }

        tracing::info!(entities = table.len(), "loaded html entities");
        Ok(table)
    }

    /// Add an entity. A later name for the same codepoint replaces the earlier one
    /// in [`EntityTable::by_codepoint`]; both still resolve by name.
    pub fn insert(&mut self, name: &str, codepoint: Codepoint) {
        self.by_name.insert(name.to_string(), codepoint);
        self.by_codepoint.insert(codepoint, name.to_string());
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl EntityTable for HtmlEntities {
    fn by_name(&self, name: &str) -> Option<Codepoint> {
        self.by_name.get(name).copied()
    }

    fn by_codepoint(&self, codepoint: Codepoint) -> Option<&str> {
        self.by_codepoint.get(&codepoint).map(String::as_str)
    }
}
