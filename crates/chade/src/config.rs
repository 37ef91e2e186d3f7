//! Locations of the data files.

use std::path::PathBuf;

pub const DEFAULT_UNICODE_DATA: &str = "UnicodeData.txt";
pub const DEFAULT_BLOCKS: &str = "Blocks.txt";
pub const DEFAULT_ENTITIES: &str = "entities.txt";

/// Paths of the three data files an [`Inspector`](crate::Inspector) loads.
///
/// The defaults are relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub unicode_data: PathBuf,
    pub blocks: PathBuf,
    pub entities: PathBuf,
}

impl DataPaths {
    /// All three files inside `dir`, under their default names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            unicode_data: dir.join(DEFAULT_UNICODE_DATA),
            blocks: dir.join(DEFAULT_BLOCKS),
            entities: dir.join(DEFAULT_ENTITIES),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            unicode_data: PathBuf::from(DEFAULT_UNICODE_DATA),
            blocks: PathBuf::from(DEFAULT_BLOCKS),
            entities: PathBuf::from(DEFAULT_ENTITIES),
        }
    }
}
