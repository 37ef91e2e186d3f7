use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Show what a character, escape, HTML reference or byte sequence is, in
/// every encoding chade knows.
#[derive(Debug, Parser)]
#[command(name = "chade", about, version)]
pub struct Cli {
    /// The input; several words are joined with single spaces
    #[arg(value_name = "INPUT", required_unless_present = "self_check")]
    pub input: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to UnicodeData.txt
    #[arg(long, env = "CHADE_UNICODE_DATA", default_value = chade::DEFAULT_UNICODE_DATA)]
    pub unicode_data: PathBuf,

    /// Path to Blocks.txt
    #[arg(long, env = "CHADE_BLOCKS", default_value = chade::DEFAULT_BLOCKS)]
    pub blocks: PathBuf,

    /// Path to the HTML entity table
    #[arg(long, env = "CHADE_ENTITIES", default_value = chade::DEFAULT_ENTITIES)]
    pub entities: PathBuf,

    /// Run a round-trip check of the decoders instead of inspecting input
    #[arg(long, value_enum, conflicts_with = "input")]
    pub self_check: Option<SelfCheck>,
}

impl Cli {
    pub fn data_paths(&self) -> chade::DataPaths {
        chade::DataPaths {
            unicode_data: self.unicode_data.clone(),
            blocks: self.blocks.clone(),
            entities: self.entities.clone(),
        }
    }
}

/// Output format for inspection results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON document
    Json,
}

/// Available round-trip checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelfCheck {
    /// UTF-8, UTF-16LE and UTF-16BE over the whole codespace
    Utf,
    /// Shift-JIS against the encoding_rs encoder
    ShiftJis,
}
