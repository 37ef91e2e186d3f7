//! chade: find out what a character, escape, entity or byte sequence is.
//!
//! This is the public API facade. [`Inspector`] owns the loaded tables and
//! the interpreter, decoder and encoder registries, and runs the pipeline
//! from `chade-core` over them.
//!
//! # Architecture
//!
//! - **chade-core**: data model, codecs and the pipeline stages
//! - **chade-data**: Unicode database, HTML entities and `encoding_rs` codec
//! - **chade** (this crate): [`Inspector`] and [`DataPaths`]
//!
//! ```no_run
//! use chade::{DataPaths, Inspector};
//!
//! let inspector = Inspector::load(&DataPaths::default())?;
//! let inspection = inspector.inspect("e3 81 82");
//! for candidate in &inspection.candidates {
//!     println!("{:X} via {:?}", candidate.codepoint, candidate.decoders);
//! }
//! # Ok::<(), chade::ChadeError>(())
//! ```

mod config;
mod inspector;

pub use chade_core;
pub use chade_core::{
    ByteSequence, ChadeError, CharProperties, Codepoint, DecodeFailure, DecodeReport,
    Interpretation, InterpretationOutcome, Representation, RoundTripReport,
};
pub use chade_data;
pub use config::{DEFAULT_BLOCKS, DEFAULT_ENTITIES, DEFAULT_UNICODE_DATA, DataPaths};
pub use inspector::{Candidate, Inspection, Inspector};
