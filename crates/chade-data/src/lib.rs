//! chade-data: Data-backed collaborators for chade-core.
//!
//! Loads the Unicode character database (`UnicodeData.txt` and `Blocks.txt`)
//! and the HTML entity table, and converts legacy charsets through
//! `encoding_rs`. Each type implements one of the collaborator traits from
//! [`chade_core::services`].

pub mod codec;
pub mod entities;
pub mod error;
pub mod unicode_data;

pub use chade_core;
pub use codec::EncodingRsCodec;
pub use entities::HtmlEntities;
pub use error::LoadError;
pub use unicode_data::UnicodeDatabase;
