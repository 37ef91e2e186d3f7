//! Result values produced at each stage of the pipeline.
//!
//! Every stage reports an explicit value: an [`Interpretation`] for the raw
//! input, a [`DecodeReport`] collecting every decoder's [`DecodeAttempt`],
//! and a list of [`Representation`]s for the encoders that accepted a
//! codepoint.

use std::collections::BTreeMap;

use crate::codepoint::{ByteSequence, Codepoint};

/// What an input string was understood to denote.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum InterpretationOutcome {
    /// The input names a single codepoint directly.
    Codepoint(Codepoint),
    /// The input is a raw byte sequence still to be decoded.
    Bytes(ByteSequence),
    /// No interpreter claimed the input.
    Unrecognized,
}

/// The outcome of interpretation together with the interpreter that claimed it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpretation {
    /// Name of the claiming interpreter; `None` when unrecognized.
    pub interpreter: Option<String>,
    pub outcome: InterpretationOutcome,
}

impl Interpretation {
    pub fn claimed(interpreter: impl Into<String>, outcome: InterpretationOutcome) -> Self {
        Self {
            interpreter: Some(interpreter.into()),
            outcome,
        }
    }

    pub fn unrecognized() -> Self {
        Self {
            interpreter: None,
            outcome: InterpretationOutcome::Unrecognized,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self.outcome, InterpretationOutcome::Unrecognized)
    }
}

/// Result of running one decoder against one byte sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeAttempt {
    Success(Codepoint),
    /// Human-readable reason the bytes are not valid for this decoder.
    Failure(String),
}

impl DecodeAttempt {
    pub fn failure(reason: impl Into<String>) -> Self {
        DecodeAttempt::Failure(reason.into())
    }

    pub fn codepoint(&self) -> Option<Codepoint> {
        match self {
            DecodeAttempt::Success(cp) => Some(*cp),
            DecodeAttempt::Failure(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            DecodeAttempt::Success(_) => None,
            DecodeAttempt::Failure(reason) => Some(reason),
        }
    }
}

/// A decoder that rejected the byte sequence, with its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeFailure {
    pub decoder: String,
    pub reason: String,
}

/// Aggregate of every decoder's attempt on one byte sequence.
///
/// Successes are grouped by the codepoint they produced; decoders that agree
/// are listed together under that codepoint in registry order. Failures keep
/// registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodeReport {
    successes: BTreeMap<Codepoint, Vec<String>>,
    failures: Vec<DecodeFailure>,
}

impl DecodeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the attempt of the decoder named `decoder`.
    pub fn record(&mut self, decoder: &str, attempt: DecodeAttempt) {
        match attempt {
            DecodeAttempt::Success(cp) => {
                self.successes
                    .entry(cp)
                    .or_default()
                    .push(decoder.to_string());
            }
            DecodeAttempt::Failure(reason) => self.failures.push(DecodeFailure {
                decoder: decoder.to_string(),
                reason,
            }),
        }
    }

    /// Decoded codepoints, ascending, each with the decoders that produced it.
    pub fn successes(&self) -> &BTreeMap<Codepoint, Vec<String>> {
        &self.successes
    }

    pub fn failures(&self) -> &[DecodeFailure] {
        &self.failures
    }

    /// Names of the decoders that produced `codepoint`.
    pub fn decoders_for(&self, codepoint: Codepoint) -> &[String] {
        self.successes
            .get(&codepoint)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Failure reason reported by the decoder named `decoder`.
    pub fn reason_for(&self, decoder: &str) -> Option<&str> {
        self.failures
            .iter()
            .find(|f| f.decoder == decoder)
            .map(|f| f.reason.as_str())
    }

    /// `true` when no decoder succeeded.
    pub fn is_fully_failed(&self) -> bool {
        self.successes.is_empty()
    }
}

/// Result of running one encoder against one codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeAttempt {
    Accepted(String),
    /// The encoder has nothing to show for this codepoint. Not an error.
    Declined,
}

impl EncodeAttempt {
    pub fn accepted(self) -> Option<String> {
        match self {
            EncodeAttempt::Accepted(value) => Some(value),
            EncodeAttempt::Declined => None,
        }
    }
}

/// An accepted encoder output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Representation {
    pub encoder: String,
    pub value: String,
}
