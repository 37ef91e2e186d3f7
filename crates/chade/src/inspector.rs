//! The inspection pipeline over loaded tables.

use std::sync::Arc;

use chade_core::{
    ByteSequence, ChadeError, CharacterDatabase, Codepoint, DecodeFailure, DecodeReport,
    DecoderSet, EncoderSet, EntityTable, Interpretation, InterpretationOutcome, InterpreterSet,
    LegacyCodec, Representation, Services,
};
use chade_data::{EncodingRsCodec, HtmlEntities, UnicodeDatabase};

use crate::config::DataPaths;

/// One codepoint the input may denote, with every representation of it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    pub codepoint: Codepoint,
    /// Decoders that produced this codepoint, in registry order. Empty when
    /// the input named the codepoint directly.
    pub decoders: Vec<String>,
    pub representations: Vec<Representation>,
}

/// Everything learned about one input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Inspection {
    /// The input after trimming.
    pub input: String,
    pub interpretation: Interpretation,
    /// In ascending codepoint order.
    pub candidates: Vec<Candidate>,
    /// Decoders that rejected the bytes, in registry order.
    pub failures: Vec<DecodeFailure>,
}

impl Inspection {
    pub fn is_recognized(&self) -> bool {
        self.interpretation.is_recognized()
    }
}

/// Runs interpret, decode and encode against shared, read-only tables.
#[derive(Clone)]
pub struct Inspector {
    characters: Arc<dyn CharacterDatabase>,
    entities: Arc<dyn EntityTable>,
    codec: Arc<dyn LegacyCodec>,
    interpreters: InterpreterSet,
    decoders: DecoderSet,
    encoders: EncoderSet,
}

impl Inspector {
    /// An inspector over the given tables with the standard registries.
    pub fn new(
        characters: Arc<dyn CharacterDatabase>,
        entities: Arc<dyn EntityTable>,
        codec: Arc<dyn LegacyCodec>,
    ) -> Self {
        Self {
            characters,
            entities,
            codec,
            interpreters: InterpreterSet::standard(),
            decoders: DecoderSet::standard(),
            encoders: EncoderSet::standard(),
        }
    }

    /// Load the data files and use `encoding_rs` for legacy charsets.
    pub fn load(paths: &DataPaths) -> Result<Self, ChadeError> {
        let characters = UnicodeDatabase::open(&paths.unicode_data, &paths.blocks)?;
        let entities = HtmlEntities::open(&paths.entities)?;
        Ok(Self::new(
            Arc::new(characters),
            Arc::new(entities),
            Arc::new(EncodingRsCodec),
        ))
    }

    /// Replace the standard registries.
    pub fn with_registries(
        mut self,
        interpreters: InterpreterSet,
        decoders: DecoderSet,
        encoders: EncoderSet,
    ) -> Self {
        self.interpreters = interpreters;
        self.decoders = decoders;
        self.encoders = encoders;
        self
    }

    fn services(&self) -> Services<'_> {
        Services::new(&*self.characters, &*self.entities, &*self.codec)
    }

    pub fn interpret(&self, input: &str) -> Interpretation {
        self.interpreters.interpret(input, &self.services())
    }

    pub fn decode(&self, bytes: &ByteSequence) -> DecodeReport {
        self.decoders.decode(bytes, &self.services())
    }

    /// Every accepted representation of `codepoint`.
    pub fn inspect_codepoint(&self, codepoint: Codepoint) -> Vec<Representation> {
        self.encoders.encode(codepoint, &self.services())
    }

    /// Run the whole pipeline on `input`.
    pub fn inspect(&self, input: &str) -> Inspection {
        let input = input.trim();
        let interpretation = self.interpret(input);
        tracing::debug!(input, interpreter = ?interpretation.interpreter, "interpreted");

        let (candidates, failures) = match &interpretation.outcome {
            InterpretationOutcome::Codepoint(codepoint) => {
                let candidate = Candidate {
                    codepoint: *codepoint,
                    decoders: Vec::new(),
                    representations: self.inspect_codepoint(*codepoint),
                };
                (vec![candidate], Vec::new())
            }
            InterpretationOutcome::Bytes(bytes) => {
                let report = self.decode(bytes);
                let candidates = report
                    .successes()
                    .iter()
                    .map(|(codepoint, decoders)| Candidate {
                        codepoint: *codepoint,
                        decoders: decoders.clone(),
                        representations: self.inspect_codepoint(*codepoint),
                    })
                    .collect();
                (candidates, report.failures().to_vec())
            }
            InterpretationOutcome::Unrecognized => (Vec::new(), Vec::new()),
        };

        Inspection {
            input: input.to_string(),
            interpretation,
            candidates,
            failures,
        }
    }
}

impl std::fmt::Debug for Inspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspector")
            .field("interpreters", &self.interpreters)
            .field("decoders", &self.decoders.decoders().len())
            .field("encoders", &self.encoders.encoders().len())
            .finish_non_exhaustive()
    }
}
