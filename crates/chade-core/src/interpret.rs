//! Input interpreters.
//!
//! An [`InterpreterSet`] tries each [`Interpreter`] in order against the
//! original input; the first one that claims it decides the outcome. A
//! strategy that matches syntactically but fails later (out-of-range number,
//! unknown entity, bad token) simply does not claim the input.

use std::sync::LazyLock;

use regex::Regex;

use crate::codepoint::{ByteSequence, Codepoint};
use crate::outcome::{Interpretation, InterpretationOutcome};
use crate::services::Services;

static ESCAPED_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\\[uU]([0-9a-fA-F]+)$").expect("valid pattern"));
static HTML_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^&([0-9]+);$").expect("valid pattern"));
static HTML_HEXADECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^&#([0-9a-fA-F]+);$").expect("valid pattern"));
static HTML_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^&([A-Za-z][A-Za-z0-9]*);$").expect("valid pattern"));
static BYTE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F ]+$").expect("valid pattern"));

/// One strategy for understanding the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpreter {
    /// Exactly one character, e.g. `é`.
    Character,
    /// `\uXXXX` or `\UXXXX` with any number of hex digits.
    EscapedLiteral,
    /// `&DDDD;`
    HtmlDecimal,
    /// `&#HHHH;`
    HtmlHexadecimal,
    /// `&name;`, resolved through the entity table.
    HtmlEntity,
    /// Space-separated hex tokens of 2 or 4 digits, e.g. `e3 81 82` or `3042`.
    Bytes,
}

impl Interpreter {
    pub fn name(self) -> &'static str {
        match self {
            Interpreter::Character => "Character",
            Interpreter::EscapedLiteral => "Java literal",
            Interpreter::HtmlDecimal => "HTML decimal character reference",
            Interpreter::HtmlHexadecimal => "HTML hexadecimal character reference",
            Interpreter::HtmlEntity => "HTML entity",
            Interpreter::Bytes => "Bytes",
        }
    }

    /// The outcome if this strategy claims `input`, `None` otherwise.
    pub fn interpret(self, input: &str, services: &Services<'_>) -> Option<InterpretationOutcome> {
        match self {
            Interpreter::Character => single_char(input).map(InterpretationOutcome::Codepoint),
            Interpreter::EscapedLiteral => {
                captured(&ESCAPED_LITERAL, input).and_then(|digits| parse_codepoint(digits, 16))
            }
            Interpreter::HtmlDecimal => {
                captured(&HTML_DECIMAL, input).and_then(|digits| parse_codepoint(digits, 10))
            }
            Interpreter::HtmlHexadecimal => {
                captured(&HTML_HEXADECIMAL, input).and_then(|digits| parse_codepoint(digits, 16))
            }
            Interpreter::HtmlEntity => captured(&HTML_ENTITY, input)
                .and_then(|name| services.entities.by_name(name))
                .map(InterpretationOutcome::Codepoint),
            Interpreter::Bytes => parse_byte_list(input).map(InterpretationOutcome::Bytes),
        }
    }
}

fn single_char(input: &str) -> Option<Codepoint> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(Codepoint::from(ch)),
        _ => None,
    }
}

fn captured<'i>(pattern: &Regex, input: &'i str) -> Option<&'i str> {
    pattern
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse `digits` in `radix`; overflow and values past U+10FFFF are rejected.
fn parse_codepoint(digits: &str, radix: u32) -> Option<InterpretationOutcome> {
    let value = u32::from_str_radix(digits, radix).ok()?;
    Codepoint::new(value).map(InterpretationOutcome::Codepoint)
}

/// Parse space-separated hex tokens. All tokens must be valid or nothing is returned.
pub fn parse_byte_list(input: &str) -> Option<ByteSequence> {
    if !BYTE_LIST.is_match(input) {
        return None;
    }

    let mut bytes = Vec::new();
    for token in input.split(' ') {
        match token.len() {
            2 => bytes.push(u8::from_str_radix(token, 16).ok()?),
            4 => {
                bytes.push(u8::from_str_radix(&token[..2], 16).ok()?);
                bytes.push(u8::from_str_radix(&token[2..], 16).ok()?);
            }
            _ => return None,
        }
    }
    ByteSequence::new(bytes).ok()
}

/// Ordered list of interpreters; the first to claim an input wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterSet {
    interpreters: Vec<Interpreter>,
}

impl InterpreterSet {
    pub fn new(interpreters: Vec<Interpreter>) -> Self {
        Self { interpreters }
    }

    /// All built-in interpreters in priority order.
    pub fn standard() -> Self {
        Self::new(vec![
            Interpreter::Character,
            Interpreter::EscapedLiteral,
            Interpreter::HtmlDecimal,
            Interpreter::HtmlHexadecimal,
            Interpreter::HtmlEntity,
            Interpreter::Bytes,
        ])
    }

    pub fn interpreters(&self) -> &[Interpreter] {
        &self.interpreters
    }

    pub fn interpret(&self, input: &str, services: &Services<'_>) -> Interpretation {
        for &interpreter in &self.interpreters {
            if let Some(outcome) = interpreter.interpret(input, services) {
                tracing::trace!(interpreter = interpreter.name(), "input claimed");
                return Interpretation::claimed(interpreter.name(), outcome);
            }
        }
        tracing::debug!(input, "no interpreter claimed the input");
        Interpretation::unrecognized()
    }
}

impl Default for InterpreterSet {
    fn default() -> Self {
        Self::standard()
    }
}
