//! Codepoints and raw byte sequences, the two values the pipeline passes around.

use std::fmt;

use crate::error::ChadeError;

/// An integer in the Unicode codespace `[0, 0x10FFFF]`.
///
/// Surrogates (`U+D800..=U+DFFF`) are valid codepoints even though they are
/// not Unicode scalar values, so a `Codepoint` is not always a `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Codepoint(u32);

impl Codepoint {
    /// Largest value in the codespace.
    pub const MAX: u32 = 0x10FFFF;

    /// Create a codepoint, returning `None` above [`Codepoint::MAX`].
    pub const fn new(value: u32) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// A single UTF-16 code unit; every 16-bit value is in the codespace.
    pub const fn from_unit(unit: u16) -> Self {
        Self(unit as u32)
    }

    /// The numeric value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Whether this codepoint lies in the UTF-16 surrogate range.
    pub const fn is_surrogate(self) -> bool {
        self.0 >= 0xD800 && self.0 <= 0xDFFF
    }

    /// The `char` for this codepoint, or `None` for surrogates.
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Iterate over the whole codespace, surrogates included.
    pub fn all() -> impl Iterator<Item = Codepoint> {
        (0..=Self::MAX).map(Codepoint)
    }
}

impl From<char> for Codepoint {
    fn from(ch: char) -> Self {
        Codepoint(ch as u32)
    }
}

impl From<Codepoint> for u32 {
    fn from(cp: Codepoint) -> Self {
        cp.0
    }
}

impl TryFrom<u32> for Codepoint {
    type Error = ChadeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Codepoint::new(value).ok_or(ChadeError::InvalidCodepoint(value))
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

impl fmt::UpperHex for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// A non-empty, immutable sequence of bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct ByteSequence(Vec<u8>);

impl ByteSequence {
    /// Wrap `bytes`, rejecting an empty vector.
    pub fn new(bytes: Vec<u8>) -> Result<Self, ChadeError> {
        if bytes.is_empty() {
            return Err(ChadeError::EmptyByteSequence);
        }
        Ok(Self(bytes))
    }

    /// The bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes (always at least one).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first (lead) byte.
    pub fn lead(&self) -> u8 {
        self.0[0]
    }
}

impl TryFrom<Vec<u8>> for ByteSequence {
    type Error = ChadeError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        ByteSequence::new(bytes)
    }
}

impl TryFrom<&[u8]> for ByteSequence {
    type Error = ChadeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        ByteSequence::new(bytes.to_vec())
    }
}

impl From<ByteSequence> for Vec<u8> {
    fn from(bytes: ByteSequence) -> Self {
        bytes.0
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
