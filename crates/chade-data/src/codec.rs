//! Legacy charset conversion through `encoding_rs`.
//!
//! Charsets are looked up by WHATWG label. `iso-8859-1` is the one
//! exception: WHATWG maps that label to windows-1252, so true Latin-1
//! (byte value = codepoint) is handled here directly.

use chade_core::{CodecError, Codepoint, LegacyCodec};
use encoding_rs::Encoding;

/// Labels treated as true ISO-8859-1.
const LATIN1_LABELS: [&str; 3] = ["iso-8859-1", "iso8859-1", "latin1"];

#[derive(Debug, Clone, Copy)]
enum Charset {
    Latin1,
    Whatwg(&'static Encoding),
}

fn resolve(label: &str) -> Result<Charset, CodecError> {
    if LATIN1_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label.trim())) {
        return Ok(Charset::Latin1);
    }
    match Encoding::for_label(label.as_bytes()) {
        // UTF-16 and the replacement encoding cannot encode to themselves.
        Some(encoding) if encoding.output_encoding() == encoding => Ok(Charset::Whatwg(encoding)),
        _ => Err(CodecError::UnsupportedCharset(label.to_string())),
    }
}

/// [`LegacyCodec`] backed by `encoding_rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingRsCodec;

impl EncodingRsCodec {
    /// Whether `label` names a charset this codec can convert.
    pub fn supports(label: &str) -> bool {
        resolve(label).is_ok()
    }
}

impl LegacyCodec for EncodingRsCodec {
    fn decode(&self, bytes: &[u8], charset: &str) -> Result<Codepoint, CodecError> {
        let malformed = || CodecError::Malformed {
            charset: charset.to_string(),
        };
        let ch = match resolve(charset)? {
            Charset::Latin1 => bytes.first().map(|&b| char::from(b)),
            Charset::Whatwg(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .and_then(|text| text.chars().next()),
        };
        ch.map(Codepoint::from).ok_or_else(malformed)
    }

    fn encode(&self, codepoint: Codepoint, charset: &str) -> Result<Vec<u8>, CodecError> {
        let unrepresentable = || CodecError::Unrepresentable {
            codepoint,
            charset: charset.to_string(),
        };
        let charset_kind = resolve(charset)?;
        let ch = codepoint.as_char().ok_or_else(unrepresentable)?;
        match charset_kind {
            Charset::Latin1 => u8::try_from(codepoint.value())
                .map(|b| vec![b])
                .map_err(|_| unrepresentable()),
            Charset::Whatwg(encoding) => {
                let mut buf = [0u8; 4];
                let (bytes, _, had_errors) = encoding.encode(ch.encode_utf8(&mut buf));
                if had_errors {
                    Err(unrepresentable())
                } else {
                    Ok(bytes.into_owned())
                }
            }
        }
    }
}
