//! Built-in codecs for the encodings the pipeline understands natively.
//!
//! ASCII, UTF-8 and UTF-16 are decoded and encoded bit by bit so every
//! failure can name the exact violation. Shift-JIS only classifies bytes
//! here; the actual table lookup is delegated to the [`LegacyCodec`].

pub mod ascii;
pub mod shift_jis;
pub mod utf16;
pub mod utf8;

use crate::outcome::DecodeAttempt;
use crate::services::LegacyCodec;

/// Reason reported when the legacy codec refuses a byte sequence.
pub const REJECTED_BY_CONVERTER: &str = "rejected by converter";

/// Decode `bytes` in `charset` through the legacy codec.
pub(crate) fn convert(codec: &dyn LegacyCodec, bytes: &[u8], charset: &str) -> DecodeAttempt {
    match codec.decode(bytes, charset) {
        Ok(cp) => DecodeAttempt::Success(cp),
        Err(err) => {
            tracing::debug!(charset, error = %err, "legacy codec rejected bytes");
            DecodeAttempt::failure(REJECTED_BY_CONVERTER)
        }
    }
}
