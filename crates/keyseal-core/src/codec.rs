//! Binary ↔ text codec.
//!
//! Standard base64 alphabet with `=` padding, no line wrapping. This is the
//! only text encoding used for keys, plaintexts and envelopes in this crate.

use crate::error::CryptoError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode bytes as standard, padded base64.
#[must_use]
pub fn buffer_to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard, padded base64 into bytes.
///
/// # Errors
///
/// Returns `CryptoError::Decode` on non-alphabet characters, illegal or
/// missing padding, or a trailing partial symbol.
pub fn base64_to_buffer(text: &str) -> Result<Vec<u8>, CryptoError> {
    STANDARD
        .decode(text)
        .map_err(|e| CryptoError::Decode(format!("invalid base64: {e}")))
}
