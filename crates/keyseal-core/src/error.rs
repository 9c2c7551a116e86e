//! Cryptographic error types for `keyseal-core`.

use thiserror::Error;

/// Errors produced by cryptographic operations.
///
/// Messages describe the failure class and sizes only. They never contain
/// key material, plaintext or ciphertext bytes.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Malformed base64 input, or decrypted bytes that are not valid UTF-8.
    #[error("decode error: {0}")]
    Decode(String),

    /// Key or IV generation failed (CSPRNG unavailable, invalid parameters).
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Key serialization to SPKI / PKCS#8 DER failed.
    #[error("key export failed: {0}")]
    Export(String),

    /// Key material could not be parsed (bad base64, bad DER, wrong
    /// algorithm, wrong length, modulus too small).
    #[error("key import failed: {0}")]
    Import(String),

    /// Encryption failed, typically an RSA-OAEP payload over the size limit.
    #[error("encryption error: {0}")]
    Encryption(String),

    /// Decryption failed: invalid padding, wrong key, truncated or corrupted
    /// ciphertext. Carries no detail so failure causes stay indistinguishable.
    #[error("decryption failed: invalid ciphertext or key mismatch")]
    Decryption,
}
