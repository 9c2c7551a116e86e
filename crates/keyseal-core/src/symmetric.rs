//! AES-256-CBC symmetric encryption with PKCS#7 padding.
//!
//! This module provides:
//! - [`generate_symmetric_key`]: fresh 256-bit key from the OS CSPRNG
//! - [`export_symmetric_key`] / [`import_symmetric_key`]: raw key bytes as base64
//! - [`sym_encrypt`] / [`sym_decrypt`]: text-in, base64-envelope-out helpers
//! - [`Envelope`]: IV + ciphertext container (serializable)
//!
//! CBC is unauthenticated. A modified envelope is only detected when the
//! modification breaks the padding; callers that need integrity must add a
//! MAC or signature around the envelope.

use crate::codec::{base64_to_buffer, buffer_to_base64};
use crate::error::CryptoError;
use crate::memory::{SecretBuffer, SecretBytes};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES-256 key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// CBC initialization vector length in bytes (one AES block).
pub const IV_LEN: usize = 16;

/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// 256-bit AES key usable for both encryption and decryption.
///
/// Zeroized on drop. Serialize with [`export_symmetric_key`].
#[derive(Clone)]
pub struct SymmetricKey {
    bytes: SecretBytes<KEY_LEN>,
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(***)")
    }
}

/// IV + ciphertext container.
///
/// Wire format: `iv (16 bytes) || ciphertext (multiple of 16 bytes)`.
///
/// The IV is random per encryption call and travels with the ciphertext. It
/// is not secret.
#[must_use = "encrypted data must be stored or transmitted"]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// 128-bit random IV, unique per encryption.
    pub iv: [u8; IV_LEN],
    /// PKCS#7-padded CBC ciphertext.
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Serialize to wire format: `iv || ciphertext`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(IV_LEN.saturating_add(self.ciphertext.len()));
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Deserialize from wire format: `iv || ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Decryption` if the input is shorter than the
    /// 16-byte IV.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() < IV_LEN {
            tracing::debug!(envelope_len = bytes.len(), "rejected envelope: shorter than IV");
            return Err(CryptoError::Decryption);
        }
        let (iv_bytes, ciphertext) = bytes.split_at(IV_LEN);
        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(iv_bytes);
        Ok(Self {
            iv,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Encode the wire format as standard base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        buffer_to_base64(&self.to_bytes())
    }

    /// Decode a base64 envelope.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Decode` on invalid base64 and
    /// `CryptoError::Decryption` if the decoded envelope is shorter than 16 bytes.
    pub fn from_base64(text: &str) -> Result<Self, CryptoError> {
        Self::from_bytes(&base64_to_buffer(text)?)
    }
}

// ---------------------------------------------------------------------------
// Core encryption
// ---------------------------------------------------------------------------

impl SymmetricKey {
    /// Encrypt raw bytes with a fresh random IV.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::KeyGeneration` if the CSPRNG cannot produce an IV.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Envelope, CryptoError> {
        let mut iv = [0u8; IV_LEN];
        OsRng
            .try_fill_bytes(&mut iv)
            .map_err(|e| CryptoError::KeyGeneration(format!("IV generation failed: {e}")))?;
        Ok(self.seal_with_iv(iv, plaintext))
    }

    /// Decrypt an envelope, returning the unpadded plaintext.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Decryption` if the ciphertext is empty, not a
    /// multiple of the block size, or has invalid padding after decryption
    /// (wrong key or modified ciphertext).
    pub fn decrypt(&self, envelope: &Envelope) -> Result<SecretBuffer, CryptoError> {
        let len = envelope.ciphertext.len();
        if len == 0 || len.checked_rem(BLOCK_LEN) != Some(0) {
            tracing::debug!(ciphertext_len = len, "rejected envelope: not block aligned");
            return Err(CryptoError::Decryption);
        }
        let plaintext = Aes256CbcDec::new(self.bytes.expose().into(), &envelope.iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&envelope.ciphertext)
            .map_err(|_| {
                tracing::debug!(ciphertext_len = len, "AES-256-CBC decryption failed");
                CryptoError::Decryption
            })?;
        Ok(SecretBuffer::from_vec(plaintext))
    }

    pub(crate) fn seal_with_iv(&self, iv: [u8; IV_LEN], plaintext: &[u8]) -> Envelope {
        let ciphertext = Aes256CbcEnc::new(self.bytes.expose().into(), &iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext);
        tracing::debug!(
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "sealed AES-256-CBC envelope"
        );
        Envelope { iv, ciphertext }
    }
}

// ---------------------------------------------------------------------------
// Key management
// ---------------------------------------------------------------------------

/// Generate a fresh 256-bit AES key.
///
/// # Errors
///
/// Returns `CryptoError::KeyGeneration` if the CSPRNG fails.
pub fn generate_symmetric_key() -> Result<SymmetricKey, CryptoError> {
    Ok(SymmetricKey {
        bytes: SecretBytes::<KEY_LEN>::random()?,
    })
}

/// Export the raw 32 key bytes as base64.
#[must_use]
pub fn export_symmetric_key(key: &SymmetricKey) -> Zeroizing<String> {
    Zeroizing::new(buffer_to_base64(key.bytes.expose()))
}

/// Import a base64-encoded raw AES-256 key.
///
/// # Errors
///
/// Returns `CryptoError::Import` on malformed base64 or if the decoded key
/// is not exactly 32 bytes.
pub fn import_symmetric_key(encoded: &str) -> Result<SymmetricKey, CryptoError> {
    let mut raw = base64_to_buffer(encoded).map_err(|e| {
        tracing::debug!(kind = "symmetric", "rejected key: bad base64");
        CryptoError::Import(format!("symmetric key: {e}"))
    })?;
    let bytes = SecretBytes::<KEY_LEN>::from_slice(&raw);
    let len = raw.len();
    raw.zeroize();
    let bytes = bytes.ok_or_else(|| {
        tracing::debug!(key_len = len, "rejected key: wrong AES-256 key length");
        CryptoError::Import(format!(
            "invalid key length: {len} bytes (expected {KEY_LEN})"
        ))
    })?;
    Ok(SymmetricKey { bytes })
}

// ---------------------------------------------------------------------------
// Text-level helpers
// ---------------------------------------------------------------------------

/// Encrypt UTF-8 text, returning `base64(iv || ciphertext)`.
///
/// # Errors
///
/// Returns `CryptoError::KeyGeneration` if the CSPRNG cannot produce an IV.
pub fn sym_encrypt(key: &SymmetricKey, plaintext: &str) -> Result<String, CryptoError> {
    Ok(key.encrypt(plaintext.as_bytes())?.to_base64())
}

/// Decrypt a base64 envelope with a base64-encoded key, returning UTF-8 text.
///
/// # Errors
///
/// - `CryptoError::Import` if the key is malformed or not 32 bytes
/// - `CryptoError::Decode` if the envelope is not base64 or the plaintext is
///   not valid UTF-8
/// - `CryptoError::Decryption` if the envelope is too short or padding is
///   invalid
pub fn sym_decrypt(key_b64: &str, envelope_b64: &str) -> Result<String, CryptoError> {
    let key = import_symmetric_key(key_b64)?;
    let envelope = Envelope::from_base64(envelope_b64)?;
    let plaintext = key.decrypt(&envelope)?;
    String::from_utf8(plaintext.expose().to_vec()).map_err(|e| {
        e.into_bytes().zeroize();
        tracing::debug!("rejected plaintext: not valid UTF-8");
        CryptoError::Decode("decrypted plaintext is not valid UTF-8".into())
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
