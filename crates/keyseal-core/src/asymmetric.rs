//! RSA-OAEP (SHA-256) public-key encryption.
//!
//! This module provides:
//! - [`generate_key_pair`]: fresh 2048-bit key pair, public exponent 65537
//! - [`export_public_key`] / [`import_public_key`]: SPKI DER as base64
//! - [`export_private_key`] / [`import_private_key`]: PKCS#8 DER as base64
//! - [`rsa_encrypt`] / [`rsa_decrypt`]: base64-in, base64-out helpers
//!
//! # Capability-typed handles
//!
//! [`EncryptionKey`] can only encrypt and [`DecryptionKey`] can only decrypt.
//! Using a public key to decrypt is a type error, not a runtime failure.
//!
//! # Payload limit
//!
//! OAEP with SHA-256 caps the plaintext at `k - 66` bytes where `k` is the
//! modulus size in bytes: 190 bytes for a 2048-bit key. Larger payloads must
//! go through [`crate::symmetric`] instead.

use crate::codec::{base64_to_buffer, buffer_to_base64};
use crate::error::CryptoError;
use crate::memory::SecretBuffer;
use crate::params::{max_oaep_plaintext_len, RsaParams, MIN_MODULUS_BITS};
use rand::rngs::OsRng;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Encrypt-only RSA-OAEP public key handle.
///
/// Safe to share. Serialize with [`export_public_key`].
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionKey {
    inner: RsaPublicKey,
}

/// Decrypt-only RSA-OAEP private key handle.
///
/// The wrapped key zeroizes its components on drop. This type intentionally
/// does NOT implement `Serialize` or `Clone`; use [`export_private_key`] to
/// obtain a transportable form.
pub struct DecryptionKey {
    inner: RsaPrivateKey,
}

/// RSA-OAEP key pair: public + private.
///
/// Produced by [`generate_key_pair`].
#[must_use = "key pair must be stored"]
pub struct KeyPair {
    /// Public key (safe to share).
    pub public: EncryptionKey,
    /// Private key (must be kept secret).
    pub private: DecryptionKey,
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptionKey(RSA-OAEP-{})", self.modulus_bits())
    }
}

impl fmt::Debug for DecryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DecryptionKey(***)")
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyPair(***)")
    }
}

fn oaep() -> Oaep {
    Oaep::new::<Sha256>()
}

impl EncryptionKey {
    /// Modulus size in bits.
    #[must_use]
    pub fn modulus_bits(&self) -> usize {
        self.inner.n().bits()
    }

    /// Largest plaintext, in bytes, this key can encrypt.
    #[must_use]
    pub fn max_plaintext_len(&self) -> usize {
        max_oaep_plaintext_len(self.inner.size())
    }

    /// Encrypt raw bytes with RSA-OAEP/SHA-256.
    ///
    /// Randomized: encrypting the same plaintext twice yields different
    /// ciphertexts.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Encryption` if `plaintext` exceeds
    /// [`Self::max_plaintext_len`] or the provider fails.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let limit = self.max_plaintext_len();
        if plaintext.len() > limit {
            return Err(CryptoError::Encryption(format!(
                "payload too large for RSA-OAEP: {} bytes (maximum {limit})",
                plaintext.len()
            )));
        }
        self.inner
            .encrypt(&mut OsRng, oaep(), plaintext)
            .map_err(|e| CryptoError::Encryption(format!("RSA-OAEP encryption failed: {e}")))
    }
}

impl DecryptionKey {
    /// Derive the matching public key.
    #[must_use]
    pub fn encryption_key(&self) -> EncryptionKey {
        EncryptionKey {
            inner: self.inner.to_public_key(),
        }
    }

    /// Modulus size in bits.
    #[must_use]
    pub fn modulus_bits(&self) -> usize {
        self.inner.n().bits()
    }

    /// Decrypt RSA-OAEP/SHA-256 ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Decryption` on wrong key, wrong length or
    /// corrupted ciphertext.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<SecretBuffer, CryptoError> {
        let plaintext = self
            .inner
            .decrypt(oaep(), ciphertext)
            .map_err(|_| {
                tracing::debug!(ciphertext_len = ciphertext.len(), "RSA-OAEP decryption failed");
                CryptoError::Decryption
            })?;
        Ok(SecretBuffer::from_vec(plaintext))
    }
}

// ---------------------------------------------------------------------------
// Key generation
// ---------------------------------------------------------------------------

/// Generate a 2048-bit RSA-OAEP key pair with public exponent 65537.
///
/// # Errors
///
/// Returns `CryptoError::KeyGeneration` if the CSPRNG or prime search fails.
pub fn generate_key_pair() -> Result<KeyPair, CryptoError> {
    generate_key_pair_with(&RsaParams::default())
}

/// Generate an RSA-OAEP key pair with a configurable modulus size.
///
/// # Errors
///
/// Returns `CryptoError::KeyGeneration` if `params` is unsupported or the
/// underlying generation fails.
pub fn generate_key_pair_with(params: &RsaParams) -> Result<KeyPair, CryptoError> {
    params.validate()?;
    let exponent = BigUint::from(crate::params::PUBLIC_EXPONENT);
    let private = RsaPrivateKey::new_with_exp(&mut OsRng, params.modulus_bits, &exponent)
        .map_err(|e| CryptoError::KeyGeneration(format!("RSA key generation failed: {e}")))?;
    let public = private.to_public_key();
    tracing::debug!(modulus_bits = params.modulus_bits, "generated RSA-OAEP key pair");

    Ok(KeyPair {
        public: EncryptionKey { inner: public },
        private: DecryptionKey { inner: private },
    })
}

// ---------------------------------------------------------------------------
// Export / import
// ---------------------------------------------------------------------------

/// Export a public key as base64-encoded SPKI DER.
///
/// # Errors
///
/// Returns `CryptoError::Export` if DER encoding fails.
pub fn export_public_key(key: &EncryptionKey) -> Result<String, CryptoError> {
    let der = key
        .inner
        .to_public_key_der()
        .map_err(|e| CryptoError::Export(format!("SPKI encoding failed: {e}")))?;
    Ok(buffer_to_base64(der.as_bytes()))
}

/// Export a private key as base64-encoded PKCS#8 DER.
///
/// `None` passes through as `Ok(None)`: a party holding only a public key
/// exports no private key, and that is not an error.
///
/// # Errors
///
/// Returns `CryptoError::Export` if DER encoding fails.
pub fn export_private_key(
    key: Option<&DecryptionKey>,
) -> Result<Option<Zeroizing<String>>, CryptoError> {
    let Some(key) = key else {
        return Ok(None);
    };
    let der = key
        .inner
        .to_pkcs8_der()
        .map_err(|e| CryptoError::Export(format!("PKCS#8 encoding failed: {e}")))?;
    Ok(Some(Zeroizing::new(buffer_to_base64(der.as_bytes()))))
}

/// Import a base64-encoded SPKI DER public key as an encrypt-only handle.
///
/// # Errors
///
/// Returns `CryptoError::Import` on malformed base64, malformed SPKI, a
/// non-RSA algorithm identifier, or a modulus smaller than 2048 bits.
pub fn import_public_key(encoded: &str) -> Result<EncryptionKey, CryptoError> {
    let der = base64_to_buffer(encoded).map_err(|e| {
        tracing::debug!(kind = "public", "rejected key: bad base64");
        CryptoError::Import(format!("public key: {e}"))
    })?;
    let inner = RsaPublicKey::from_public_key_der(&der).map_err(|e| {
        tracing::debug!(kind = "public", "rejected key: not an SPKI RSA key");
        CryptoError::Import(format!("invalid SPKI RSA public key: {e}"))
    })?;
    let modulus_bits = check_modulus(inner.n().bits())?;
    tracing::debug!(modulus_bits, "imported public key");
    Ok(EncryptionKey { inner })
}

/// Import a base64-encoded PKCS#8 DER private key as a decrypt-only handle.
///
/// # Errors
///
/// Returns `CryptoError::Import` on malformed base64, malformed PKCS#8, a
/// non-RSA algorithm identifier, or a modulus smaller than 2048 bits.
pub fn import_private_key(encoded: &str) -> Result<DecryptionKey, CryptoError> {
    let mut der = base64_to_buffer(encoded).map_err(|e| {
        tracing::debug!(kind = "private", "rejected key: bad base64");
        CryptoError::Import(format!("private key: {e}"))
    })?;
    let parsed = RsaPrivateKey::from_pkcs8_der(&der);
    der.zeroize();
    let inner = parsed.map_err(|e| {
        tracing::debug!(kind = "private", "rejected key: not a PKCS#8 RSA key");
        CryptoError::Import(format!("invalid PKCS#8 RSA private key: {e}"))
    })?;
    let modulus_bits = check_modulus(inner.n().bits())?;
    tracing::debug!(modulus_bits, "imported private key");
    Ok(DecryptionKey { inner })
}

/// Reject moduli below [`MIN_MODULUS_BITS`], measured on the exact bit
/// length of `n` rather than its byte size.
fn check_modulus(bits: usize) -> Result<usize, CryptoError> {
    if bits < MIN_MODULUS_BITS {
        tracing::debug!(modulus_bits = bits, "rejected key: modulus too small");
        return Err(CryptoError::Import(format!(
            "RSA modulus too small: {bits} bits (minimum {MIN_MODULUS_BITS})"
        )));
    }
    Ok(bits)
}

// ---------------------------------------------------------------------------
// Text-level helpers
// ---------------------------------------------------------------------------

/// Encrypt base64 plaintext for a base64 SPKI public key.
///
/// The public key is imported fresh on every call. Returns base64 ciphertext.
///
/// # Errors
///
/// - `CryptoError::Decode` if `plaintext_b64` is not valid base64
/// - `CryptoError::Import` if `public_key_b64` is not a valid public key
/// - `CryptoError::Encryption` if the plaintext exceeds the OAEP limit
pub fn rsa_encrypt(plaintext_b64: &str, public_key_b64: &str) -> Result<String, CryptoError> {
    let mut plaintext = base64_to_buffer(plaintext_b64)?;
    let key = import_public_key(public_key_b64);
    let ciphertext = key.and_then(|key| key.encrypt(&plaintext));
    plaintext.zeroize();
    Ok(buffer_to_base64(&ciphertext?))
}

/// Decrypt base64 ciphertext with an already-imported private key.
///
/// Returns the plaintext re-encoded as base64.
///
/// # Errors
///
/// - `CryptoError::Decode` if `ciphertext_b64` is not valid base64
/// - `CryptoError::Decryption` on key mismatch or corrupted ciphertext
pub fn rsa_decrypt(
    ciphertext_b64: &str,
    private_key: &DecryptionKey,
) -> Result<String, CryptoError> {
    let ciphertext = base64_to_buffer(ciphertext_b64)?;
    let plaintext = private_key.decrypt(&ciphertext)?;
    Ok(buffer_to_base64(plaintext.expose()))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
