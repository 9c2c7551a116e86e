//! RSA-OAEP key-strength configuration.
//!
//! This module provides:
//! - [`RsaParams`]: serializable key generation parameters
//! - [`KeyStrength`]: Standard / High / Maximum preset selector
//!
//! The public exponent and OAEP hash are fixed (65537, SHA-256); only the
//! modulus size is configurable. [`RsaParams::default`] is the 2048-bit
//! configuration every text-level helper in this crate uses.

use crate::error::CryptoError;
use serde::{Deserialize, Serialize};

/// RSA public exponent (F4).
pub const PUBLIC_EXPONENT: u32 = 65_537;

/// Smallest modulus accepted for generation and import.
pub const MIN_MODULUS_BITS: usize = 2048;

/// SHA-256 digest length. OAEP overhead is `2 * OAEP_HASH_LEN + 2` bytes.
pub const OAEP_HASH_LEN: usize = 32;

const MODULUS_3072: usize = 3072;
const MODULUS_4096: usize = 4096;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// RSA key generation parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaParams {
    /// Modulus size in bits. One of 2048, 3072 or 4096.
    pub modulus_bits: usize,
}

/// Key-strength preset selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyStrength {
    /// 2048-bit modulus.
    #[default]
    Standard,
    /// 3072-bit modulus.
    High,
    /// 4096-bit modulus. Key generation takes noticeably longer.
    Maximum,
}

impl KeyStrength {
    /// Return the parameters for this preset.
    #[must_use]
    pub const fn params(self) -> RsaParams {
        let modulus_bits = match self {
            Self::Standard => MIN_MODULUS_BITS,
            Self::High => MODULUS_3072,
            Self::Maximum => MODULUS_4096,
        };
        RsaParams { modulus_bits }
    }
}

impl Default for RsaParams {
    fn default() -> Self {
        KeyStrength::Standard.params()
    }
}

impl From<KeyStrength> for RsaParams {
    fn from(strength: KeyStrength) -> Self {
        strength.params()
    }
}

impl RsaParams {
    /// Check that the modulus size is one of the supported presets.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::KeyGeneration` for any other modulus size.
    pub fn validate(&self) -> Result<(), CryptoError> {
        match self.modulus_bits {
            MIN_MODULUS_BITS | MODULUS_3072 | MODULUS_4096 => Ok(()),
            other => Err(CryptoError::KeyGeneration(format!(
                "unsupported modulus size: {other} bits (expected 2048, 3072 or 4096)"
            ))),
        }
    }

    /// Modulus size in bytes (`k` in RFC 8017).
    #[must_use]
    pub const fn modulus_bytes(&self) -> usize {
        self.modulus_bits.div_ceil(8)
    }

    /// Largest plaintext RSA-OAEP/SHA-256 can carry: `k - 2*hLen - 2`.
    #[must_use]
    pub const fn max_oaep_plaintext_len(&self) -> usize {
        max_oaep_plaintext_len(self.modulus_bytes())
    }
}

/// OAEP/SHA-256 plaintext limit for a modulus of `modulus_bytes` bytes.
#[must_use]
pub(crate) const fn max_oaep_plaintext_len(modulus_bytes: usize) -> usize {
    modulus_bytes
        .saturating_sub(OAEP_HASH_LEN.saturating_mul(2))
        .saturating_sub(2)
}
