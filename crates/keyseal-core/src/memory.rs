//! Secret-holding containers for key material and decrypted payloads.
//!
//! Both types:
//! - Zero their memory on drop via [`zeroize`]
//! - Mask output in `Debug` to prevent accidental leakage
//! - Expose bytes only through an explicit `expose()` call

use crate::error::CryptoError;
use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::{ExposeSecret, SecretSlice};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ---------------------------------------------------------------------------
// SecretBuffer (variable-length)
// ---------------------------------------------------------------------------

/// Variable-length buffer for sensitive data such as decrypted plaintext.
///
/// Wraps [`SecretSlice<u8>`] from the `secrecy` crate, which zeroizes on drop,
/// and masks `Debug` output as `SecretBuffer(***)`.
pub struct SecretBuffer {
    inner: SecretSlice<u8>,
}

impl SecretBuffer {
    /// Take ownership of `data` without copying it.
    #[must_use]
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { inner: data.into() }
    }

    /// Expose the underlying bytes. Keep the borrow short-lived.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBuffer(***)")
    }
}

// ---------------------------------------------------------------------------
// SecretBytes<N> (fixed-size)
// ---------------------------------------------------------------------------

/// Fixed-size buffer for keys and other fixed-length secrets.
///
/// Derives `Zeroize` + `ZeroizeOnDrop` so the bytes are erased when the
/// value goes out of scope.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Create a new `SecretBytes` from a fixed-size array.
    #[must_use]
    pub const fn new(data: [u8; N]) -> Self {
        Self { bytes: data }
    }

    /// Create `SecretBytes` filled with cryptographically random bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::KeyGeneration` if the CSPRNG fails.
    pub fn random() -> Result<Self, CryptoError> {
        let mut s = Self { bytes: [0u8; N] };
        OsRng
            .try_fill_bytes(&mut s.bytes)
            .map_err(|e| CryptoError::KeyGeneration(format!("CSPRNG fill failed: {e}")))?;
        Ok(s)
    }

    /// Copy a slice of exactly `N` bytes into a new `SecretBytes`.
    ///
    /// Returns `None` if the slice length differs from `N`.
    #[must_use]
    pub fn from_slice(data: &[u8]) -> Option<Self> {
        if data.len() != N {
            return None;
        }
        let mut s = Self { bytes: [0u8; N] };
        s.bytes.copy_from_slice(data);
        Some(s)
    }

    /// Expose the underlying bytes for cryptographic operations.
    #[must_use]
    pub const fn expose(&self) -> &[u8; N] {
        &self.bytes
    }
}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{N}>(***)")
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
