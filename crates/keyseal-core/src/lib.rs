//! `keyseal-core`: RSA-OAEP and AES-256-CBC helpers.
//!
//! Key generation, base64 key export/import, and encrypt/decrypt calls over
//! vetted RustCrypto primitives. Every operation is a stateless call; key
//! storage, rotation and distribution belong to the caller.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;

pub mod codec;
pub mod params;

pub mod asymmetric;
pub mod symmetric;

pub use asymmetric::{
    export_private_key, export_public_key, generate_key_pair, generate_key_pair_with,
    import_private_key, import_public_key, rsa_decrypt, rsa_encrypt, DecryptionKey,
    EncryptionKey, KeyPair,
};
pub use codec::{base64_to_buffer, buffer_to_base64};
pub use error::CryptoError;
pub use memory::{SecretBuffer, SecretBytes};
pub use params::{KeyStrength, RsaParams, MIN_MODULUS_BITS, PUBLIC_EXPONENT};
pub use symmetric::{
    export_symmetric_key, generate_symmetric_key, import_symmetric_key, sym_decrypt, sym_encrypt,
    Envelope, SymmetricKey,
};
pub use zeroize::Zeroizing;
