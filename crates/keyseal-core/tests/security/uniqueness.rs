//! Randomized encryption never repeats IVs or ciphertexts.

use keyseal_core::symmetric::Envelope;
use keyseal_core::{
    export_public_key, generate_key_pair, generate_symmetric_key, rsa_encrypt, sym_encrypt,
};
use std::collections::HashSet;

#[test]
fn rapid_symmetric_encryptions_use_unique_ivs() {
    let key = generate_symmetric_key().expect("keygen should succeed");
    let mut ivs = HashSet::new();
    for _ in 0..1000 {
        let envelope = sym_encrypt(&key, "same plaintext").expect("encrypt should succeed");
        let parsed = Envelope::from_base64(&envelope).expect("parse envelope");
        assert!(ivs.insert(parsed.iv), "IV reused");
    }
}

#[test]
fn same_plaintext_same_key_gives_different_envelopes() {
    let key = generate_symmetric_key().expect("keygen should succeed");
    let a = sym_encrypt(&key, "identical").expect("encrypt should succeed");
    let b = sym_encrypt(&key, "identical").expect("encrypt should succeed");
    assert_ne!(a, b);
}

#[test]
fn rsa_oaep_ciphertexts_are_unique() {
    let pair = generate_key_pair().expect("keygen should succeed");
    let public_b64 = export_public_key(&pair.public).expect("export should succeed");
    let mut seen = HashSet::new();
    for _ in 0..20 {
        let ct = rsa_encrypt("c2FtZQ==", &public_b64).expect("encrypt should succeed");
        assert!(seen.insert(ct), "RSA-OAEP ciphertext repeated");
    }
}

#[test]
fn generated_symmetric_keys_are_unique() {
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let key = generate_symmetric_key().expect("keygen should succeed");
        let exported = keyseal_core::export_symmetric_key(&key);
        assert!(seen.insert(exported.to_string()), "symmetric key repeated");
    }
}
