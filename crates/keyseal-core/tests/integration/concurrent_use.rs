//! Handles are shareable across threads; calls share no mutable state.

use keyseal_core::{
    export_public_key, export_symmetric_key, generate_key_pair, generate_symmetric_key,
    rsa_decrypt, rsa_encrypt, sym_decrypt, sym_encrypt, DecryptionKey, EncryptionKey, Envelope,
    KeyPair, SymmetricKey,
};
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn handle_types_are_send_and_sync() {
    assert_send_sync::<EncryptionKey>();
    assert_send_sync::<DecryptionKey>();
    assert_send_sync::<KeyPair>();
    assert_send_sync::<SymmetricKey>();
    assert_send_sync::<Envelope>();
}

#[test]
fn parallel_symmetric_calls_with_shared_key() {
    let key = Arc::new(generate_symmetric_key().expect("keygen should succeed"));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let key = Arc::clone(&key);
            thread::spawn(move || {
                let text = format!("worker {i}");
                let envelope = sym_encrypt(&key, &text).expect("encrypt should succeed");
                let decrypted = sym_decrypt(&export_symmetric_key(&key), &envelope)
                    .expect("decrypt should succeed");
                assert_eq!(decrypted, text);
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker should not panic");
    }
}

#[test]
fn parallel_rsa_calls_with_shared_private_key() {
    let pair = Arc::new(generate_key_pair().expect("keygen should succeed"));
    let public_b64 = Arc::new(export_public_key(&pair.public).expect("export should succeed"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pair = Arc::clone(&pair);
            let public_b64 = Arc::clone(&public_b64);
            thread::spawn(move || {
                let plaintext = keyseal_core::buffer_to_base64(format!("msg {i}").as_bytes());
                let ct = rsa_encrypt(&plaintext, &public_b64).expect("encrypt should succeed");
                assert_eq!(rsa_decrypt(&ct, &pair.private).expect("decrypt"), plaintext);
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker should not panic");
    }
}
