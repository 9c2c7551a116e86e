//! Rejected inputs leave a `debug!` trail naming the failure, and nothing else.

use keyseal_core::{
    buffer_to_base64, export_symmetric_key, generate_key_pair, generate_symmetric_key,
    import_private_key, import_public_key, import_symmetric_key, rsa_decrypt, sym_decrypt,
    sym_encrypt, CryptoError,
};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a DEBUG-level subscriber and return everything it logged.
fn capture_logs(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn symmetric_failures_are_logged() {
    let key = generate_symmetric_key().unwrap();
    let key_b64 = export_symmetric_key(&key);
    let envelope = sym_encrypt(&key, "top secret text").unwrap();
    let other_b64 = export_symmetric_key(&generate_symmetric_key().unwrap());

    let logs = capture_logs(|| {
        let short = buffer_to_base64(&[0u8; 31]);
        assert!(matches!(import_symmetric_key(&short), Err(CryptoError::Import(_))));
        assert!(matches!(import_symmetric_key("%%"), Err(CryptoError::Import(_))));
        assert!(matches!(
            sym_decrypt(&key_b64, &buffer_to_base64(&[0u8; 8])),
            Err(CryptoError::Decryption)
        ));
        assert!(matches!(
            sym_decrypt(&key_b64, &buffer_to_base64(&[0u8; 20])),
            Err(CryptoError::Decryption)
        ));
        // A wrong key either fails unpadding or yields bytes that are not
        // UTF-8; both paths log.
        assert!(sym_decrypt(&other_b64, &envelope).is_err());
    });

    assert!(logs.contains("wrong AES-256 key length"), "{logs}");
    assert!(logs.contains("key_len=31"), "{logs}");
    assert!(logs.contains("bad base64"), "{logs}");
    assert!(logs.contains("shorter than IV"), "{logs}");
    assert!(logs.contains("not block aligned"), "{logs}");
    assert!(
        logs.contains("AES-256-CBC decryption failed") || logs.contains("not valid UTF-8"),
        "{logs}"
    );
    assert!(!logs.contains(key_b64.as_str()));
    assert!(!logs.contains(other_b64.as_str()));
    assert!(!logs.contains("top secret text"));
}

#[test]
fn asymmetric_failures_are_logged() {
    let pair = generate_key_pair().unwrap();
    let garbage = buffer_to_base64(&[0x30, 0x03, 0x02, 0x01, 0x00]);
    let bogus_ciphertext = buffer_to_base64(&[0x5Au8; 256]);

    let logs = capture_logs(|| {
        assert!(import_public_key(&garbage).is_err());
        assert!(import_private_key("!!").is_err());
        assert!(matches!(
            rsa_decrypt(&bogus_ciphertext, &pair.private),
            Err(CryptoError::Decryption)
        ));
    });

    assert!(logs.contains("not an SPKI RSA key"), "{logs}");
    assert!(logs.contains("bad base64"), "{logs}");
    assert!(logs.contains("RSA-OAEP decryption failed"), "{logs}");
    assert!(!logs.contains(bogus_ciphertext.as_str()));
}
