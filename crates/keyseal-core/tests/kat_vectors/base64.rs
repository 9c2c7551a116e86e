//! RFC 4648 §10 base64 test vectors.

use keyseal_core::{base64_to_buffer, buffer_to_base64};

const VECTORS: &[(&[u8], &str)] = &[
    (b"", ""),
    (b"f", "Zg=="),
    (b"fo", "Zm8="),
    (b"foo", "Zm9v"),
    (b"foob", "Zm9vYg=="),
    (b"fooba", "Zm9vYmE="),
    (b"foobar", "Zm9vYmFy"),
];

#[test]
fn rfc4648_encode_vectors() {
    for (input, expected) in VECTORS {
        assert_eq!(&buffer_to_base64(input), expected, "encoding {input:?}");
    }
}

#[test]
fn rfc4648_decode_vectors() {
    for (expected, input) in VECTORS {
        let decoded = base64_to_buffer(input).expect("vector should decode");
        assert_eq!(decoded.as_slice(), *expected, "decoding {input:?}");
    }
}
