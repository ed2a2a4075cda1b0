use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{CryptoError, CryptoResult};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 of a UTF-8 message under a UTF-8 secret, as lowercase hex.
///
/// HMAC accepts keys of any length, so this never fails.
pub fn compute_hmac_sha256(message: &str, secret: &str) -> String {
    hex::encode(hmac_sha256(secret.as_bytes(), &[message.as_bytes()]))
}

/// HMAC-SHA256 over the concatenation of `parts`.
pub(crate) fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> [u8; 32] {
    keyed(key, parts).finalize().into_bytes().into()
}

/// Constant-time check of `expected` against HMAC-SHA256(key, parts).
///
/// Returns Err(CryptoError::InvalidMac) on any mismatch, including length.
pub(crate) fn verify_hmac_sha256(key: &[u8], parts: &[&[u8]], expected: &[u8]) -> CryptoResult<()> {
    keyed(key, parts)
        .verify_slice(expected)
        .map_err(|_| CryptoError::InvalidMac)
}

fn keyed(key: &[u8], parts: &[&[u8]]) -> HmacSha256 {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
        .expect("HMAC key length is always valid for any key size");
    for part in parts {
        mac.update(part);
    }
    mac
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn rfc4231_test_case_2() {
        let message: &[u8] = b"what do ya want for nothing?";
        let tag = hmac_sha256(b"Jefe", &[message]);
        assert_eq!(
            tag,
            hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
        );
    }

    #[test]
    fn compute_hex_output() {
        let tag = compute_hmac_sha256("The quick brown fox", "secret");
        assert_eq!(
            tag,
            "7a284e5025f32a846fa3e6957d10278eb5726dd4e0b04c8e0259defcd2cd0eb1"
        );
        assert_eq!(tag.len(), 64);
        assert!(tag.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn empty_secret_and_message() {
        assert_eq!(
            compute_hmac_sha256("", ""),
            "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad"
        );
    }

    #[test]
    fn parts_are_concatenated() {
        let key = [0x42u8; 32];
        assert_eq!(
            hmac_sha256(&key, &[b"iv-part".as_slice(), b"value-part".as_slice()]),
            hmac_sha256(&key, &[b"iv-partvalue-part".as_slice()])
        );
    }

    const DATA: &[u8] = b"data";

    #[test]
    fn verify_accepts_matching_tag() {
        let key = [0x01u8; 32];
        let tag = hmac_sha256(&key, &[DATA]);
        verify_hmac_sha256(&key, &[DATA], &tag).unwrap();
    }

    #[test]
    fn verify_rejects_wrong_key() {
        let tag = hmac_sha256(&[0x01u8; 32], &[DATA]);
        let err = verify_hmac_sha256(&[0x02u8; 32], &[DATA], &tag).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidMac));
    }

    #[test]
    fn verify_rejects_truncated_tag() {
        let key = [0x01u8; 32];
        let tag = hmac_sha256(&key, &[DATA]);
        let err = verify_hmac_sha256(&key, &[DATA], &tag[..31]).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidMac));
    }
}
