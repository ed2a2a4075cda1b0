/*!
    AES-ECB encryption with PKCS#7 padding (`AES/ECB/PKCS5Padding`).

    Every 16-byte block is encrypted independently under the same key: no IV,
    no chaining. Identical plaintext blocks therefore produce identical
    ciphertext blocks, and encrypting the same input twice under the same key
    yields the same output. Callers that interoperate with this format accept
    that weakness; new formats should use the envelope in `crypto::envelope`.

    There is intentionally no decrypt counterpart.
*/

use crate::constants::AES_BLOCK_SIZE;
use crate::error::CryptoResult;

use super::aes::BlockCipher;
use super::padding::pkcs7_pad;

/**
    Adapter that runs the single-block AES permutation over a whole buffer,
    one block at a time.
*/
#[derive(Debug, Clone)]
pub struct EcbEncryptor {
    cipher: BlockCipher,
}

impl EcbEncryptor {
    /**
        Key the adapter. Fails with `InvalidKeySize` unless the key is 16, 24
        or 32 bytes.
    */
    pub fn new(key: &[u8]) -> CryptoResult<Self> {
        Ok(Self {
            cipher: BlockCipher::new(key)?,
        })
    }

    /**
        PKCS#7-pad `plaintext` and encrypt each block independently.

        The output length is always a non-zero multiple of 16.
    */
    pub fn encrypt_padded(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut buf = pkcs7_pad(plaintext, AES_BLOCK_SIZE);
        for chunk in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(&block);
        }
        buf
    }
}

/**
    Encrypt `plaintext` with AES-ECB/PKCS#7 under `key` and return the
    ciphertext as standard base64.
*/
pub fn ecb_encrypt(plaintext: &str, key: &[u8]) -> CryptoResult<String> {
    let encryptor = EcbEncryptor::new(key)?;
    let ciphertext = encryptor.encrypt_padded(plaintext.as_bytes());
    Ok(data_encoding::BASE64.encode(&ciphertext))
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;
    use crate::crypto::padding::pkcs7_unpad;
    use crate::error::CryptoError;

    fn ecb_decrypt(key: &[u8], ciphertext: &[u8]) -> Vec<u8> {
        let cipher = BlockCipher::new(key).unwrap();
        let mut out = ciphertext.to_vec();
        for chunk in out.chunks_exact_mut(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            cipher.decrypt_block(&mut block);
            chunk.copy_from_slice(&block);
        }
        pkcs7_unpad(&out, AES_BLOCK_SIZE).unwrap()
    }

    #[test]
    fn matches_openssl_aes_256_ecb() {
        // printf hello | openssl enc -aes-256-ecb -K 00..00 -base64
        let ciphertext = ecb_encrypt("hello", &[0u8; 32]).unwrap();
        assert_eq!(ciphertext, "wjXeJNI54DzI43fGBPymew==");
    }

    #[test]
    fn matches_openssl_aes_128_ecb_multi_block() {
        let key = hex!("000102030405060708090a0b0c0d0e0f");
        let ciphertext = ecb_encrypt("yellow submarine yellow submarine", &key).unwrap();
        assert_eq!(
            ciphertext,
            "AqtgwdbgbU2fuw2YljZh/QWHyHA9UdQ9pUCRccxdr8vbUx0coKyLMbnA83CIKiQW"
        );
    }

    #[test]
    fn matches_openssl_aes_192_ecb_empty_input() {
        let key = hex!("000102030405060708090a0b0c0d0e0f1011121314151617");
        let ciphertext = ecb_encrypt("", &key).unwrap();
        assert_eq!(ciphertext, "P+coar3l8DlD1XdwICWWJg==");
    }

    #[test]
    fn output_is_block_aligned() {
        let encryptor = EcbEncryptor::new(&[7u8; 32]).unwrap();
        for len in 0..=40 {
            let plaintext = vec![b'x'; len];
            let ciphertext = encryptor.encrypt_padded(&plaintext);
            assert!(ciphertext.len().is_multiple_of(16));
            assert!(ciphertext.len() > plaintext.len());
        }
    }

    #[test]
    fn deterministic_for_fixed_key() {
        let key = [0x24u8; 32];
        let first = ecb_encrypt("same input, same output", &key).unwrap();
        let second = ecb_encrypt("same input, same output", &key).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn identical_blocks_encrypt_identically() {
        let encryptor = EcbEncryptor::new(&[0x11u8; 16]).unwrap();
        let ciphertext = encryptor.encrypt_padded(&[b'A'; 32]);
        assert_eq!(ciphertext.len(), 48);
        assert_eq!(ciphertext[..16], ciphertext[16..32]);
        assert_ne!(ciphertext[..16], ciphertext[32..]);
    }

    #[test]
    fn fips197_first_block() {
        let key = hex!("000102030405060708090a0b0c0d0e0f");
        let encryptor = EcbEncryptor::new(&key).unwrap();
        let ciphertext = encryptor.encrypt_padded(&hex!("00112233445566778899aabbccddeeff"));
        assert_eq!(ciphertext[..16], hex!("69c4e0d86a7b0430d8cdb78070b4c55a"));
    }

    #[test]
    fn decrypts_back_with_block_primitive() {
        let key = [0x5Au8; 24];
        let plaintext = "independent blocks, no chaining at all";
        let ciphertext = data_encoding::BASE64
            .decode(ecb_encrypt(plaintext, &key).unwrap().as_bytes())
            .unwrap();
        assert_eq!(ecb_decrypt(&key, &ciphertext), plaintext.as_bytes());
    }

    #[test]
    fn rejects_bad_key_size() {
        let err = ecb_encrypt("hello", &[0u8; 20]).unwrap_err();
        assert_eq!(err, CryptoError::InvalidKeySize(20));
    }
}
