/*!
    Authenticated encryption envelope compatible with Laravel's `Encrypter`.

    Encrypt:
      iv       = 16 random bytes
      payload  = serialize_str(value)            (skipped by encrypt_string)
      value    = AES-CBC(key, iv, pkcs7_pad(payload))
      iv_b64   = base64(iv)
      value_b64= base64(value)
      mac      = hex(HMAC-SHA256(key, iv_b64 || value_b64))
      ticket   = base64(json({"iv": iv_b64, "value": value_b64, "mac": mac}))

    Decrypt reverses this, and verifies the MAC in constant time over the
    base64 strings exactly as stored in the ticket before anything else is
    decoded or decrypted. A tampered ticket always fails with `InvalidMac`.
*/

use serde::{Deserialize, Serialize};

use crate::constants::{AES_BLOCK_SIZE, AES_IV_SIZE, HMAC_SHA256_HEX_LEN};
use crate::error::{CryptoError, CryptoResult};
use crate::serialize::{serialize_str, unserialize_str};
use crate::utils::generate_iv;

use super::aes::{BlockCipher, aes_cbc_decrypt, aes_cbc_encrypt};
use super::hmac::{hmac_sha256, verify_hmac_sha256};
use super::padding::{pkcs7_pad, pkcs7_unpad};

/**
    The decoded envelope: base64 IV, base64 ciphertext and hex MAC.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub iv: String,
    pub value: String,
    pub mac: String,
}

/// Wire shape used while decoding, so missing fields can be reported by name.
/// Unknown fields (such as Laravel's empty `tag`) are ignored.
#[derive(Deserialize)]
struct RawTicket {
    iv: Option<String>,
    value: Option<String>,
    mac: Option<String>,
}

impl Ticket {
    /**
        Decode a transport ticket: base64, then a JSON object carrying the
        string fields `iv`, `value` and `mac`.
    */
    pub fn from_base64(ticket: impl AsRef<[u8]>) -> CryptoResult<Self> {
        let json = data_encoding::BASE64
            .decode(ticket.as_ref())
            .map_err(|e| CryptoError::MalformedTicket(format!("invalid base64: {e}")))?;

        let raw: RawTicket = serde_json::from_slice(&json)
            .map_err(|e| CryptoError::MalformedTicket(format!("invalid JSON: {e}")))?;

        Ok(Self {
            iv: raw.iv.ok_or(CryptoError::IncompleteTicket("iv"))?,
            value: raw.value.ok_or(CryptoError::IncompleteTicket("value"))?,
            mac: raw.mac.ok_or(CryptoError::IncompleteTicket("mac"))?,
        })
    }

    /**
        Encode for transport: JSON, then base64.
    */
    pub fn to_base64(&self) -> CryptoResult<String> {
        let json = serde_json::to_vec(self)
            .map_err(|e| CryptoError::MalformedTicket(format!("cannot encode JSON: {e}")))?;
        Ok(data_encoding::BASE64.encode(&json))
    }
}

/**
    Encrypts and decrypts tickets under a single AES key.

    The key length picks the cipher: 16 bytes for AES-128-CBC, 24 for
    AES-192-CBC, 32 for AES-256-CBC. The same key is used for the MAC.

    Typical usage:
    ```ignore
    let encrypter = Encrypter::new(&app_key)?;
    let ticket = encrypter.encrypt("hello")?;
    assert_eq!(encrypter.decrypt(&ticket)?, "hello");
    ```
*/
#[derive(Clone)]
pub struct Encrypter {
    key: Vec<u8>,
    cipher: BlockCipher,
}

impl Encrypter {
    /**
        Create an encrypter. Fails with `InvalidKeySize` unless the key is
        16, 24 or 32 bytes.
    */
    pub fn new(key: impl AsRef<[u8]>) -> CryptoResult<Self> {
        let key = key.as_ref();
        let cipher = BlockCipher::new(key)?;
        log::debug!("envelope encrypter using {}-CBC", cipher.name());
        Ok(Self {
            key: key.to_vec(),
            cipher,
        })
    }

    /**
        Cipher in use, e.g. `AES-256-CBC`.
    */
    pub fn cipher_name(&self) -> String {
        format!("{}-CBC", self.cipher.name())
    }

    /**
        Serialize `value` as a string scalar and seal it into a ticket.
    */
    pub fn encrypt(&self, value: &str) -> CryptoResult<String> {
        self.seal(&serialize_str(value))?.to_base64()
    }

    /**
        Seal the raw bytes of `value` without scalar serialization.
    */
    pub fn encrypt_string(&self, value: &str) -> CryptoResult<String> {
        self.seal(value.as_bytes())?.to_base64()
    }

    /**
        Open a ticket produced by [`Encrypter::encrypt`] and unserialize the
        string it carries.
    */
    pub fn decrypt(&self, ticket: &str) -> CryptoResult<String> {
        let payload = self.open(ticket)?;
        unserialize_str(&payload)
    }

    /**
        Open a ticket produced by [`Encrypter::encrypt_string`].
    */
    pub fn decrypt_string(&self, ticket: &str) -> CryptoResult<String> {
        let payload = self.open(ticket)?;
        String::from_utf8(payload)
            .map_err(|e| CryptoError::Decryption(format!("plaintext is not UTF-8: {e}")))
    }

    fn seal(&self, payload: &[u8]) -> CryptoResult<Ticket> {
        let iv = generate_iv()?;
        Ok(self.seal_with_iv(payload, &iv))
    }

    fn seal_with_iv(&self, payload: &[u8], iv: &[u8; AES_IV_SIZE]) -> Ticket {
        let padded = pkcs7_pad(payload, AES_BLOCK_SIZE);
        let ciphertext = aes_cbc_encrypt(&self.cipher, iv, &padded);

        let iv = data_encoding::BASE64.encode(iv);
        let value = data_encoding::BASE64.encode(&ciphertext);
        let mac = hex::encode(hmac_sha256(&self.key, &[iv.as_bytes(), value.as_bytes()]));

        Ticket { iv, value, mac }
    }

    fn open(&self, ticket: &str) -> CryptoResult<Vec<u8>> {
        let ticket = Ticket::from_base64(ticket.trim())?;

        self.verify_mac(&ticket)?;

        let iv = data_encoding::BASE64
            .decode(ticket.iv.as_bytes())
            .map_err(|e| CryptoError::MalformedTicket(format!("invalid IV base64: {e}")))?;
        let ciphertext = data_encoding::BASE64
            .decode(ticket.value.as_bytes())
            .map_err(|e| CryptoError::MalformedTicket(format!("invalid value base64: {e}")))?;

        let padded = aes_cbc_decrypt(&self.cipher, &iv, &ciphertext)?;
        pkcs7_unpad(&padded, AES_BLOCK_SIZE)
            .map_err(|e| CryptoError::Decryption(e.to_string()))
    }

    fn verify_mac(&self, ticket: &Ticket) -> CryptoResult<()> {
        let expected = match ticket.mac.len() {
            HMAC_SHA256_HEX_LEN => hex::decode(&ticket.mac).ok(),
            _ => None,
        };
        let result = match expected {
            Some(expected) => verify_hmac_sha256(
                &self.key,
                &[ticket.iv.as_bytes(), ticket.value.as_bytes()],
                &expected,
            ),
            None => Err(CryptoError::InvalidMac),
        };

        if result.is_err() {
            log::debug!("rejecting ticket: MAC mismatch");
        }
        result
    }
}

impl std::fmt::Debug for Encrypter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encrypter")
            .field("cipher", &self.cipher_name())
            .finish_non_exhaustive()
    }
}

/**
    Encrypt `value` into a ticket under `key`. See [`Encrypter::encrypt`].
*/
pub fn encrypt(value: &str, key: &[u8]) -> CryptoResult<String> {
    Encrypter::new(key)?.encrypt(value)
}

/**
    Decrypt a ticket under `key`. See [`Encrypter::decrypt`].
*/
pub fn decrypt(ticket: &str, key: &[u8]) -> CryptoResult<String> {
    Encrypter::new(key)?.decrypt(ticket)
}
