#![allow(clippy::doc_overindented_list_items)]

mod constants;
mod crypto;
mod error;
mod serialize;
mod utils;

pub use self::constants::{AES_BLOCK_SIZE, AES_IV_SIZE, AES_KEY_SIZES, DATE_TIME_FORMAT};
pub use self::crypto::{
    EcbEncryptor, Encrypter, RsaVerifier, Ticket, compute_hmac_sha256, decrypt, ecb_encrypt,
    encrypt, is_valid_signature, pkcs7_pad, pkcs7_unpad, verify_signature,
};
pub use self::error::{CryptoError, CryptoResult};
pub use self::serialize::{serialize_str, unserialize_str};
pub use self::utils::{generate_iv, random_string, to_date_time_string};
