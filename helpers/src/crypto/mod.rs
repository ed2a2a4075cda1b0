mod aes;
mod ecb;
mod envelope;
mod hmac;
mod padding;
mod rsa;

pub use self::ecb::{EcbEncryptor, ecb_encrypt};
pub use self::envelope::{Encrypter, Ticket, decrypt, encrypt};
pub use self::hmac::compute_hmac_sha256;
pub use self::padding::{pkcs7_pad, pkcs7_unpad};
pub use self::rsa::{RsaVerifier, is_valid_signature, verify_signature};
