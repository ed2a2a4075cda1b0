/**
    AES block size in bytes. Shared by the ECB adapter, CBC and PKCS#7 padding.
*/
pub const AES_BLOCK_SIZE: usize = 16;

/**
    CBC initialization vector size in bytes (one AES block).
*/
pub const AES_IV_SIZE: usize = AES_BLOCK_SIZE;

/**
    Accepted AES key sizes in bytes: AES-128, AES-192 and AES-256.
*/
pub const AES_KEY_SIZES: [usize; 3] = [16, 24, 32];

/**
    `chrono` layout for `Y-m-d H:i:s` timestamps, e.g. `2024-03-09 07:05:01`.
*/
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// PEM label of an SPKI-encoded public key.
pub(crate) const PUBLIC_KEY_PEM_LABEL: &str = "PUBLIC KEY";

/// Length of a hex-encoded HMAC-SHA256 tag.
pub(crate) const HMAC_SHA256_HEX_LEN: usize = 64;
