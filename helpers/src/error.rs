use thiserror::Error;

/**
    Errors from the padding, cipher, envelope and signature helpers.

    Every variant is terminal for the call that produced it. Retrying with the
    same inputs reproduces the same outcome.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    // ── Keys ──────────────────────────────────────────────────────────
    #[error("invalid AES key size {0} bytes (expected 16, 24 or 32)")]
    InvalidKeySize(usize),

    // ── Padding ───────────────────────────────────────────────────────
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    // ── Entropy ───────────────────────────────────────────────────────
    #[error("random source unavailable: {0}")]
    RandomSource(String),

    // ── Envelope ──────────────────────────────────────────────────────
    #[error("malformed ticket: {0}")]
    MalformedTicket(String),
    #[error("ticket is missing the '{0}' field")]
    IncompleteTicket(&'static str),
    #[error("ticket MAC is invalid")]
    InvalidMac,
    #[error("decryption failed: {0}")]
    Decryption(String),

    // ── Payload serialization ─────────────────────────────────────────
    #[error("cannot unserialize payload: {0}")]
    Deserialization(String),
    #[error("unserialized payload is {0}, expected string")]
    UnexpectedType(&'static str),

    // ── Signatures ────────────────────────────────────────────────────
    #[error("invalid PEM: {0}")]
    InvalidPem(String),
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),
    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),
    #[error("signature verification failed: {0}")]
    SignatureVerification(String),
}

/**
    Type alias for results that may return a [`CryptoError`].
*/
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;
