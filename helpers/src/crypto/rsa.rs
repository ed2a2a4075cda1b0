use rsa::{
    Pkcs1v15Sign, RsaPublicKey,
    pkcs8::{DecodePublicKey, der::pem},
    traits::PublicKeyParts,
};
use sha2::{Digest, Sha256};

use crate::constants::PUBLIC_KEY_PEM_LABEL;
use crate::error::{CryptoError, CryptoResult};

/**
    RSA PKCS#1 v1.5 signature verification with SHA-256.

    Key input: a PEM block labelled `PUBLIC KEY` carrying an SPKI-encoded
    RSA key. PKCS#1 `RSA PUBLIC KEY` blocks and non-RSA SPKI keys are
    rejected with `UnsupportedKeyType`.

    The message is hashed here exactly once. `verify` takes the raw
    message bytes, not a digest.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaVerifier {
    public_key: RsaPublicKey,
}

impl RsaVerifier {
    /**
        Parse a PEM-encoded SPKI public key.

        Only the first PEM block is read. Text before it and anything after
        its END line are ignored.
    */
    pub fn from_pem(pem: &str) -> CryptoResult<Self> {
        let (label, der) = pem::decode_vec(first_pem_block(pem).as_bytes())
            .map_err(|e| CryptoError::InvalidPem(e.to_string()))?;

        if label != PUBLIC_KEY_PEM_LABEL {
            return Err(CryptoError::UnsupportedKeyType(format!(
                "expected PEM label '{PUBLIC_KEY_PEM_LABEL}', got '{label}'"
            )));
        }

        Self::from_der(&der)
    }

    /**
        Parse a DER-encoded SPKI public key.
    */
    pub fn from_der(der: &[u8]) -> CryptoResult<Self> {
        let public_key = RsaPublicKey::from_public_key_der(der)
            .map_err(|e| CryptoError::UnsupportedKeyType(e.to_string()))?;
        Ok(Self { public_key })
    }

    /// Modulus size in bytes, which is also the signature size.
    pub fn key_size(&self) -> usize {
        self.public_key.size()
    }

    /**
        Verify `signature` over SHA-256(`message`).

        Returns Ok(()) only for a valid signature. A signature of the wrong
        length, bad padding or a digest mismatch all fail with
        `SignatureVerification`.
    */
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<()> {
        if signature.len() != self.key_size() {
            return Err(CryptoError::SignatureVerification(format!(
                "signature is {} bytes, expected {}",
                signature.len(),
                self.key_size()
            )));
        }

        let digest = Sha256::digest(message);
        self.public_key
            .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature)
            .map_err(|e| {
                log::debug!("RSA signature rejected: {e}");
                CryptoError::SignatureVerification(e.to_string())
            })
    }
}

/// Slice out the first `-----BEGIN ...-----` to `-----END ...-----` block.
/// Falls back to the trimmed input when no complete block is found, so the
/// PEM decoder reports the error.
fn first_pem_block(pem: &str) -> &str {
    const BEGIN: &str = "-----BEGIN ";
    const END: &str = "-----END ";
    const DASHES: &str = "-----";

    let Some(start) = pem.find(BEGIN) else {
        return pem.trim();
    };
    let block = &pem[start..];
    let end = block.find(END).and_then(|end_line| {
        let after = end_line + END.len();
        block[after..].find(DASHES).map(|dashes| after + dashes + DASHES.len())
    });
    match end {
        Some(end) => &block[..end],
        None => block.trim(),
    }
}

/**
    Verify a base64 PKCS#1 v1.5 / SHA-256 signature over `message` using a
    PEM-encoded SPKI RSA public key.

    Errors, in the order they are checked:
      InvalidPem               no PEM block could be decoded
      UnsupportedKeyType       not a `PUBLIC KEY` block, or not an RSA key
      InvalidSignatureEncoding signature is not standard base64
      SignatureVerification    the signature does not match the message
*/
pub fn verify_signature(public_key_pem: &str, signature_b64: &str, message: &str) -> CryptoResult<()> {
    let verifier = RsaVerifier::from_pem(public_key_pem)?;
    let signature = data_encoding::BASE64
        .decode(signature_b64.trim().as_bytes())
        .map_err(|e| CryptoError::InvalidSignatureEncoding(e.to_string()))?;
    verifier.verify(message.as_bytes(), &signature)
}

/**
    Boolean form of [`verify_signature`]: true only for a valid signature.
*/
pub fn is_valid_signature(public_key_pem: &str, signature_b64: &str, message: &str) -> bool {
    verify_signature(public_key_pem, signature_b64, message).is_ok()
}
