use crate::error::{CryptoError, CryptoResult};

/// Apply PKCS#7 padding ahead of ECB or CBC encryption.
///
/// Appends 1..=block_size bytes, each holding the padding length. Input that is
/// already block-aligned gets a full block of padding, so padding is always present.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad = block_size - (data.len() % block_size);
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.resize(data.len() + pad, pad as u8);
    out
}

/// Remove PKCS#7 padding from a decrypted plaintext.
///
/// The last byte is the number of padding bytes (1..=block_size), and every
/// padding byte must carry that same value. Returns the unpadded data, or
/// [`CryptoError::InvalidPadding`] if the padding is malformed.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> CryptoResult<Vec<u8>> {
    if data.is_empty() || !data.len().is_multiple_of(block_size) {
        return Err(CryptoError::InvalidPadding);
    }

    let pad = data[data.len() - 1] as usize;
    if pad == 0 || pad > block_size || pad > data.len() {
        return Err(CryptoError::InvalidPadding);
    }

    if data[data.len() - pad..].iter().any(|&byte| byte as usize != pad) {
        return Err(CryptoError::InvalidPadding);
    }

    Ok(data[..data.len() - pad].to_vec())
}
