use aes::{
    Aes128, Aes192, Aes256, Block,
    cipher::{BlockDecrypt, BlockEncrypt, InvalidLength, KeyInit},
};

use crate::constants::{AES_BLOCK_SIZE, AES_IV_SIZE};
use crate::error::{CryptoError, CryptoResult};

/// The raw AES block permutation, keyed for one of the three AES key sizes.
///
/// Only single-block operations are exposed here. Modes of operation (ECB, CBC)
/// are built on top by looping over 16-byte chunks.
#[derive(Clone)]
pub(crate) enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipher {
    /// Key the cipher, picking the AES variant from the key length.
    pub fn new(key: &[u8]) -> CryptoResult<Self> {
        let invalid = |_: InvalidLength| CryptoError::InvalidKeySize(key.len());
        match key.len() {
            16 => Aes128::new_from_slice(key).map(Self::Aes128).map_err(invalid),
            24 => Aes192::new_from_slice(key).map(Self::Aes192).map_err(invalid),
            32 => Aes256::new_from_slice(key).map(Self::Aes256).map_err(invalid),
            n => Err(CryptoError::InvalidKeySize(n)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Aes128(_) => "AES-128",
            Self::Aes192(_) => "AES-192",
            Self::Aes256(_) => "AES-256",
        }
    }

    /// Forward permutation of a single block, in place.
    pub fn encrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let block = Block::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    /// Inverse permutation of a single block, in place.
    pub fn decrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let block = Block::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}

impl std::fmt::Debug for BlockCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// AES-CBC encryption.
///
/// Plaintext: PKCS#7-padded bytes (caller pads via pkcs7_pad).
/// Output: ciphertext of the same length. The IV is not prepended.
pub(crate) fn aes_cbc_encrypt(
    cipher: &BlockCipher,
    iv: &[u8; AES_IV_SIZE],
    plaintext: &[u8],
) -> Vec<u8> {
    debug_assert!(
        !plaintext.is_empty() && plaintext.len().is_multiple_of(AES_BLOCK_SIZE),
        "plaintext must be pre-padded to AES block size"
    );

    let mut ciphertext = Vec::with_capacity(plaintext.len());
    let mut prev = *iv;

    for chunk in plaintext.chunks_exact(AES_BLOCK_SIZE) {
        let mut block = [0u8; AES_BLOCK_SIZE];
        block.copy_from_slice(chunk);
        xor_in_place(&mut block, &prev);
        cipher.encrypt_block(&mut block);
        ciphertext.extend_from_slice(&block);
        prev = block;
    }

    ciphertext
}

/// AES-CBC decryption.
///
/// Output: decrypted bytes, still PKCS#7-padded. Caller must unpad via pkcs7_unpad.
pub(crate) fn aes_cbc_decrypt(
    cipher: &BlockCipher,
    iv: &[u8],
    ciphertext: &[u8],
) -> CryptoResult<Vec<u8>> {
    if iv.len() != AES_IV_SIZE {
        return Err(CryptoError::Decryption(format!(
            "IV must be {AES_IV_SIZE} bytes, got {}",
            iv.len()
        )));
    }
    if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(AES_BLOCK_SIZE) {
        return Err(CryptoError::Decryption(
            "ciphertext must be non-empty and block-aligned".into(),
        ));
    }

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut prev = [0u8; AES_BLOCK_SIZE];
    prev.copy_from_slice(iv);

    for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
        let mut block = [0u8; AES_BLOCK_SIZE];
        block.copy_from_slice(chunk);
        let saved = block;
        cipher.decrypt_block(&mut block);
        xor_in_place(&mut block, &prev);
        plaintext.extend_from_slice(&block);
        prev = saved;
    }

    Ok(plaintext)
}

fn xor_in_place(block: &mut [u8; AES_BLOCK_SIZE], other: &[u8; AES_BLOCK_SIZE]) {
    for (b, o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}
