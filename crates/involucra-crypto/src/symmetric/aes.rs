//! AES-GCM authenticated encryption
//!
//! Provides AEAD encryption using AES-GCM with 256-bit keys. The nonce is
//! always supplied by the caller and transported separately; ciphertexts
//! carry the 16-byte authentication tag appended at the end.

use aes_gcm::{
    aead::{AeadInPlace, KeyInit},
    Aes256Gcm, Key, Nonce, Tag,
};
use rand::RngCore;

use crate::error::{Error, Result};

/// AES-256 key length in bytes
pub const KEY_SIZE: usize = 32;

/// AES-GCM nonce length in bytes
pub const NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag length in bytes
pub const TAG_SIZE: usize = 16;

/// AES-256-GCM cipher wrapper
pub struct Aes {
    cipher: Aes256Gcm,
}

impl Aes {
    /// Create a new AES-256-GCM cipher from a 32-byte key
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        Self {
            cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key)),
        }
    }

    /// Encrypt data with AES-256-GCM using an external nonce
    ///
    /// # Arguments
    /// * `plaintext` - Data to encrypt
    /// * `nonce` - 12-byte nonce for encryption
    ///
    /// # Returns
    /// Ciphertext with the authentication tag appended, nonce NOT prepended
    pub fn encrypt_with_nonce(
        &self,
        plaintext: &[u8],
        nonce: &[u8; NONCE_SIZE],
    ) -> Result<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce);
        let mut buffer = plaintext.to_vec();

        let tag = self
            .cipher
            .encrypt_in_place_detached(nonce, b"", &mut buffer)
            .map_err(|e| Error::Other(format!("AES-GCM encryption failed: {}", e)))?;

        // Append authentication tag
        buffer.extend_from_slice(&tag);

        Ok(buffer)
    }

    /// Decrypt data with AES-256-GCM using an external nonce
    ///
    /// # Arguments
    /// * `encrypted_data` - Ciphertext with trailing authentication tag
    /// * `nonce` - 12-byte nonce used for encryption
    ///
    /// # Returns
    /// Decrypted plaintext
    pub fn decrypt_with_nonce(
        &self,
        encrypted_data: &[u8],
        nonce: &[u8; NONCE_SIZE],
    ) -> Result<Vec<u8>> {
        if encrypted_data.len() < TAG_SIZE {
            return Err(Error::Other(
                "Encrypted data too short for AES-GCM tag".to_string(),
            ));
        }

        let nonce = Nonce::from_slice(nonce);

        // Separate ciphertext and authentication tag
        let tag_start = encrypted_data.len() - TAG_SIZE;
        let mut buffer = encrypted_data[.. tag_start].to_vec();
        let tag = Tag::from_slice(&encrypted_data[tag_start ..]);

        self.cipher
            .decrypt_in_place_detached(nonce, b"", &mut buffer, tag)
            .map_err(|e| Error::Other(format!("AES-GCM decryption failed: {}", e)))?;

        Ok(buffer)
    }
}

/// Generate a random 32-byte key
pub fn generate_key() -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];
    rand::thread_rng().fill_bytes(&mut key);
    key
}

/// Generate a random 12-byte nonce
pub fn generate_nonce() -> [u8; NONCE_SIZE] {
    let mut nonce = [0u8; NONCE_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce);
    nonce
}
