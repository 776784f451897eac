//! Server-side key authority
//!
//! Owns the long-lived RSA keypair, exposes the public half for
//! distribution, and runs the envelope decryption pipeline: structural
//! validation, session key unwrap with padding-scheme fallback,
//! authenticated payload decryption and typed decoding.

use serde::{de::DeserializeOwned, Serialize};

use involucra_crypto::{
    asymmetric::rsa::{self, OaepHash, Rsa},
    base64,
    symmetric::aes::{Aes, KEY_SIZE, NONCE_SIZE, TAG_SIZE},
};

use crate::{
    decode,
    envelope::{Envelope, EnvelopeBytes},
    error::{CoreError, Result},
    sealer,
};

/// OAEP schemes attempted when unwrapping a session key, in priority order
///
/// SHA-256 is the scheme clients are told to use; SHA-1 tolerates clients
/// that encrypt with the bare WebCrypto `RSA-OAEP` default. The attempt
/// order must never surface in errors.
const UNWRAP_SCHEMES: [OaepHash; 2] = [OaepHash::Sha256, OaepHash::Sha1];

/// Process-wide owner of the server keypair
///
/// Construct once at startup and share by read-only reference (an `Arc` at
/// the service layer); every operation takes `&self` and the keypair never
/// mutates, so concurrent opens need no locking.
pub struct KeyAuthority {
    keypair: Rsa,
}

impl KeyAuthority {
    /// Generate an authority with a fresh 2048-bit keypair
    pub fn generate() -> Result<Self> {
        Self::generate_with_bits(2048)
    }

    /// Generate an authority with a keypair of the given modulus size
    pub fn generate_with_bits(bits: usize) -> Result<Self> {
        let keypair = Rsa::generate(bits)?;
        Ok(Self { keypair })
    }

    /// Public half as SPKI DER
    pub fn public_key_der(&self) -> Result<Vec<u8>> {
        Ok(self.keypair.to_spki_der()?)
    }

    /// Public half as base64 SPKI DER, the form clients fetch
    pub fn public_key_b64(&self) -> Result<String> {
        Ok(base64::encode(self.public_key_der()?))
    }

    /// Open an envelope and decode its payload into `T`
    ///
    /// Structural checks run before any private-key operation; a malformed
    /// envelope never reaches the RSA layer.
    pub fn open<T: DeserializeOwned>(&self, envelope: &Envelope) -> Result<T> {
        let fields = envelope.to_bytes()?;
        let nonce = self.validate_structure(&fields)?;

        let session_key = self.unwrap_session_key(&fields.wrapped_key)?;

        let plaintext = Aes::new(&session_key)
            .decrypt_with_nonce(&fields.ciphertext_and_tag, &nonce)
            .map_err(|_| CoreError::PayloadIntegrityFailed)?;

        decode::from_slice(&plaintext).map_err(|e| CoreError::PayloadDecodeFailed(e.to_string()))
    }

    /// Seal a payload for an arbitrary recipient public key
    ///
    /// Response-direction counterpart of `EnvelopeSealer::seal`. Stays inert
    /// until callers hold their own keypairs and distribute the public half.
    pub fn seal_for<T: Serialize>(
        &self,
        payload: &T,
        recipient_spki_der: &[u8],
    ) -> Result<Envelope> {
        let public_key = rsa::public_key_from_spki_der(recipient_spki_der)
            .map_err(|e| CoreError::KeyImportFailed(e.to_string()))?;
        sealer::seal_with_key(&public_key, payload)
    }

    /// Validate field lengths and return the fixed-size nonce
    fn validate_structure(&self, fields: &EnvelopeBytes) -> Result<[u8; NONCE_SIZE]> {
        let expected_key_len = self.keypair.modulus_size();
        if fields.wrapped_key.len() != expected_key_len {
            return Err(CoreError::MalformedEnvelope(format!(
                "wrapped key length {} does not match RSA modulus size {}",
                fields.wrapped_key.len(),
                expected_key_len
            )));
        }

        if fields.nonce.is_empty() {
            return Err(CoreError::MalformedEnvelope("iv is empty".to_string()));
        }
        let nonce: [u8; NONCE_SIZE] = fields.nonce.as_slice().try_into().map_err(|_| {
            CoreError::MalformedEnvelope(format!(
                "iv length {} (expected {})",
                fields.nonce.len(),
                NONCE_SIZE
            ))
        })?;

        if fields.ciphertext_and_tag.len() < TAG_SIZE {
            return Err(CoreError::MalformedEnvelope(format!(
                "ciphertext length {} is below the {}-byte tag size",
                fields.ciphertext_and_tag.len(),
                TAG_SIZE
            )));
        }

        Ok(nonce)
    }

    /// Unwrap the session key, trying each accepted scheme in order
    ///
    /// Stops at the first structural success; a decryption that yields a key
    /// of the wrong size is terminal, not retried under the next scheme.
    fn unwrap_session_key(&self, wrapped_key: &[u8]) -> Result<[u8; KEY_SIZE]> {
        for scheme in UNWRAP_SCHEMES {
            match self.keypair.decrypt_oaep(scheme, wrapped_key) {
                Ok(key_bytes) => {
                    return key_bytes
                        .try_into()
                        .map_err(|_| CoreError::KeyUnwrapFailed);
                }
                Err(_) => {
                    tracing::debug!(scheme = scheme.name(), "session key unwrap attempt failed");
                }
            }
        }
        Err(CoreError::KeyUnwrapFailed)
    }
}
