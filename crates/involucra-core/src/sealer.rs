//! Client-side envelope sealer
//!
//! Turns plaintext payloads into envelopes addressed to a server public key.
//! The distributed key is imported once per session; each seal operation
//! uses a fresh session key and a fresh nonce.

use serde::Serialize;

use involucra_crypto::{
    asymmetric::rsa::{self, OaepHash, RsaPublicKey},
    encoding::spki,
    symmetric::aes::{self, Aes},
};

use crate::{
    envelope::Envelope,
    error::{CoreError, Result},
};

/// Envelope sealer holding the imported server key
#[derive(Default)]
pub struct EnvelopeSealer {
    public_key: Option<RsaPublicKey>,
}

impl EnvelopeSealer {
    /// Sealer with no key imported yet
    ///
    /// Sealing before `import_server_key` fails with `KeyNotReady`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Import the server key and construct in one step
    pub fn with_server_key(material: &str) -> Result<Self> {
        let mut sealer = Self::new();
        sealer.import_server_key(material)?;
        Ok(sealer)
    }

    /// Import the server's public key
    ///
    /// Accepts a PEM-wrapped public key or a raw base64 SPKI string, as
    /// distributed by the key authority. Importing again replaces the
    /// cached key.
    pub fn import_server_key(&mut self, material: &str) -> Result<()> {
        let der = spki::normalize_public_key_material(material)
            .map_err(|e| CoreError::KeyImportFailed(e.to_string()))?;
        spki::ensure_rsa_spki(&der).map_err(|e| CoreError::KeyImportFailed(e.to_string()))?;
        let public_key = rsa::public_key_from_spki_der(&der)
            .map_err(|e| CoreError::KeyImportFailed(e.to_string()))?;

        self.public_key = Some(public_key);
        Ok(())
    }

    /// Whether a server key has been imported
    pub fn is_ready(&self) -> bool {
        self.public_key.is_some()
    }

    /// Seal a payload into an envelope for the imported server key
    pub fn seal<T: Serialize>(&self, payload: &T) -> Result<Envelope> {
        let public_key = self.public_key.as_ref().ok_or(CoreError::KeyNotReady)?;
        seal_with_key(public_key, payload)
    }
}

/// Seal a payload under a known public key
///
/// Shared by the client sealer and the authority's response direction:
/// serialize, encrypt under a fresh session key and nonce, wrap the session
/// key with OAEP-SHA256, assemble the envelope.
pub(crate) fn seal_with_key<T: Serialize>(
    public_key: &RsaPublicKey,
    payload: &T,
) -> Result<Envelope> {
    let plaintext =
        serde_json::to_vec(payload).map_err(|e| CoreError::PayloadEncodeFailed(e.to_string()))?;

    let session_key = aes::generate_key();
    let nonce = aes::generate_nonce();

    let ciphertext_and_tag = Aes::new(&session_key)
        .encrypt_with_nonce(&plaintext, &nonce)
        .map_err(|_| CoreError::EncryptionFailed)?;

    let wrapped_key = rsa::encrypt_oaep(public_key, OaepHash::Sha256, &session_key)
        .map_err(|_| CoreError::EncryptionFailed)?;

    Ok(Envelope::from_bytes(&wrapped_key, &nonce, &ciphertext_and_tag))
}
