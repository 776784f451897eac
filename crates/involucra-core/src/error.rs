//! Envelope protocol error types

use thiserror::Error;

/// Failures of the envelope protocol
///
/// `KeyUnwrapFailed` and `PayloadIntegrityFailed` intentionally carry no
/// detail: distinguishing RSA padding failures or naming the scheme that
/// failed would hand a padding oracle to the sender of a forged envelope.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Structural violation in the envelope (field lengths, encoding)
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// RSA unwrap of the session key failed under every accepted scheme
    #[error("Session key unwrap failed")]
    KeyUnwrapFailed,

    /// AEAD tag verification failed
    #[error("Payload integrity check failed")]
    PayloadIntegrityFailed,

    /// Decryption succeeded but the plaintext is not the expected shape
    #[error("Payload decode error: {0}")]
    PayloadDecodeFailed(String),

    /// Distributed key material could not be imported
    #[error("Public key import failed: {0}")]
    KeyImportFailed(String),

    /// Seal was requested before a server key was imported
    #[error("Server public key has not been imported")]
    KeyNotReady,

    /// Payload serialization failed
    #[error("Payload encode error: {0}")]
    PayloadEncodeFailed(String),

    /// An underlying cipher operation failed while sealing
    #[error("Envelope encryption failed")]
    EncryptionFailed,

    /// Crypto primitive error
    #[error("Crypto error: {0}")]
    CryptoError(#[from] involucra_crypto::Error),
}

impl CoreError {
    /// The one message a transport boundary should expose to callers
    ///
    /// Every failure collapses to the same rejection so the cause of a
    /// decryption failure cannot be probed from outside.
    pub fn public_message(&self) -> &'static str {
        "encrypted request could not be processed"
    }
}

/// Result type for envelope operations
pub type Result<T> = std::result::Result<T, CoreError>;
