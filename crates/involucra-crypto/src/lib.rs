//! Involucra Cryptography Library
//!
//! This library provides the cryptographic primitives for the Involucra
//! envelope protocol: RSA keypair handling with OAEP key wrapping,
//! AES-256-GCM payload encryption, and the encodings used on the wire.

pub mod encoding;
pub mod error;

// Cryptographic algorithm modules
pub mod asymmetric;
pub mod symmetric;

// Re-export commonly used types for convenience
pub use asymmetric::rsa::{OaepHash, Rsa, RsaPublicKey};
pub use encoding::base64;
pub use error::{Error, Result};
pub use symmetric::aes::Aes;
