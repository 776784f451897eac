//! Involucra envelope protocol
//!
//! Request payloads travel between an untrusted client and a server holding
//! a long-lived RSA keypair. The client seals each payload under a fresh
//! AES-256-GCM session key and wraps that key with RSA-OAEP against the
//! server's public key; the server validates the envelope structure, unwraps
//! the session key, opens the payload and decodes it into a typed value.

pub mod authority;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod sealer;

// Re-exports
pub use authority::KeyAuthority;
pub use envelope::Envelope;
pub use error::{CoreError, Result};
pub use sealer::EnvelopeSealer;
