//! # Involucra
//!
//! Hybrid envelope encryption for request payloads: clients seal each
//! payload under a fresh AES-256-GCM session key wrapped with RSA-OAEP
//! against a server's distributed public key, and the server's key
//! authority validates and opens the resulting envelopes.
//!
//! ## Crates
//!
//! - `involucra_crypto` - cryptographic primitives
//! - `involucra_core` - envelope protocol (key authority and sealer)

// Re-export all sub-crates
pub use involucra_core;
pub use involucra_crypto;
