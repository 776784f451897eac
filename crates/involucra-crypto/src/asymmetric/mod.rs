//! Asymmetric cryptography algorithms
//!
//! This module provides the RSA keypair handling and OAEP key wrapping
//! used to protect per-message session keys.

pub mod rsa;

pub use rsa::Rsa;
