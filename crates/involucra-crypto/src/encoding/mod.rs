//! Encoding and key-material parsing utilities
//!
//! This module provides the Base64 helpers used by the envelope wire format
//! and SPKI parsing for distributed public keys.

pub mod base64;
pub mod spki;

pub use spki::{ensure_rsa_spki, normalize_public_key_material};
