//! Symmetric encryption algorithms
//!
//! This module provides authenticated encryption (AEAD) for envelope
//! payloads using AES-256-GCM.

pub mod aes;

pub use aes::{generate_key, generate_nonce, Aes, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
