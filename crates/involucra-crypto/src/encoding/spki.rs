//! SPKI public key material handling
//!
//! Distributed public keys arrive either as PEM text or as a raw base64
//! SPKI string. This module normalizes both to DER and checks the embedded
//! algorithm identifier before a key is imported.

use pkcs8::{der::Decode, spki::SubjectPublicKeyInfoRef};

use crate::{
    encoding::base64,
    error::{Error, Result},
};

const PEM_HEADER: &str = "-----BEGIN PUBLIC KEY-----";
const PEM_FOOTER: &str = "-----END PUBLIC KEY-----";

/// Normalize distributed key material to SPKI DER bytes
///
/// Accepts a PEM-wrapped public key or a raw base64 SPKI string; whitespace
/// and line breaks are ignored in both forms.
pub fn normalize_public_key_material(material: &str) -> Result<Vec<u8>> {
    let body: String = material
        .replace(PEM_HEADER, "")
        .replace(PEM_FOOTER, "")
        .split_whitespace()
        .collect();
    base64::decode(body)
}

/// Check that SPKI DER carries an rsaEncryption public key
pub fn ensure_rsa_spki(der: &[u8]) -> Result<()> {
    let spki = SubjectPublicKeyInfoRef::from_der(der)?;
    if spki.algorithm.oid != const_oid::db::rfc5912::RSA_ENCRYPTION {
        return Err(Error::Other(format!(
            "Unsupported public key algorithm OID: {}",
            spki.algorithm.oid
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asymmetric::rsa::Rsa;

    // Minimal Ed25519 SPKI (RFC 8410): wrong algorithm for this protocol
    fn ed25519_spki() -> Vec<u8> {
        let mut der = vec![
            0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00,
        ];
        der.extend_from_slice(&[0u8; 32]);
        der
    }

    #[test]
    fn test_normalize_pem() {
        let key = Rsa::generate_2048().unwrap();
        let pem = key.to_spki_pem().unwrap();

        let der = normalize_public_key_material(&pem).unwrap();
        assert_eq!(der, key.to_spki_der().unwrap());
    }

    #[test]
    fn test_normalize_raw_base64() {
        let key = Rsa::generate_2048().unwrap();
        let b64 = base64::encode(key.to_spki_der().unwrap());

        let der = normalize_public_key_material(&b64).unwrap();
        assert_eq!(der, key.to_spki_der().unwrap());
    }

    #[test]
    fn test_normalize_base64_with_line_breaks() {
        let key = Rsa::generate_2048().unwrap();
        let b64 = base64::encode(key.to_spki_der().unwrap());
        let wrapped: String = b64
            .as_bytes()
            .chunks(64)
            .map(|chunk| format!("{}\n", String::from_utf8_lossy(chunk)))
            .collect();

        let der = normalize_public_key_material(&wrapped).unwrap();
        assert_eq!(der, key.to_spki_der().unwrap());
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(normalize_public_key_material("not base64 at all!").is_err());
    }

    #[test]
    fn test_ensure_rsa_spki_accepts_rsa() {
        let key = Rsa::generate_2048().unwrap();
        let der = key.to_spki_der().unwrap();
        assert!(ensure_rsa_spki(&der).is_ok());
    }

    #[test]
    fn test_ensure_rsa_spki_rejects_other_algorithms() {
        assert!(ensure_rsa_spki(&ed25519_spki()).is_err());
    }

    #[test]
    fn test_ensure_rsa_spki_rejects_invalid_der() {
        assert!(ensure_rsa_spki(&[0xde, 0xad, 0xbe, 0xef]).is_err());
    }
}
