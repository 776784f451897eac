//! Envelope wire model
//!
//! One envelope carries one encrypted message: the RSA-wrapped session key,
//! the AES-GCM nonce, and the authenticated ciphertext. All three travel as
//! base64 text; the JSON field names are pinned to the wire format and the
//! server accepts no other spelling.

use serde::{Deserialize, Serialize};

use involucra_crypto::base64;

use crate::error::{CoreError, Result};

/// One encrypted message in transit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// RSA-OAEP-wrapped session key, base64
    #[serde(rename = "encryptedAESKey")]
    pub encrypted_aes_key: String,

    /// 12-byte AES-GCM nonce, base64
    pub iv: String,

    /// Ciphertext with trailing 16-byte authentication tag, base64
    #[serde(rename = "encryptedData")]
    pub encrypted_data: String,
}

/// Raw envelope fields after transport decoding
pub struct EnvelopeBytes {
    pub wrapped_key: Vec<u8>,
    pub nonce: Vec<u8>,
    pub ciphertext_and_tag: Vec<u8>,
}

impl Envelope {
    /// Assemble an envelope from raw fields
    pub fn from_bytes(wrapped_key: &[u8], nonce: &[u8], ciphertext_and_tag: &[u8]) -> Self {
        Self {
            encrypted_aes_key: base64::encode(wrapped_key),
            iv: base64::encode(nonce),
            encrypted_data: base64::encode(ciphertext_and_tag),
        }
    }

    /// Decode the base64 transport fields
    pub fn to_bytes(&self) -> Result<EnvelopeBytes> {
        Ok(EnvelopeBytes {
            wrapped_key: decode_field(&self.encrypted_aes_key, "encryptedAESKey")?,
            nonce: decode_field(&self.iv, "iv")?,
            ciphertext_and_tag: decode_field(&self.encrypted_data, "encryptedData")?,
        })
    }
}

fn decode_field(value: &str, field: &str) -> Result<Vec<u8>> {
    base64::decode(value).map_err(|_| {
        CoreError::MalformedEnvelope(format!("field '{}' is not valid base64", field))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let envelope = Envelope::from_bytes(b"key", b"nonce", b"data");
        let value = serde_json::to_value(&envelope).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("encryptedAESKey"));
        assert!(object.contains_key("iv"));
        assert!(object.contains_key("encryptedData"));
    }

    #[test]
    fn test_bytes_round_trip() {
        let envelope = Envelope::from_bytes(&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]);
        let bytes = envelope.to_bytes().unwrap();

        assert_eq!(bytes.wrapped_key, [1, 2, 3]);
        assert_eq!(bytes.nonce, [4, 5, 6]);
        assert_eq!(bytes.ciphertext_and_tag, [7, 8, 9]);
    }

    #[test]
    fn test_invalid_base64_is_malformed() {
        let envelope = Envelope {
            encrypted_aes_key: "!!not base64!!".to_string(),
            iv: base64::encode(b"nonce"),
            encrypted_data: base64::encode(b"data"),
        };

        match envelope.to_bytes() {
            Err(CoreError::MalformedEnvelope(reason)) => {
                assert!(reason.contains("encryptedAESKey"));
            }
            other => panic!("expected MalformedEnvelope, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let envelope = Envelope::from_bytes(b"wrapped", b"twelve bytes", b"ciphertext + tag");
        let json = serde_json::to_string(&envelope).unwrap();
        let parsed: Envelope = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.encrypted_aes_key, envelope.encrypted_aes_key);
        assert_eq!(parsed.iv, envelope.iv);
        assert_eq!(parsed.encrypted_data, envelope.encrypted_data);
    }
}
