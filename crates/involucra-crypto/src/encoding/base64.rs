//! Simple Base64 utilities
//!
//! Standard-alphabet (RFC 4648, padded) helpers so call sites never touch
//! the `Engine` API directly. Every binary field of the envelope wire
//! format uses this encoding.
//!
//! ## Examples
//! ```
//! use involucra_crypto::base64;
//!
//! let data = b"Hello, World!";
//! let encoded = base64::encode(data); // "SGVsbG8sIFdvcmxkIQ=="
//! let decoded = base64::decode(&encoded).unwrap(); // b"Hello, World!"
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Error, Result};

/// Encode bytes to standard base64 string with padding
pub fn encode<T: AsRef<[u8]>>(data: T) -> String {
    STANDARD.encode(data)
}

/// Decode standard base64 string to bytes
pub fn decode<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| Error::Other(format!("Base64 decode error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let data = b"Hello, World!";

        let encoded = encode(data);
        assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");

        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(b"foo"), "Zm9v");

        assert_eq!(decode("Zg==").unwrap(), b"f");
        assert_eq!(decode("Zm8=").unwrap(), b"fo");
        assert_eq!(decode("Zm9v").unwrap(), b"foo");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(b""), "");
        assert_eq!(decode("").unwrap(), b"");
    }

    #[test]
    fn test_invalid_input() {
        for invalid in ["Invalid base64!", "Zg===", "Z==="] {
            assert!(decode(invalid).is_err());
        }
    }
}
