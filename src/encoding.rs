//! Base64 text encoding and decoding.

use crate::error::ToolError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode text as standard Base64 over its UTF-8 bytes.
pub fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64 back to text. Both a malformed Base64 string
/// and a payload that is not valid UTF-8 are format errors.
pub fn decode_text(encoded: &str) -> Result<String, ToolError> {
    let bytes = STANDARD
        .decode(encoded.trim().as_bytes())
        .map_err(|e| ToolError::InvalidFormat(format!("not valid Base64: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|_| ToolError::InvalidFormat("decoded payload is not UTF-8 text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_ascii() {
        assert_eq!(encode_text("hello"), "aGVsbG8=");
    }

    #[test]
    fn round_trips_unicode() {
        let original = "príliš žluťoučký kůň 🐎";
        assert_eq!(decode_text(&encode_text(original)).unwrap(), original);
    }

    #[test]
    fn empty_string_round_trips() {
        assert_eq!(encode_text(""), "");
        assert_eq!(decode_text("").unwrap(), "");
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(decode_text("  aGVsbG8=\n").unwrap(), "hello");
    }

    #[test]
    fn rejects_malformed_base64() {
        let err = decode_text("not base64!!").unwrap_err();
        assert!(matches!(err, ToolError::InvalidFormat(_)));
    }

    #[test]
    fn rejects_non_utf8_payload() {
        // 0xFF is never valid UTF-8.
        let encoded = STANDARD.encode([0xFFu8, 0xFE]);
        let err = decode_text(&encoded).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }
}
