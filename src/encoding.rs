//! Text <-> bytes conversions shared by every cipher.
//!
//! Ciphertext leaves the crate as standard Base64 and plaintext as UTF-8;
//! both directions are strict so a wrong key never turns into garbled text.

use crate::error::OperationResult;

pub fn to_base64(bytes: &[u8]) -> String {
    base64::encode(bytes)
}

/// Surrounding whitespace is ignored, anything else outside the standard
/// alphabet is a `Decode` error.
pub fn from_base64(text: &str) -> OperationResult<Vec<u8>> {
    Ok(base64::decode(text.trim())?)
}

pub fn into_utf8(bytes: Vec<u8>) -> OperationResult<String> {
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_base64_accepts_padded_whitespace() {
        assert_eq!(from_base64("  SGVsbG8=\n").unwrap(), b"Hello");
        assert_eq!(to_base64(b"Hello"), "SGVsbG8=");
    }

    #[test]
    fn test_malformed_base64_is_decode_error() {
        for input in ["SGV$bG8=", "%%%%", "a b c d"] {
            let err = from_base64(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Decode, "input {:?}", input);
        }
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = into_utf8(vec![b'o', b'k', 0xc3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(into_utf8("héllo".as_bytes().to_vec()).unwrap(), "héllo");
    }
}
