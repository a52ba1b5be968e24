use cipher::{consts::U256, KeyInit, StreamCipher};
use rc4::Rc4;
use crate::{OperationError, OperationResult, SymmetricCipher};

/// Key length of the schedule every text key is expanded to.
const SCHEDULE_LEN: usize = 256;

// The key schedule only ever reads key[i % len] for i < 256, so cycling the
// key out to 256 bytes yields the same cipher state for any key length.
fn expand_key(key: &[u8]) -> Vec<u8> {
    key.iter().cycle().take(SCHEDULE_LEN).copied().collect()
}

/// RC4 over the raw UTF-8 bytes of the key. Any non-empty key is accepted.
///
/// Encryption and decryption are the same keystream XOR, so the output is
/// exactly as long as the input and identical inputs give identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct RC4Wrapper;

impl RC4Wrapper {
    pub fn new() -> Self {
        Self
    }

    fn crypt(key: &[u8], data: &[u8]) -> OperationResult<Vec<u8>> {
        if key.is_empty() {
            return Err(OperationError::key_parse("RC4 key must not be empty"));
        }
        let mut cipher = Rc4::<U256>::new_from_slice(&expand_key(key))
            .map_err(|e| OperationError::internal(e.to_string()).with_cause(e))?;

        let mut buffer = data.to_vec();
        cipher.apply_keystream(&mut buffer);
        Ok(buffer)
    }
}

impl SymmetricCipher for RC4Wrapper {
    fn name(&self) -> &'static str {
        "rc4"
    }

    fn encrypt_bytes(&self, plaintext: &[u8], key: &[u8]) -> OperationResult<Vec<u8>> {
        Self::crypt(key, plaintext)
    }

    fn decrypt_bytes(&self, ciphertext: &[u8], key: &[u8]) -> OperationResult<Vec<u8>> {
        Self::crypt(key, ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_known_vectors() {
        let rc4 = RC4Wrapper::new();
        assert_eq!(
            rc4.encrypt_bytes(b"Plaintext", b"Key").unwrap(),
            [0xbb, 0xf3, 0x16, 0xe8, 0xd9, 0x40, 0xaf, 0x0a, 0xd3]
        );
        assert_eq!(rc4.encrypt("Plaintext", "Key").unwrap(), "u/MW6NlArwrT");
        assert_eq!(rc4.encrypt("Attack at dawn", "Secret").unwrap(), "RaAfZF/DWzg1UlRLm/U=");
        assert_eq!(rc4.decrypt("u/MW6NlArwrT", "Key").unwrap(), "Plaintext");
    }

    #[test]
    fn test_length_preserved() {
        let rc4 = RC4Wrapper::new();
        for len in [0usize, 1, 7, 8, 300] {
            let data = vec![0x41u8; len];
            assert_eq!(rc4.encrypt_bytes(&data, b"k").unwrap().len(), len);
        }
    }

    #[test]
    fn test_long_key_accepted() {
        let rc4 = RC4Wrapper::new();
        let key = "x".repeat(1000);
        let ciphertext = rc4.encrypt("secret", &key).unwrap();
        assert_eq!(rc4.decrypt(&ciphertext, &key).unwrap(), "secret");
    }

    #[test]
    fn test_key_expansion_cycles_and_truncates() {
        assert_eq!(&expand_key(b"abc")[..7], b"abcabca");
        assert_eq!(expand_key(b"abc").len(), SCHEDULE_LEN);

        let long: Vec<u8> = (0..300u32).map(|i| i as u8).collect();
        assert_eq!(expand_key(&long), &long[..SCHEDULE_LEN]);
    }

    #[test]
    fn test_keys_past_schedule_length_share_state() {
        let rc4 = RC4Wrapper::new();
        let base = "k".repeat(SCHEDULE_LEN);
        let longer = format!("{}tail", base);
        assert_eq!(rc4.encrypt("secret", &base).unwrap(), rc4.encrypt("secret", &longer).unwrap());
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = RC4Wrapper::new().encrypt("secret", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyParse);
    }
}
