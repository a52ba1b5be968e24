use cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};
use des::Des;
use crate::{OperationError, OperationResult, SymmetricCipher};

type DesEcbEnc = ecb::Encryptor<Des>;
type DesEcbDec = ecb::Decryptor<Des>;

pub const DES_KEY_SIZE: usize = 8;
pub const DES_BLOCK_SIZE: usize = 8;

/// DES in ECB mode with PKCS#7 padding.
///
/// The key is the raw UTF-8 bytes of the key text and must be exactly
/// [`DES_KEY_SIZE`] bytes long; shorter or longer keys are rejected rather
/// than truncated or padded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DESWrapper;

impl DESWrapper {
    pub fn new() -> Self {
        Self
    }

    fn check_key(key: &[u8]) -> OperationResult<()> {
        if key.len() != DES_KEY_SIZE {
            return Err(OperationError::key_parse(format!(
                "DES key must be {} bytes of UTF-8, got {}",
                DES_KEY_SIZE,
                key.len()
            )));
        }
        Ok(())
    }
}

impl SymmetricCipher for DESWrapper {
    fn name(&self) -> &'static str {
        "des"
    }

    fn encrypt_bytes(&self, plaintext: &[u8], key: &[u8]) -> OperationResult<Vec<u8>> {
        Self::check_key(key)?;
        let cipher = DesEcbEnc::new_from_slice(key)
            .map_err(|e| OperationError::internal(e.to_string()).with_cause(e))?;

        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt_bytes(&self, ciphertext: &[u8], key: &[u8]) -> OperationResult<Vec<u8>> {
        Self::check_key(key)?;
        if ciphertext.is_empty() || ciphertext.len() % DES_BLOCK_SIZE != 0 {
            return Err(OperationError::padding(format!(
                "ciphertext length {} is not a positive multiple of {}",
                ciphertext.len(),
                DES_BLOCK_SIZE
            )));
        }

        let cipher = DesEcbDec::new_from_slice(key)
            .map_err(|e| OperationError::internal(e.to_string()).with_cause(e))?;

        cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|e| {
                OperationError::padding(
                    "PKCS#7 padding check failed (wrong key or corrupted ciphertext)",
                )
                .with_cause(e)
            })
    }
}
