//! Text-in, text-out wrappers around DES-ECB, RC4 and RSA.
//!
//! Every operation takes UTF-8 text plus a key, returns Base64 ciphertext or
//! UTF-8 plaintext, and reports failure as a classified [`OperationError`].
//! The services hold no state between calls and may be shared across threads.
//!
//! DES runs in ECB mode: identical 8-byte plaintext blocks encrypt to
//! identical ciphertext blocks under the same key, so message structure is
//! visible in the ciphertext.

pub mod algorithms;
pub mod config;
pub mod encoding;
pub mod error;
pub mod telemetry;

pub use algorithms::{
    des_wrapper::DESWrapper, rc4_wrapper::RC4Wrapper, rsa_wrapper::RSAWrapper,
};
pub use config::ToolkitConfig;
pub use error::{ErrorKind, OperationError, OperationResult};

use serde::{Deserialize, Serialize};

/// A public/private key pair in PEM form. Never built with only one half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
}

// Common contract for the symmetric ciphers
pub trait SymmetricCipher: Send + Sync {
    /// Short lowercase name used as the operation prefix in logs.
    fn name(&self) -> &'static str;

    fn encrypt_bytes(&self, plaintext: &[u8], key: &[u8]) -> OperationResult<Vec<u8>>;

    fn decrypt_bytes(&self, ciphertext: &[u8], key: &[u8]) -> OperationResult<Vec<u8>>;

    /// Encrypts the UTF-8 bytes of `message` and returns Base64 ciphertext.
    fn encrypt(&self, message: &str, key: &str) -> OperationResult<String> {
        telemetry::instrument(
            &format!("{}.encrypt", self.name()),
            &[("message_len", message.len()), ("key_len", key.len())],
            || {
                let ciphertext = self.encrypt_bytes(message.as_bytes(), key.as_bytes())?;
                Ok(encoding::to_base64(&ciphertext))
            },
        )
    }

    /// Decodes Base64 `ciphertext`, decrypts it and requires the result to be
    /// valid UTF-8.
    fn decrypt(&self, ciphertext: &str, key: &str) -> OperationResult<String> {
        telemetry::instrument(
            &format!("{}.decrypt", self.name()),
            &[("ciphertext_len", ciphertext.len()), ("key_len", key.len())],
            || {
                let raw = encoding::from_base64(ciphertext)?;
                let plaintext = self.decrypt_bytes(&raw, key.as_bytes())?;
                encoding::into_utf8(plaintext)
            },
        )
    }
}

pub trait AsymmetricCipher: Send + Sync {
    /// Generates a fresh pair with a modulus of `bits` bits. Blocking and
    /// CPU-heavy; callers that need a deadline should run it off-thread.
    fn generate_key_pair(&self, bits: usize) -> OperationResult<KeyPair>;

    fn encrypt(&self, message: &str, public_key_pem: &str) -> OperationResult<String>;

    fn decrypt(&self, ciphertext: &str, private_key_pem: &str) -> OperationResult<String>;
}
