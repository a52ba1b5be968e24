pub mod des_wrapper;
pub mod rc4_wrapper;
pub mod rsa_wrapper;

use crate::SymmetricCipher;

/// Every symmetric implementation, for code that treats them uniformly.
pub fn symmetric_ciphers() -> Vec<Box<dyn SymmetricCipher>> {
    vec![
        Box::new(des_wrapper::DESWrapper::new()),
        Box::new(rc4_wrapper::RC4Wrapper::new()),
    ]
}

/// Looks up a symmetric implementation by its [`SymmetricCipher::name`].
pub fn symmetric_cipher(name: &str) -> Option<Box<dyn SymmetricCipher>> {
    symmetric_ciphers()
        .into_iter()
        .find(|cipher| cipher.name().eq_ignore_ascii_case(name))
}
