use crate::error::{OperationError, OperationResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RSA_KEY_BITS: usize = 2048;
pub const RSA_BITS_ENV: &str = "CRYPTO_TOOLKIT_RSA_BITS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    pub rsa_key_bits: usize,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            rsa_key_bits: DEFAULT_RSA_KEY_BITS,
        }
    }
}

impl ToolkitConfig {
    /// Loads from the environment, keeping defaults for unset variables.
    pub fn load() -> OperationResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> OperationResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(RSA_BITS_ENV) {
            config.rsa_key_bits = raw.trim().parse().map_err(|e| {
                OperationError::key_generation(format!(
                    "{} must be an integer bit length, got {:?}",
                    RSA_BITS_ENV, raw
                ))
                .with_cause(e)
            })?;
        }
        Ok(config)
    }
}
