use std::fmt;
use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of a failed cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed Base64 input, or bytes that are not valid UTF-8 after decryption.
    Decode,
    /// PKCS#7 / PKCS#1 padding did not validate on decrypt.
    Padding,
    /// Key text or PEM is missing, malformed or the wrong size.
    KeyParse,
    /// Key-pair generation did not produce both keys.
    KeyGeneration,
    /// Plaintext exceeds what the asymmetric key can carry.
    SizeLimit,
    /// Anything else reported by the underlying primitive.
    InternalCipher,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decode => "decode error",
            Self::Padding => "padding error",
            Self::KeyParse => "key parse error",
            Self::KeyGeneration => "key generation error",
            Self::SizeLimit => "size limit error",
            Self::InternalCipher => "internal cipher error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single failure value returned by every public operation.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct OperationError {
    kind: ErrorKind,
    message: String,
    #[source]
    cause: Option<Cause>,
}

pub type OperationResult<T> = std::result::Result<T, OperationError>;

impl OperationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    pub fn padding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Padding, message)
    }

    pub fn key_parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyParse, message)
    }

    pub fn key_generation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyGeneration, message)
    }

    pub fn size_limit(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SizeLimit, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalCipher, message)
    }

    /// Attaches the primitive's own error as the `source()` of this one.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl From<base64::DecodeError> for OperationError {
    fn from(err: base64::DecodeError) -> Self {
        OperationError::decode(format!("malformed Base64 input: {}", err)).with_cause(err)
    }
}

impl From<std::string::FromUtf8Error> for OperationError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        OperationError::decode(format!("decrypted bytes are not valid UTF-8: {}", err))
            .with_cause(err)
    }
}
