//! Encoding error types.

/// Errors that can occur while encoding request parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The request violates a structural rule and must not be sent.
    #[error("client validation failed: {0}")]
    ClientValidation(String),

    /// Two nodes flattened to the same parameter name.
    #[error("duplicate parameter name: {0}")]
    DuplicateKey(String),
}

/// Convenience result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
