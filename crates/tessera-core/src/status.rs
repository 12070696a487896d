use thiserror::Error;

/// Failures surfaced by the encoding pipeline. Every variant carries a
/// human-readable reason; callers must treat the output buffer as garbage
/// whenever an error is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("Invalid input geometry: {0}")]
    InvalidInput(String),
    #[error("Invalid encoding method: {0}")]
    InvalidEncodingMethod(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

pub type Status = Result<(), EncodeError>;
