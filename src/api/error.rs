// api/error.rs - Client error taxonomy

use thiserror::Error;

/// Failures surfaced by the HTTP client layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection,
    /// CORS preflight).
    #[error("request could not be sent: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint answered with status {0}")]
    Status(u16),

    /// The response body did not match the expected schema.
    #[error("response body did not match the expected schema: {0}")]
    Decode(String),

    /// The in-flight request was abandoned because its owner went away.
    #[error("request aborted before completion")]
    Aborted,
}

impl ApiError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
