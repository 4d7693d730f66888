//! Error Types
//!
//! Failures of remote calls and of user actions.

/// A remote call that produced no usable value
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    /// No response at all (fetch rejected, CORS, offline)
    #[error("network error: {0}")]
    Network(String),

    /// The body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Why a user action did not apply
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionError {
    /// Local input rejected before any remote call
    #[error("{0}")]
    Validation(String),

    /// The remote call failed; local state is unchanged
    #[error(transparent)]
    Api(#[from] ApiError),
}
