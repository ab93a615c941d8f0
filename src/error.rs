// Typed errors for the analyzer and comment lifecycle.
//
// Four kinds, matching the four ways a call can go wrong: bad configuration,
// an operation invoked out of lifecycle order, malformed score data, and a
// failed API exchange. All are raised synchronously to the caller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Invalid or unsupported model / model-group selection, or attempting
    /// to analyze with zero enabled models.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Operation invoked in a lifecycle state that forbids it.
    #[error("State error: {0}")]
    State(String),

    /// Response document structurally malformed, or a model name not
    /// recognized by the catalog when querying scores.
    #[error("Score data error: {0}")]
    Data(String),

    /// Transport failure or non-success HTTP status from the remote service.
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code, present when a response was received
        status: Option<u16>,
        /// Response body, present when a response was received
        body: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
