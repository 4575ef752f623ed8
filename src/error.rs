//! Error taxonomy for client actions.
//!
//! ERROR HANDLING
//! ==============
//! Every action resolves to `Result<_, ApiError>`. Components never see raw
//! transport errors: they render [`ApiError::user_message`] and restore any
//! control they disabled. Nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback text when the server reports a failure without explaining it.
pub const GENERIC_SERVER_ERROR: &str = "Request failed";

/// Text shown to the user for transport faults.
pub const COMMUNICATION_ERROR: &str = "Could not reach the server. Please check your connection and try again.";

/// Failure of a single client action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Input was rejected locally before any request was issued.
    #[error("validation failed: {0}")]
    Validation(&'static str),

    /// The request could not be sent or the response could not be read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with `success: false` or a non-OK status.
    #[error("server error: {message}")]
    Server { status: u16, message: String },

    /// The response body was not the JSON shape the endpoint promises.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text suitable for rendering in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(reason) => (*reason).to_owned(),
            Self::Transport(_) => COMMUNICATION_ERROR.to_owned(),
            Self::Server { message, .. } => message.clone(),
            Self::Decode(_) => "Unexpected response from server.".to_owned(),
        }
    }

    /// Whether the failure happened before anything reached the network.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
