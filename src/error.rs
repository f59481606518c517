//! Error types for FirstChekout operations
//!
//! Every public operation returns [`Result`]. Failures are never retried or swallowed
//! inside the client; they surface to the caller with one of the kinds below.
//!
//! The gateway contract only distinguishes "the gateway said no" ([`FirstChekoutError::Remote`])
//! from "something else went wrong" ([`FirstChekoutError::UnknownProblem`]). The latter keeps its
//! coarse message, but the concrete cause is available through [`UnknownProblem`].

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for FirstChekout operations
pub type Result<T> = std::result::Result<T, FirstChekoutError>;

/// Errors raised by the FirstChekout client
#[derive(Debug, Error)]
pub enum FirstChekoutError {
    /// Request input failed validation; carries one message per failing rule
    #[error("Validation failed because: {}", .messages.join("; "))]
    Validation { messages: Vec<String> },

    /// The dispatcher was asked to use an HTTP verb the bespoke API does not accept
    #[error("Invalid method supplied in request")]
    InvalidMethod { method: String },

    /// A live-only operation was invoked while the client runs in test mode
    #[error("Service not available in test mode")]
    ModeRestriction { operation: &'static str },

    /// The gateway answered with `status: false`
    #[error("{message}")]
    Remote { message: String },

    /// Transport failure, unexpected HTTP status, or an unreadable envelope
    #[error("An unknown problem occurred!")]
    UnknownProblem(#[source] UnknownProblem),

    /// Missing or malformed configuration
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// The concrete cause behind [`FirstChekoutError::UnknownProblem`]
#[derive(Debug, Error)]
pub enum UnknownProblem {
    /// The request never produced a response
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with something other than 200
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// A 200 response whose body is not a gateway envelope
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[from] serde_json::Error),
}

impl FirstChekoutError {
    /// Create a validation error from collected field messages
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    /// Create an invalid-method error
    pub fn invalid_method(method: impl Into<String>) -> Self {
        Self::InvalidMethod {
            method: method.into(),
        }
    }

    /// Create a mode restriction error for a live-only operation
    pub fn mode_restriction(operation: &'static str) -> Self {
        Self::ModeRestriction { operation }
    }

    /// Create a remote error carrying the gateway's message
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_invalid_method(&self) -> bool {
        matches!(self, Self::InvalidMethod { .. })
    }

    pub fn is_mode_restriction(&self) -> bool {
        matches!(self, Self::ModeRestriction { .. })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    pub fn is_unknown_problem(&self) -> bool {
        matches!(self, Self::UnknownProblem(_))
    }

    /// The underlying cause when this is an [`UnknownProblem`](Self::UnknownProblem)
    pub fn unknown_problem(&self) -> Option<&UnknownProblem> {
        match self {
            Self::UnknownProblem(problem) => Some(problem),
            _ => None,
        }
    }

    /// Validation messages, empty for every other kind
    pub fn validation_messages(&self) -> &[String] {
        match self {
            Self::Validation { messages } => messages,
            _ => &[],
        }
    }
}

impl From<UnknownProblem> for FirstChekoutError {
    fn from(problem: UnknownProblem) -> Self {
        Self::UnknownProblem(problem)
    }
}

impl From<reqwest::Error> for FirstChekoutError {
    fn from(error: reqwest::Error) -> Self {
        Self::UnknownProblem(UnknownProblem::Transport(error))
    }
}

impl From<url::ParseError> for FirstChekoutError {
    fn from(error: url::ParseError) -> Self {
        Self::config(format!("invalid URL: {}", error))
    }
}
