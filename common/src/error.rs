//! Error types and result aliases.
//!
//! [`FetchError`] covers everything that can go wrong between issuing a GET
//! and holding a decoded collection.

use thiserror::Error;

/// Why a single fetch did not produce records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// A response arrived, but its status is outside the 2xx range.
    #[error("HTTP error! status: {code} - {reason}")]
    Status {
        code: u16,
        reason: String,
        /// `message` field of the gateway's JSON error body, if any.
        detail: Option<String>,
    },

    /// The request never completed.
    #[error("{0}")]
    Transport(String),

    /// The body is not a JSON array of the expected record shape.
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    /// Builds a [`FetchError::Transport`] from an error and its whole source chain.
    pub fn transport(err: &(dyn std::error::Error + 'static)) -> Self {
        FetchError::Transport(error_chain(err))
    }

    /// Short name of the variant, for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Status { .. } => "status",
            FetchError::Transport(_) => "transport",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// Joins an error and all of its sources with `": "`.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message: String = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text: String = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base url '{0}': expected http:// or https:// followed by a host")]
    BaseUrl(String),

    #[error("invalid refresh policy '{0}': expected 'last-response' or 'latest-request'")]
    Policy(String),

    #[error("timeout must be at least one second")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, FetchError>;
