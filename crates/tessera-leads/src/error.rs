//! Lead submission error types.

use thiserror::Error;

/// Errors that can occur when submitting a lead.
#[derive(Debug, Error)]
pub enum LeadError {
    /// HTTP transport error (connect, timeout, body encoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The lead endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The endpoint returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The `leads` config section is missing or invalid.
    #[error(transparent)]
    Config(#[from] tessera_config::ConfigError),
}

impl LeadError {
    /// Message shown inline under the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::RateLimited { retry_after_secs } => {
                format!("Too many attempts. Please try again in {retry_after_secs} seconds.")
            }
            _ => String::from("Something went wrong. Please try again."),
        }
    }
}
