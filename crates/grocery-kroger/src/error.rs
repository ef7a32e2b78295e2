use thiserror::Error;

/// Errors returned by the Kroger API client.
#[derive(Debug, Error)]
pub enum KrogerError {
    /// A caller-supplied parameter was rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// Network, TLS, timeout, or URL failure from the underlying HTTP client.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status other than `200 OK`.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// A `200 OK` body could not be deserialized into the expected type.
    #[error("failed to deserialize JSON response body for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl KrogerError {
    /// `true` when the error was raised by parameter validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
