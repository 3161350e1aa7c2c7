use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching the slide list.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request never produced a response
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Banner endpoint answered with a non-success status
    #[error("Banner endpoint '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// Slide file could not be read
    #[error("Failed to read slide file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Body was not a slide list
    #[error("Invalid slide list: {0}")]
    Decode(#[from] serde_json::Error),

    /// Source settings are incomplete
    #[error("Slide source misconfigured: {0}")]
    Misconfigured(String),
}

impl ProviderError {
    /// Short message for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProviderError::Client(_) | ProviderError::Misconfigured(_) => {
                "Slide source is not configured correctly"
            }
            ProviderError::Request { .. } => "Could not reach the banner service",
            ProviderError::Status { .. } => "Banner service returned an error",
            ProviderError::Read { .. } => "Could not read the slide file",
            ProviderError::Decode(_) => "Slide list is malformed",
        }
    }
}
