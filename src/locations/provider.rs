use crate::locations::models::Location;
use async_trait::async_trait;
use thiserror::Error;

/// Supplies one target location per round.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn fetch_random_location(&self) -> Result<Location, ProviderError>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("the `{0}` environment variable is not set")]
    MissingCredentials(&'static str),

    #[error("network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("no results: {0}")]
    NoResults(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Malformed(err.to_string())
    }
}
