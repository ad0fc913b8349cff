use crate::errors::ApiClientError;
use tracing::error;

pub const BASE_URL_ENV: &str = "WEBUI_API_BASE_URL";

/// Where the backend lives. Read once at startup, never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
        }
    }

    /// Load the base URL from `WEBUI_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ApiClientError> {
        Self::from_value(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Result<Self, ApiClientError> {
        match value {
            Some(base_url) if !base_url.trim().is_empty() => Ok(Self::new(base_url.trim())),
            _ => {
                error!("{BASE_URL_ENV} is not set");
                Err(ApiClientError::MissingBaseUrl)
            }
        }
    }
}
