use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Configuration Error: Invalid base URL: {0}")]
    BaseUrlInvalid(#[from] UrlParseError),

    #[error("Configuration Error: WEBUI_API_BASE_URL is not set")]
    MissingBaseUrl,

    #[error("Configuration Error: Failed to build HTTP client: {0}")]
    HttpClientBuildFailed(reqwest::Error),

    #[error("Request Error: Token is not a valid header value: {0}")]
    InvalidToken(InvalidHeaderValue),

    #[error("Request Error: Failed to build or send the request: {0}")]
    RequestFailed(reqwest::Error),

    #[error("Network Error: Connection or timeout issue: {0}")]
    NetworkIssue(reqwest::Error),

    #[error("HTTP Error: Server responded with status {status}: {detail}")]
    Api {
        // Server responded with non-2xx and a JSON body
        status: StatusCode,
        detail: Value, // `detail` field of the body, Null when absent
    },

    #[error("Response Error: Failed to deserialize response body (status {status}): {source}. Body snippet: '{body_snippet}'")]
    DeserializationFailed {
        status: StatusCode,
        source: serde_json::Error,
        body_snippet: String,
    },
}

impl ApiClientError {
    /// The server-provided `detail` of a failed response, if there was one.
    pub fn detail(&self) -> Option<&Value> {
        match self {
            ApiClientError::Api { detail, .. } if !detail.is_null() => Some(detail),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiClientError::Api { status, .. }
            | ApiClientError::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
