use crate::config::ClientConfig;
use crate::errors::ApiClientError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

const BODY_SNIPPET_LEN: usize = 200;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let http_client = reqwest::Client::builder().build().map_err(|e| {
            error!(error = %e, "failed to build HTTP client");
            ApiClientError::HttpClientBuildFailed(e)
        })?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            error!(error = %e, base_url = %config.base_url, "invalid base URL");
            ApiClientError::BaseUrlInvalid(e)
        })?;

        Ok(ApiClient {
            base_url,
            http_client,
        })
    }

    pub fn from_env() -> Result<Self, ApiClientError> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn get(&self, endpoint: &str) -> Result<RequestBuilder, ApiClientError> {
        self.request(Method::GET, endpoint)
    }

    pub fn put(&self, endpoint: &str) -> Result<RequestBuilder, ApiClientError> {
        self.request(Method::PUT, endpoint)
    }

    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder, ApiClientError> {
        let url = self.build_url(endpoint)?;
        debug!(%method, %url, "sending request");
        Ok(self.http_client.request(method, url))
    }

    /// Appends `endpoint` to the base URL as written, keeping any path prefix
    /// the base already carries (`http://host/api/v1` + `/x` => `http://host/api/v1/x`).
    pub fn build_url(&self, endpoint: &str) -> Result<Url, ApiClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{endpoint}")).map_err(|e| {
            error!(error = %e, %endpoint, "failed to build request URL");
            ApiClientError::BaseUrlInvalid(e)
        })
    }

    pub fn add_query_params<Q: Serialize + ?Sized>(
        &self,
        builder: RequestBuilder,
        params: Option<&Q>,
    ) -> RequestBuilder {
        if let Some(query_params) = params {
            builder.query(query_params)
        } else {
            builder
        }
    }

    pub fn add_headers(
        &self,
        builder: RequestBuilder,
        headers: Option<&HeaderMap>,
    ) -> RequestBuilder {
        if let Some(custom_headers) = headers {
            builder.headers(custom_headers.clone())
        } else {
            builder
        }
    }

    /// JSON accept/content-type headers plus `authorization: Bearer <token>`.
    pub fn bearer_headers(&self, token: &str) -> Result<HeaderMap, ApiClientError> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                error!(error = %e, "bearer token is not a valid header value");
                ApiClientError::InvalidToken(e)
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }

    /// Sends the request and returns the JSON body on 2xx. Any other status has
    /// its JSON body logged in full and only its `detail` field surfaced.
    pub async fn send_request<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiClientError> {
        let response = match builder.send().await {
            Ok(res) => res,
            Err(e) => {
                error!(error = %e, "request failed before a response was received");
                if e.is_connect() || e.is_timeout() {
                    return Err(ApiClientError::NetworkIssue(e));
                }
                return Err(ApiClientError::RequestFailed(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            return self.handle_json_response::<T>(status, response).await;
        }

        let payload = self
            .handle_json_response::<Value>(status, response)
            .await
            .inspect_err(|e| {
                error!(%status, error = %e, "server returned an unreadable error response")
            })?;
        error!(%status, %payload, "server returned an error response");
        let detail = payload.get("detail").cloned().unwrap_or(Value::Null);
        Err(ApiClientError::Api { status, detail })
    }

    async fn handle_json_response<T: DeserializeOwned>(
        &self,
        status: StatusCode,
        response: Response,
    ) -> Result<T, ApiClientError> {
        let body = response.bytes().await.map_err(|e| {
            error!(error = %e, "failed to read response body");
            ApiClientError::RequestFailed(e)
        })?;

        serde_json::from_slice::<T>(&body).map_err(|source| {
            let body_snippet: String = String::from_utf8_lossy(&body)
                .chars()
                .take(BODY_SNIPPET_LEN)
                .collect();
            error!(
                %status,
                error = %source,
                %body_snippet,
                "failed to deserialize response body"
            );
            ApiClientError::DeserializationFailed {
                status,
                source,
                body_snippet,
            }
        })
    }
}
