//! Wrappers for the `/translations` endpoints of the web UI backend.
//!
//! Every call takes the caller's bearer token first, sends one request and
//! returns the JSON body untouched. Failures carry only the server's `detail`.

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::errors::ApiClientError;
use crate::models::{HistoryQuery, SubscriptionTierUpdate};
use serde::de::DeserializeOwned;

pub const ADMIN_SUBSCRIPTIONS_PATH: &str = "/translations/admin/subscriptions";
pub const ADMIN_SUBSCRIPTION_PATH: &str = "/translations/admin/subscription";
pub const MY_SUBSCRIPTION_PATH: &str = "/translations/subscription";
pub const MY_HISTORY_PATH: &str = "/translations/history";

#[derive(Debug, Clone)]
pub struct TranslationsApi {
    client: ApiClient,
}

impl TranslationsApi {
    pub fn new(client: ApiClient) -> Self {
        TranslationsApi { client }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiClientError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    pub fn from_env() -> Result<Self, ApiClientError> {
        Ok(Self::new(ApiClient::from_env()?))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// `GET /translations/admin/subscriptions`
    pub async fn get_admin_subscriptions<T: DeserializeOwned>(
        &self,
        token: &str,
    ) -> Result<T, ApiClientError> {
        let headers = self.client.bearer_headers(token)?;
        let builder = self.client.get(ADMIN_SUBSCRIPTIONS_PATH)?;
        let builder = self.client.add_headers(builder, Some(&headers));
        self.client.send_request(builder).await
    }

    /// `PUT /translations/admin/subscription` with body `{email, tier}`.
    pub async fn update_admin_subscription<T: DeserializeOwned>(
        &self,
        token: &str,
        email: &str,
        tier: &str,
    ) -> Result<T, ApiClientError> {
        let headers = self.client.bearer_headers(token)?;
        let body = SubscriptionTierUpdate {
            email: email.to_owned(),
            tier: tier.to_owned(),
        };
        let builder = self.client.put(ADMIN_SUBSCRIPTION_PATH)?;
        let builder = self.client.add_headers(builder.json(&body), Some(&headers));
        self.client.send_request(builder).await
    }

    /// `GET /translations/subscription`
    pub async fn get_my_subscription<T: DeserializeOwned>(
        &self,
        token: &str,
    ) -> Result<T, ApiClientError> {
        let headers = self.client.bearer_headers(token)?;
        let builder = self.client.get(MY_SUBSCRIPTION_PATH)?;
        let builder = self.client.add_headers(builder, Some(&headers));
        self.client.send_request(builder).await
    }

    /// `GET /translations/history?limit=..&offset=..`. Use
    /// [`HistoryQuery::default()`] for the first page of 50.
    pub async fn get_my_translation_history<T: DeserializeOwned>(
        &self,
        token: &str,
        query: HistoryQuery,
    ) -> Result<T, ApiClientError> {
        let headers = self.client.bearer_headers(token)?;
        let builder = self.client.get(MY_HISTORY_PATH)?;
        let builder = self.client.add_query_params(builder, Some(&query));
        let builder = self.client.add_headers(builder, Some(&headers));
        self.client.send_request(builder).await
    }
}
