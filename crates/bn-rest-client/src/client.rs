// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main REST API client implementation

use std::time::Duration;

use bn_api_contract::ApiErrorBody;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::AuthConfig;
use crate::error::{RestClientError, RestClientResult};
use crate::network_config::NetworkConfig;

/// Default timeout for every request; the free-tier backend can take a
/// while to wake from cold sleep.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// REST API client for the BarberNet backend
#[derive(Debug, Clone)]
pub struct RestClient {
    http_client: HttpClient,
    base_url: Url,
    auth: AuthConfig,
}

impl RestClient {
    /// Create a new REST client
    pub fn new(base_url: Url, auth: AuthConfig) -> Self {
        let http_client = HttpClient::builder()
            .user_agent("barbernet-client/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url,
            auth,
        }
    }

    /// Create a client from a base URL string
    pub fn from_url(base_url: &str, auth: AuthConfig) -> RestClientResult<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self::new(base_url, auth))
    }

    /// Create a client from a network configuration, resolving the base URL
    /// once up front
    pub fn from_config(config: &NetworkConfig, auth: AuthConfig) -> RestClientResult<Self> {
        Self::from_url(&config.resolve_base_url(), auth)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the authentication config
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    // Private helper methods shared by the per-resource modules

    /// Join a path onto the base URL the way the original axios instance
    /// did: plain concatenation, so the `/api` prefix in the base survives.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    pub(crate) fn request_builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "sending request");
        let mut request = self.http_client.request(method, url);
        if let Some(token) = self.auth.bearer_token() {
            request = request.bearer_auth(token);
        }
        request
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> RestClientResult<T> {
        self.send(self.request_builder(Method::GET, path)).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> RestClientResult<T> {
        self.send(self.request_builder(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> RestClientResult<T> {
        self.send(self.request_builder(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> RestClientResult<T> {
        self.send(self.request_builder(Method::PUT, path).json(body)).await
    }

    pub(crate) async fn delete_with_body<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> RestClientResult<T> {
        self.send(self.request_builder(Method::DELETE, path).json(body)).await
    }

    pub(crate) async fn delete_no_content(&self, path: &str) -> RestClientResult<()> {
        self.send_no_content(self.request_builder(Method::DELETE, path)).await
    }

    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> RestClientResult<T> {
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Send a request whose response body is irrelevant; only the status
    /// decides success.
    pub(crate) async fn send_no_content(&self, request: RequestBuilder) -> RestClientResult<()> {
        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::error_from(response).await)
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> RestClientResult<T> {
        if response.status().is_success() {
            let text = response.text().await?;
            serde_json::from_str(&text).map_err(RestClientError::from)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Decode the backend's `{"error": "..."}` envelope; anything else is
    /// surfaced raw.
    async fn error_from(response: Response) -> RestClientError {
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => return RestClientError::Http(err),
        };
        match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => RestClientError::Server {
                status,
                message: body.error,
            },
            Err(_) => RestClientError::UnexpectedResponse(text),
        }
    }
}
