//! HTTP client used by the service
//!
//! Handles:
//! - URL construction from the configured service URL
//! - Default and per-request headers
//! - Authentication
//! - Response body parsing and error classification

use crate::auth::Authenticator;
use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, in the order they are sent
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Content type of the body (defaults to `application/json`)
    pub content_type: Option<String>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a query parameter when the value is present
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v.to_string()),
            None => self,
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Merge a set of headers
    #[must_use]
    pub fn headers(mut self, headers: &HashMap<String, String>) -> Self {
        self.headers
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the body content type
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set timeout when present
    #[must_use]
    pub fn timeout_opt(self, timeout: Option<Duration>) -> Self {
        match timeout {
            Some(t) => self.timeout(t),
            None => self,
        }
    }
}

/// HTTP client bound to one service URL
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
    default_headers: HashMap<String, String>,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a client from a service configuration
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let base_url = Url::parse(config.service_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidConfigValue {
                field: "service_url".to_string(),
                message: format!("'{base_url}' cannot be used as a base URL"),
            });
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(config.enable_gzip)
            .build()
            .map_err(Error::Http)?;

        let authenticator = Authenticator::with_client(config.auth.clone(), client.clone());

        Ok(Self {
            client,
            base_url,
            timeout: config.timeout,
            default_headers: config.default_headers.clone(),
            authenticator,
        })
    }

    /// The service URL every path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments against the service URL.
    ///
    /// Each segment is percent-encoded, so identifiers containing `/` or
    /// spaces stay inside their segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and return the successful response
    pub async fn request(&self, method: Method, url: Url, config: RequestConfig) -> Result<Response> {
        let timeout = config.timeout.unwrap_or(self.timeout);

        let mut req = self
            .client
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json");

        for (key, value) in &self.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            let content_type = config
                .content_type
                .as_deref()
                .unwrap_or("application/json");
            req = req
                .header(CONTENT_TYPE, content_type)
                .body(serde_json::to_vec(body)?);
        }

        req = req.timeout(timeout);
        req = self.authenticator.apply(req).await?;

        debug!(%method, %url, query = ?config.query, "Sending request");

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!(%method, %url, ?timeout, "Request timed out");
                return Err(Error::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            Err(e) => return Err(Error::Http(e)),
        };

        let status = response.status();
        if status.is_success() {
            debug!(%method, %url, status = status.as_u16(), "Request succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%method, %url, status = status.as_u16(), "Request failed");
        Err(Error::service(status.as_u16(), &body))
    }

    /// Send a request and parse the JSON response
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.request(method, url, config).await?;
        let bytes = response.bytes().await.map_err(Error::Http)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::decode(format!("invalid response body: {e}")))
    }

    /// Send a request that is expected to return no content
    pub async fn request_empty(&self, method: Method, url: Url, config: RequestConfig) -> Result<()> {
        let response = self.request(method, url, config).await?;
        if response.status() != StatusCode::NO_CONTENT {
            debug!(status = response.status().as_u16(), "Ignoring response body");
        }
        Ok(())
    }

    /// GET and parse JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url, config: RequestConfig) -> Result<T> {
        self.request_json(Method::GET, url, config).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("authenticator", &self.authenticator)
            .finish_non_exhaustive()
    }
}
