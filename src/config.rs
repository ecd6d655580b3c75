//! Service configuration
//!
//! `ServiceConfig` carries everything the client needs to reach the
//! service: URL, credentials, timeout and default headers. It can be built
//! in code or loaded from `DATA_PRODUCT_EXCHANGE_*` environment variables.

use crate::auth::{AuthConfig, AuthType, DEFAULT_IAM_URL};
use crate::error::{Error, Result};
use crate::types::{OptionStringExt, StringMap};
use config::{Config, Environment};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Default service endpoint
pub const DEFAULT_SERVICE_URL: &str =
    "https://api.dataplatform.cloud.ibm.com/data_product_exchange/v1";

/// Prefix of the environment variables read by [`ServiceConfig::from_env`]
pub const ENV_PREFIX: &str = "DATA_PRODUCT_EXCHANGE";

/// Configuration for the Data Product Exchange service client
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL all operation paths are appended to
    pub service_url: String,
    /// Authentication scheme and credentials
    pub auth: AuthConfig,
    /// Default per-request timeout
    pub timeout: Duration,
    /// Headers sent with every request
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
    /// Accept gzip-compressed responses
    pub enable_gzip: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            auth: AuthConfig::None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("data-product-exchange-rust/{}", env!("CARGO_PKG_VERSION")),
            enable_gzip: false,
        }
    }
}

impl ServiceConfig {
    /// Create a new config builder
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX).prefix_separator("_"))
    }

    /// Load configuration from an explicit variable map.
    ///
    /// Keys use the same names as the environment
    /// (`DATA_PRODUCT_EXCHANGE_URL`, ...).
    pub fn from_env_source(vars: HashMap<String, String>) -> Result<Self> {
        let source: config::Map<String, String> = vars.into_iter().collect();
        Self::load(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .source(Some(source)),
        )
    }

    fn load(environment: Environment) -> Result<Self> {
        let settings: EnvSettings = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        settings.into_service_config()
    }

    /// Check that the URL parses and credentials are complete
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.service_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidConfigValue {
                field: "service_url".to_string(),
                message: "must be an absolute http(s) URL".to_string(),
            });
        }
        self.auth.validate()
    }
}

/// Builder for service config
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    /// Set the service URL
    #[must_use]
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.config.service_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the authentication config
    #[must_use]
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Accept gzip-compressed responses
    #[must_use]
    pub fn enable_gzip(mut self, enabled: bool) -> Self {
        self.config.enable_gzip = enabled;
        self
    }

    /// Build the config
    pub fn build(self) -> ServiceConfig {
        self.config
    }
}

/// Raw environment values before interpretation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnvSettings {
    url: Option<String>,
    auth_type: Option<String>,
    apikey: Option<String>,
    bearer_token: Option<String>,
    username: Option<String>,
    password: Option<String>,
    auth_url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    timeout_secs: Option<u64>,
    enable_gzip: Option<bool>,
}

impl EnvSettings {
    fn into_service_config(self) -> Result<ServiceConfig> {
        let auth_type = match self.auth_type.none_if_empty() {
            Some(name) => name.parse()?,
            None if self.apikey.is_some() => AuthType::Iam,
            None if self.bearer_token.is_some() => AuthType::BearerToken,
            None => AuthType::NoAuth,
        };

        let auth = match auth_type {
            AuthType::NoAuth => AuthConfig::None,
            AuthType::Basic => AuthConfig::Basic {
                username: required(self.username, "username")?,
                password: required(self.password, "password")?,
            },
            AuthType::BearerToken => AuthConfig::Bearer {
                token: required(self.bearer_token, "bearer_token")?,
            },
            AuthType::Iam => AuthConfig::Iam {
                apikey: required(self.apikey, "apikey")?,
                url: self
                    .auth_url
                    .none_if_empty()
                    .unwrap_or_else(|| DEFAULT_IAM_URL.to_string()),
                client_id: self.client_id.none_if_empty(),
                client_secret: self.client_secret.none_if_empty(),
                scope: self.scope.none_if_empty(),
            },
        };

        let mut builder = ServiceConfig::builder().auth(auth);
        if let Some(url) = self.url.none_if_empty() {
            builder = builder.service_url(url);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(gzip) = self.enable_gzip {
            builder = builder.enable_gzip(gzip);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value
        .none_if_empty()
        .ok_or_else(|| Error::missing_config(field))
}
