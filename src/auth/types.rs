//! Auth configuration types

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Default IAM token service
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

/// Authentication scheme names as used in environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// No authentication
    NoAuth,
    /// HTTP Basic
    Basic,
    /// Static bearer token
    BearerToken,
    /// IAM API key exchanged for an access token
    Iam,
}

impl FromStr for AuthType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "noauth" | "none" => Ok(Self::NoAuth),
            "basic" => Ok(Self::Basic),
            "bearertoken" | "bearer" => Ok(Self::BearerToken),
            "iam" => Ok(Self::Iam),
            other => Err(Error::InvalidConfigValue {
                field: "auth_type".to_string(),
                message: format!("unsupported authentication type '{other}'"),
            }),
        }
    }
}

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },

    /// IAM API key flow
    Iam {
        /// The API key exchanged for access tokens
        apikey: String,
        /// Token service base URL (`/identity/token` is appended)
        url: String,
        /// Optional client id sent as basic auth on the token request
        client_id: Option<String>,
        /// Optional client secret sent as basic auth on the token request
        client_secret: Option<String>,
        /// Optional scope
        scope: Option<String>,
    },
}

impl AuthConfig {
    /// IAM config with the default token service
    pub fn iam(apikey: impl Into<String>) -> Self {
        Self::Iam {
            apikey: apikey.into(),
            url: DEFAULT_IAM_URL.to_string(),
            client_id: None,
            client_secret: None,
            scope: None,
        }
    }

    /// Bearer token config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Basic auth config
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The scheme this config uses
    pub fn auth_type(&self) -> AuthType {
        match self {
            Self::None => AuthType::NoAuth,
            Self::Basic { .. } => AuthType::Basic,
            Self::Bearer { .. } => AuthType::BearerToken,
            Self::Iam { .. } => AuthType::Iam,
        }
    }

    /// Reject configs with empty credentials
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::None => Ok(()),
            Self::Basic { username, password } => {
                if username.is_empty() {
                    return Err(Error::missing_config("username"));
                }
                if password.is_empty() {
                    return Err(Error::missing_config("password"));
                }
                Ok(())
            }
            Self::Bearer { token } => {
                if token.is_empty() {
                    return Err(Error::missing_config("bearer_token"));
                }
                Ok(())
            }
            Self::Iam {
                apikey,
                url,
                client_id,
                client_secret,
                ..
            } => {
                if apikey.is_empty() {
                    return Err(Error::missing_config("apikey"));
                }
                url::Url::parse(url)?;
                if client_id.is_some() != client_secret.is_some() {
                    return Err(Error::InvalidConfigValue {
                        field: "client_id".to_string(),
                        message: "client_id and client_secret must be set together".to_string(),
                    });
                }
                Ok(())
            }
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::Bearer { .. } => f.debug_struct("Bearer").finish_non_exhaustive(),
            Self::Iam { url, client_id, .. } => f
                .debug_struct("Iam")
                .field("url", url)
                .field("client_id", client_id)
                .finish_non_exhaustive(),
        }
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now.
    ///
    /// Fails when `seconds` does not fit in the representable date range.
    pub fn expires_in(token: String, seconds: i64) -> Result<Self> {
        let expires_at = chrono::Duration::try_seconds(seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| Error::decode(format!("token lifetime out of range: {seconds}s")))?;
        Ok(Self {
            token,
            expires_at: Some(expires_at),
        })
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false,
        }
    }
}
