//! Error types for the Data Product Exchange client
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Errors from list operations reach pager callers unchanged.

use serde_json::Value;
use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to load configuration: {0}")]
    ConfigSource(#[from] config::ConfigError),

    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Missing required parameter: {field}")]
    MissingRequiredField { field: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Token request failed with HTTP {status}: {body}")]
    TokenRequest { status: u16, body: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP {status}: {message}")]
    Service {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing config field error
    pub fn missing_config(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a missing required parameter error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build a service error from a non-success response body.
    ///
    /// The message is looked up in the shapes the service (and its gateway)
    /// return: `errors[0].message`, `message`, `error`, `errorMessage`.
    pub fn service(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<Value>(raw_body).ok();
        let message = body
            .as_ref()
            .and_then(error_message_from_body)
            .unwrap_or_else(|| default_status_message(status, raw_body));

        Self::Service {
            status,
            message,
            body,
        }
    }

    /// HTTP status code associated with this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } | Error::TokenRequest { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is worth retrying by the caller
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Service { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

fn error_message_from_body(body: &Value) -> Option<String> {
    if let Some(first) = body
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        if let Some(message) = first.get("message").and_then(Value::as_str) {
            return Some(message.to_string());
        }
    }

    ["message", "error", "errorMessage"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(String::from)
}

fn default_status_message(status: u16, raw_body: &str) -> String {
    let trimmed = raw_body.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('{') {
        return trimmed.to_string();
    }
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown error")
        .to_string()
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}
