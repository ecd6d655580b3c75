//! Authentication module
//!
//! Supports: no auth, HTTP Basic, static bearer token, IAM API key
//!
//! The `Authenticator` applies credentials to outgoing requests and caches
//! IAM access tokens until they are close to expiry.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, AuthType, CachedToken, DEFAULT_IAM_URL};

#[cfg(test)]
mod tests;
