//! HTTP transport
//!
//! Thin layer over `reqwest` that every service operation goes through.
//!
//! # Features
//!
//! - **Base URL joining** with percent-encoded path parameters
//! - **Authentication** through the auth module
//! - **Per-request timeouts and headers**
//! - **Error classification** of non-success responses
//!
//! A request is sent exactly once. Callers that want retries can use
//! [`Error::is_retryable`](crate::Error::is_retryable) to decide.

mod client;

pub use client::{HttpClient, RequestConfig};

#[cfg(test)]
mod tests;
