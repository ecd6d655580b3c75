// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Data Product Exchange client
//!
//! Async Rust client for the Data Product Exchange REST API.
//!
//! ## Features
//!
//! - **Typed operations**: one method and options struct per REST call
//! - **Cursor pagination**: a generic [`Pager`] over data products, drafts and releases
//! - **Auth**: IAM API key exchange with token caching, bearer token, basic
//! - **Env config**: `DATA_PRODUCT_EXCHANGE_*` variables
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use data_product_exchange::{DataProductExchangeService, ListDataProductsOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let service = DataProductExchangeService::from_env()?;
//!
//!     let mut pager = service.data_products_pager(ListDataProductsOptions::new().limit(50))?;
//!     let products = pager.get_all().await?;
//!     println!("{} data products", products.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                 DataProductExchangeService                │
//! │  list_* / get_* / create_* / update_* / delete_* / ...    │
//! │  data_products_pager / drafts_pager / releases_pager      │
//! └───────────────────────────────────────────────────────────┘
//!                │                               │
//! ┌──────────────┴─────────────┐   ┌─────────────┴─────────────┐
//! │  Pager<O, S>               │   │  HttpClient               │
//! │  cursor, exhausted flag    │   │  URL building, headers    │
//! │  get_next / get_all        │   │  Authenticator (IAM/...)  │
//! └────────────────────────────┘   └───────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP transport
pub mod http;

/// Service configuration
pub mod config;

/// Request and response models
pub mod models;

/// Cursor pagination
pub mod pagination;

/// Service operations
pub mod service;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use pagination::{
    DataProductDraftsPager, DataProductReleasesPager, DataProductsPager, Pager,
};
pub use service::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
