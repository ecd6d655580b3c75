//! Pagination traits
//!
//! The seams between the pager and the operations it drives.

use crate::error::Result;
use async_trait::async_trait;

/// A page returned by a list operation
pub trait PagedResponse {
    /// Record type carried by the page
    type Item;

    /// Cursor for the following page, if the server returned one
    fn next_start(&self) -> Option<&str>;

    /// Consume the page, yielding its records in server order
    fn into_items(self) -> Vec<Self::Item>;
}

/// Query options accepted by a list operation
pub trait PagedOptions: Clone + Send + Sync {
    /// Check required fields before any request is made
    fn validate(&self) -> Result<()>;

    /// Replace the `start` cursor
    fn set_start(&mut self, start: Option<String>);
}

/// A list operation that can be driven by a pager.
///
/// Implemented by the service once per options type, so a pager for
/// `ListDataProductsOptions` calls `list_data_products` and so on.
#[async_trait]
pub trait ListOperation<O: PagedOptions>: Send + Sync {
    /// Page type returned by the operation
    type Page: PagedResponse + Send;

    /// Issue exactly one list request
    async fn list(&self, options: &O) -> Result<Self::Page>;
}
