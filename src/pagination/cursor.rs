//! Generic cursor pager
//!
//! State is the immutable base query, the current cursor and an exhausted
//! flag. Pages are fetched lazily, one request per `get_next` call.

use super::types::{ListOperation, PagedOptions, PagedResponse};
use crate::error::Result;
use crate::service::{
    DataProductExchangeService, ListDataProductDraftsOptions, ListDataProductReleasesOptions,
    ListDataProductsOptions,
};
use crate::types::OptionStringExt;
use futures::Stream;
use tracing::{debug, trace};

/// Record type yielded by a pager over options `O` and operation `S`
pub type PageItem<O, S> = <<S as ListOperation<O>>::Page as PagedResponse>::Item;

/// Pager over all data products
pub type DataProductsPager<'a> = Pager<'a, ListDataProductsOptions, DataProductExchangeService>;

/// Pager over the drafts of one data product
pub type DataProductDraftsPager<'a> =
    Pager<'a, ListDataProductDraftsOptions, DataProductExchangeService>;

/// Pager over the releases of one data product
pub type DataProductReleasesPager<'a> =
    Pager<'a, ListDataProductReleasesOptions, DataProductExchangeService>;

/// Cursor-based pager over one list operation.
///
/// Once the server stops returning a `next.start` cursor the pager is
/// exhausted for good. Calling [`Pager::get_next`] after that returns an
/// empty batch and makes no request.
///
/// A failed fetch leaves the cursor where it was, so calling `get_next`
/// again re-requests the same page.
///
/// # Example
///
/// ```rust,ignore
/// let mut pager = service.data_products_pager(ListDataProductsOptions::new().limit(50))?;
/// while pager.has_next() {
///     for product in pager.get_next().await? {
///         println!("{}", product.id);
///     }
/// }
/// ```
pub struct Pager<'a, O, S: ?Sized> {
    operation: &'a S,
    options: O,
    cursor: Option<String>,
    exhausted: bool,
    pages_fetched: usize,
}

impl<'a, O, S> Pager<'a, O, S>
where
    O: PagedOptions,
    S: ListOperation<O> + ?Sized,
{
    /// Create a pager for `operation` with the given base query.
    ///
    /// The options are validated the same way the list operation validates
    /// them. Any `start` cursor they carry is dropped: a new pager always
    /// begins at the first page.
    pub fn new(operation: &'a S, mut options: O) -> Result<Self> {
        options.validate()?;
        options.set_start(None);

        Ok(Self {
            operation,
            options,
            cursor: None,
            exhausted: false,
            pages_fetched: 0,
        })
    }

    /// Whether another page may be available. Never performs I/O.
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Fetch the next page and return its records.
    ///
    /// Returns only this page's records, never the accumulated total.
    pub async fn get_next(&mut self) -> Result<Vec<PageItem<O, S>>> {
        if self.exhausted {
            trace!("Pager exhausted, skipping fetch");
            return Ok(Vec::new());
        }

        let mut options = self.options.clone();
        options.set_start(self.cursor.clone());

        let page = self.operation.list(&options).await?;

        let next = page.next_start().none_if_empty();
        let items = page.into_items();
        self.pages_fetched += 1;

        debug!(
            page = self.pages_fetched,
            start = ?self.cursor,
            next = ?next,
            items = items.len(),
            "Fetched page"
        );

        match next {
            Some(cursor) => self.cursor = Some(cursor),
            None => {
                self.cursor = None;
                self.exhausted = true;
            }
        }

        Ok(items)
    }

    /// Fetch every remaining page and concatenate the records in order.
    ///
    /// The first failing fetch aborts the walk and its error is returned;
    /// records gathered by this call before the failure are dropped.
    pub async fn get_all(&mut self) -> Result<Vec<PageItem<O, S>>> {
        let mut all = Vec::new();
        while self.has_next() {
            let mut batch = self.get_next().await?;
            all.append(&mut batch);
        }
        Ok(all)
    }

    /// Turn the pager into a stream of pages.
    ///
    /// The stream ends after the last page, or right after yielding the
    /// first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<PageItem<O, S>>>> + 'a
    where
        O: 'a,
        S: 'a,
    {
        futures::stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok(None);
            }
            let items = pager.get_next().await?;
            Ok(Some((items, pager)))
        })
    }

    /// The base query every page request starts from
    pub fn options(&self) -> &O {
        &self.options
    }

    /// Cursor the next request will carry
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Number of successful fetches so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}

impl<O: std::fmt::Debug, S: ?Sized> std::fmt::Debug for Pager<'_, O, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("options", &self.options)
            .field("cursor", &self.cursor)
            .field("exhausted", &self.exhausted)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}
