//! Pagination module
//!
//! Cursor-based pager over the service's list operations.
//!
//! # Overview
//!
//! List endpoints return one page at a time plus an optional `next.start`
//! cursor. A [`Pager`] wraps one list operation and hides that cursor: it
//! exposes `has_next` / `get_next` for page-at-a-time iteration and
//! `get_all` to collect everything. One generic pager serves every list
//! operation; [`DataProductsPager`], [`DataProductDraftsPager`] and
//! [`DataProductReleasesPager`] are its instantiations.

mod cursor;
mod types;

pub use cursor::{
    DataProductDraftsPager, DataProductReleasesPager, DataProductsPager, PageItem, Pager,
};
pub use types::{ListOperation, PagedOptions, PagedResponse};
