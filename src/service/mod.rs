//! Data Product Exchange operations
//!
//! [`DataProductExchangeService`] exposes one async method per REST
//! operation, each taking its own options struct, plus pager factories for
//! the three list operations.

mod exchange;
mod options;

pub use exchange::DataProductExchangeService;
pub use options::{
    CreateDataProductDraftOptions, CreateDataProductOptions,
    CreateDraftContractTermsDocumentOptions, DeleteDataProductDraftOptions,
    DeleteDraftContractTermsDocumentOptions, GetDataProductDraftOptions, GetDataProductOptions,
    GetDataProductReleaseOptions, GetDraftContractTermsDocumentOptions,
    GetInitializeStatusOptions, GetReleaseContractTermsDocumentOptions, InitializeOptions,
    ListDataProductDraftsOptions, ListDataProductReleasesOptions, ListDataProductsOptions,
    PublishDataProductDraftOptions, RetireDataProductReleaseOptions,
    UpdateDataProductDraftOptions, UpdateDataProductReleaseOptions,
};
