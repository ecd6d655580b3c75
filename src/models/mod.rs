//! Request and response models
//!
//! Plain serde structs mirroring the service's JSON. Deep, loosely
//! specified parts (parts out, properties, visualizations) stay as
//! `serde_json::Value`.

mod common;
mod data_product;
mod initialize;
mod version;

pub use common::{
    AssetPrototype, AssetReference, ContainerReference, ContractTerms, ContractTermsDocument,
    ContractTermsDocumentType, DataProductReference, Domain, FirstPage, JsonPatchOperation,
    NextPage, PatchOp, ReleaseReference,
};
pub use data_product::{DataProduct, DataProductSummary, DataProductSummaryCollection};
pub use initialize::{InitializeResource, InitializeStatus, InitializedOption};
pub use version::{
    DataProductDraft, DataProductDraftCollection, DataProductDraftPrototype,
    DataProductDraftSummary, DataProductRelease, DataProductReleaseCollection,
    DataProductReleaseSummary, DataProductVersion, DataProductVersionSummary, State,
};
