//! Per-operation options
//!
//! Required fields are constructor arguments; everything else has a
//! builder setter. `validate()` runs before any request is sent.

use crate::error::{Error, Result};
use crate::models::{
    ContainerReference, ContractTermsDocumentType, DataProductDraftPrototype, JsonPatchOperation,
    State,
};
use crate::pagination::PagedOptions;
use crate::types::{is_blank, StringMap};
use std::time::Duration;

fn require(value: &str, field: &str) -> Result<()> {
    if is_blank(Some(value)) {
        return Err(Error::missing_field(field));
    }
    Ok(())
}

/// Adds the per-call `header` and `timeout` setters every options type shares
macro_rules! call_settings {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                /// Add a header to this call
                #[must_use]
                pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
                    self.headers.insert(key.into(), value.into());
                    self
                }

                /// Bound this call with a timeout
                #[must_use]
                pub fn timeout(mut self, timeout: Duration) -> Self {
                    self.timeout = Some(timeout);
                    self
                }
            }
        )*
    };
}

call_settings!(
    InitializeOptions,
    GetInitializeStatusOptions,
    ListDataProductsOptions,
    CreateDataProductOptions,
    GetDataProductOptions,
    ListDataProductDraftsOptions,
    CreateDataProductDraftOptions,
    GetDataProductDraftOptions,
    UpdateDataProductDraftOptions,
    DeleteDataProductDraftOptions,
    PublishDataProductDraftOptions,
    CreateDraftContractTermsDocumentOptions,
    GetDraftContractTermsDocumentOptions,
    DeleteDraftContractTermsDocumentOptions,
    ListDataProductReleasesOptions,
    GetDataProductReleaseOptions,
    UpdateDataProductReleaseOptions,
    RetireDataProductReleaseOptions,
    GetReleaseContractTermsDocumentOptions,
);

// ============================================================================
// Configuration
// ============================================================================

/// Options for `initialize`
#[derive(Debug, Clone, Default)]
pub struct InitializeOptions {
    pub container: Option<ContainerReference>,
    /// Resources to set up, e.g. `delivery_methods`, `data_product_samples`
    pub include: Vec<String>,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl InitializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn container(mut self, container: ContainerReference) -> Self {
        self.container = Some(container);
        self
    }

    #[must_use]
    pub fn include(mut self, resource: impl Into<String>) -> Self {
        self.include.push(resource.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(container) = &self.container {
            require(&container.id, "container.id")?;
        }
        Ok(())
    }
}

/// Options for `get_initialize_status`
#[derive(Debug, Clone, Default)]
pub struct GetInitializeStatusOptions {
    pub container_id: Option<String>,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl GetInitializeStatusOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = Some(id.into());
        self
    }
}

// ============================================================================
// Data products
// ============================================================================

/// Options for `list_data_products`
#[derive(Debug, Clone, Default)]
pub struct ListDataProductsOptions {
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl ListDataProductsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page size
    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Cursor from a previous page's `next.start`
    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

impl PagedOptions for ListDataProductsOptions {
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// Options for `create_data_product`
#[derive(Debug, Clone, Default)]
pub struct CreateDataProductOptions {
    pub drafts: Vec<DataProductDraftPrototype>,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl CreateDataProductOptions {
    pub fn new(drafts: Vec<DataProductDraftPrototype>) -> Self {
        Self {
            drafts,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.drafts.is_empty() {
            return Err(Error::missing_field("drafts"));
        }
        for draft in &self.drafts {
            require(&draft.asset.container.id, "drafts.asset.container.id")?;
        }
        Ok(())
    }
}

/// Options for `get_data_product`
#[derive(Debug, Clone, Default)]
pub struct GetDataProductOptions {
    pub data_product_id: String,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl GetDataProductOptions {
    pub fn new(data_product_id: impl Into<String>) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")
    }
}

// ============================================================================
// Drafts
// ============================================================================

/// Options for `list_data_product_drafts`
#[derive(Debug, Clone, Default)]
pub struct ListDataProductDraftsOptions {
    pub data_product_id: String,
    /// Only drafts whose asset lives in this container
    pub asset_container_id: Option<String>,
    /// Only drafts with this version string
    pub version: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl ListDataProductDraftsOptions {
    pub fn new(data_product_id: impl Into<String>) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn asset_container_id(mut self, id: impl Into<String>) -> Self {
        self.asset_container_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

impl PagedOptions for ListDataProductDraftsOptions {
    fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")
    }

    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// Options for `create_data_product_draft`
#[derive(Debug, Clone, Default)]
pub struct CreateDataProductDraftOptions {
    pub data_product_id: String,
    pub draft: DataProductDraftPrototype,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl CreateDataProductDraftOptions {
    pub fn new(data_product_id: impl Into<String>, draft: DataProductDraftPrototype) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            draft,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.draft.asset.container.id, "asset.container.id")
    }
}

/// Options for `get_data_product_draft`
#[derive(Debug, Clone, Default)]
pub struct GetDataProductDraftOptions {
    pub data_product_id: String,
    pub draft_id: String,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl GetDataProductDraftOptions {
    pub fn new(data_product_id: impl Into<String>, draft_id: impl Into<String>) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            draft_id: draft_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.draft_id, "draft_id")
    }
}

/// Options for `update_data_product_draft`
#[derive(Debug, Clone, Default)]
pub struct UpdateDataProductDraftOptions {
    pub data_product_id: String,
    pub draft_id: String,
    pub patch: Vec<JsonPatchOperation>,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl UpdateDataProductDraftOptions {
    pub fn new(
        data_product_id: impl Into<String>,
        draft_id: impl Into<String>,
        patch: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            draft_id: draft_id.into(),
            patch,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.draft_id, "draft_id")?;
        if self.patch.is_empty() {
            return Err(Error::missing_field("json_patch_instructions"));
        }
        Ok(())
    }
}

/// Options for `delete_data_product_draft`
#[derive(Debug, Clone, Default)]
pub struct DeleteDataProductDraftOptions {
    pub data_product_id: String,
    pub draft_id: String,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl DeleteDataProductDraftOptions {
    pub fn new(data_product_id: impl Into<String>, draft_id: impl Into<String>) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            draft_id: draft_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.draft_id, "draft_id")
    }
}

/// Options for `publish_data_product_draft`
#[derive(Debug, Clone, Default)]
pub struct PublishDataProductDraftOptions {
    pub data_product_id: String,
    pub draft_id: String,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl PublishDataProductDraftOptions {
    pub fn new(data_product_id: impl Into<String>, draft_id: impl Into<String>) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            draft_id: draft_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.draft_id, "draft_id")
    }
}

// ============================================================================
// Contract terms documents
// ============================================================================

/// Options for `create_draft_contract_terms_document`
#[derive(Debug, Clone)]
pub struct CreateDraftContractTermsDocumentOptions {
    pub data_product_id: String,
    pub draft_id: String,
    pub contract_terms_id: String,
    pub document_type: ContractTermsDocumentType,
    pub name: String,
    /// Client-chosen document id
    pub id: Option<String>,
    /// Location of `terms` documents
    pub url: Option<String>,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl CreateDraftContractTermsDocumentOptions {
    pub fn new(
        data_product_id: impl Into<String>,
        draft_id: impl Into<String>,
        contract_terms_id: impl Into<String>,
        document_type: ContractTermsDocumentType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            draft_id: draft_id.into(),
            contract_terms_id: contract_terms_id.into(),
            document_type,
            name: name.into(),
            id: None,
            url: None,
            headers: StringMap::new(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.draft_id, "draft_id")?;
        require(&self.contract_terms_id, "contract_terms_id")?;
        require(&self.name, "name")
    }
}

/// Options for `get_draft_contract_terms_document`
#[derive(Debug, Clone, Default)]
pub struct GetDraftContractTermsDocumentOptions {
    pub data_product_id: String,
    pub draft_id: String,
    pub contract_terms_id: String,
    pub document_id: String,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl GetDraftContractTermsDocumentOptions {
    pub fn new(
        data_product_id: impl Into<String>,
        draft_id: impl Into<String>,
        contract_terms_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            draft_id: draft_id.into(),
            contract_terms_id: contract_terms_id.into(),
            document_id: document_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.draft_id, "draft_id")?;
        require(&self.contract_terms_id, "contract_terms_id")?;
        require(&self.document_id, "document_id")
    }
}

/// Options for `delete_draft_contract_terms_document`
#[derive(Debug, Clone, Default)]
pub struct DeleteDraftContractTermsDocumentOptions {
    pub data_product_id: String,
    pub draft_id: String,
    pub contract_terms_id: String,
    pub document_id: String,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl DeleteDraftContractTermsDocumentOptions {
    pub fn new(
        data_product_id: impl Into<String>,
        draft_id: impl Into<String>,
        contract_terms_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            draft_id: draft_id.into(),
            contract_terms_id: contract_terms_id.into(),
            document_id: document_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.draft_id, "draft_id")?;
        require(&self.contract_terms_id, "contract_terms_id")?;
        require(&self.document_id, "document_id")
    }
}

// ============================================================================
// Releases
// ============================================================================

/// Options for `list_data_product_releases`
#[derive(Debug, Clone, Default)]
pub struct ListDataProductReleasesOptions {
    pub data_product_id: String,
    /// Only releases whose asset lives in this container
    pub asset_container_id: Option<String>,
    /// Only releases in one of these states
    pub state: Vec<State>,
    /// Only releases with this version string
    pub version: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl ListDataProductReleasesOptions {
    pub fn new(data_product_id: impl Into<String>) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn asset_container_id(mut self, id: impl Into<String>) -> Self {
        self.asset_container_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: State) -> Self {
        self.state.push(state);
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// `state` as the comma separated query value, if any
    pub(crate) fn state_query(&self) -> Option<String> {
        if self.state.is_empty() {
            return None;
        }
        Some(
            self.state
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

impl PagedOptions for ListDataProductReleasesOptions {
    fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")
    }

    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// Options for `get_data_product_release`
#[derive(Debug, Clone, Default)]
pub struct GetDataProductReleaseOptions {
    pub data_product_id: String,
    pub release_id: String,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl GetDataProductReleaseOptions {
    pub fn new(data_product_id: impl Into<String>, release_id: impl Into<String>) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            release_id: release_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.release_id, "release_id")
    }
}

/// Options for `update_data_product_release`
#[derive(Debug, Clone, Default)]
pub struct UpdateDataProductReleaseOptions {
    pub data_product_id: String,
    pub release_id: String,
    pub patch: Vec<JsonPatchOperation>,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl UpdateDataProductReleaseOptions {
    pub fn new(
        data_product_id: impl Into<String>,
        release_id: impl Into<String>,
        patch: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            release_id: release_id.into(),
            patch,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.release_id, "release_id")?;
        if self.patch.is_empty() {
            return Err(Error::missing_field("json_patch_instructions"));
        }
        Ok(())
    }
}

/// Options for `retire_data_product_release`
#[derive(Debug, Clone, Default)]
pub struct RetireDataProductReleaseOptions {
    pub data_product_id: String,
    pub release_id: String,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl RetireDataProductReleaseOptions {
    pub fn new(data_product_id: impl Into<String>, release_id: impl Into<String>) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            release_id: release_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.release_id, "release_id")
    }
}

/// Options for `get_release_contract_terms_document`
#[derive(Debug, Clone, Default)]
pub struct GetReleaseContractTermsDocumentOptions {
    pub data_product_id: String,
    pub release_id: String,
    pub contract_terms_id: String,
    pub document_id: String,
    pub headers: StringMap,
    pub timeout: Option<Duration>,
}

impl GetReleaseContractTermsDocumentOptions {
    pub fn new(
        data_product_id: impl Into<String>,
        release_id: impl Into<String>,
        contract_terms_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            data_product_id: data_product_id.into(),
            release_id: release_id.into(),
            contract_terms_id: contract_terms_id.into(),
            document_id: document_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.data_product_id, "data_product_id")?;
        require(&self.release_id, "release_id")?;
        require(&self.contract_terms_id, "contract_terms_id")?;
        require(&self.document_id, "document_id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(GetDataProductOptions::new("").validate(), "data_product_id" ; "get data product")]
    #[test_case(GetDataProductDraftOptions::new("p1", " ").validate(), "draft_id" ; "get draft blank id")]
    #[test_case(CreateDataProductOptions::new(vec![]).validate(), "drafts" ; "create data product without drafts")]
    #[test_case(CreateDataProductDraftOptions::new("p1", DataProductDraftPrototype::default()).validate(), "asset.container.id" ; "create draft without container")]
    #[test_case(UpdateDataProductDraftOptions::new("p1", "d1", vec![]).validate(), "json_patch_instructions" ; "update draft without patch")]
    #[test_case(GetReleaseContractTermsDocumentOptions::new("p1", "r1", "ct1", "").validate(), "document_id" ; "release document without id")]
    #[test_case(CreateDraftContractTermsDocumentOptions::new("p1", "d1", "ct1", ContractTermsDocumentType::Terms, "").validate(), "name" ; "document without name")]
    #[test_case(PagedOptions::validate(&ListDataProductReleasesOptions::new("")), "data_product_id" ; "list releases")]
    #[test_case(PagedOptions::validate(&ListDataProductDraftsOptions::new("")), "data_product_id" ; "list drafts")]
    fn test_missing_required_field(result: Result<()>, expected: &str) {
        match result {
            Err(Error::MissingRequiredField { field }) => assert_eq!(field, expected),
            other => panic!("Expected missing field '{expected}', got {other:?}"),
        }
    }

    #[test]
    fn test_valid_options() {
        assert!(GetDataProductOptions::new("p1").validate().is_ok());
        assert!(InitializeOptions::new().validate().is_ok());
        assert!(PagedOptions::validate(&ListDataProductsOptions::new()).is_ok());
        assert!(
            CreateDataProductOptions::new(vec![DataProductDraftPrototype::new("c1")])
                .validate()
                .is_ok()
        );
        assert!(InitializeOptions::new()
            .container(ContainerReference::new(""))
            .validate()
            .is_err());
    }

    #[test]
    fn test_builders() {
        let opts = ListDataProductReleasesOptions::new("p1")
            .asset_container_id("c1")
            .state(State::Available)
            .state(State::Retired)
            .version("1.0.0")
            .limit(10)
            .start("abc")
            .header("X-Trace", "t1")
            .timeout(Duration::from_secs(3));

        assert_eq!(opts.state_query().as_deref(), Some("available,retired"));
        assert_eq!(opts.limit, Some(10));
        assert_eq!(opts.start.as_deref(), Some("abc"));
        assert_eq!(opts.headers.get("X-Trace"), Some(&"t1".to_string()));
        assert_eq!(opts.timeout, Some(Duration::from_secs(3)));

        assert_eq!(ListDataProductReleasesOptions::new("p1").state_query(), None);
    }

    #[test]
    fn test_set_start() {
        let mut opts = ListDataProductsOptions::new().start("abc");
        opts.set_start(None);
        assert_eq!(opts.start, None);
        opts.set_start(Some("next".to_string()));
        assert_eq!(opts.start.as_deref(), Some("next"));
    }
}
