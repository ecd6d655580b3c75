//! Data Product Exchange service client

use super::options::{
    CreateDataProductDraftOptions, CreateDataProductOptions,
    CreateDraftContractTermsDocumentOptions, DeleteDataProductDraftOptions,
    DeleteDraftContractTermsDocumentOptions, GetDataProductDraftOptions,
    GetDataProductOptions, GetDataProductReleaseOptions, GetDraftContractTermsDocumentOptions,
    GetInitializeStatusOptions, GetReleaseContractTermsDocumentOptions, InitializeOptions,
    ListDataProductDraftsOptions, ListDataProductReleasesOptions, ListDataProductsOptions,
    PublishDataProductDraftOptions, RetireDataProductReleaseOptions,
    UpdateDataProductDraftOptions, UpdateDataProductReleaseOptions,
};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::models::{
    ContractTermsDocument, DataProduct, DataProductDraft, DataProductDraftCollection,
    DataProductRelease, DataProductReleaseCollection, DataProductSummaryCollection,
    InitializeResource,
};
use crate::pagination::{
    DataProductDraftsPager, DataProductReleasesPager, DataProductsPager, ListOperation,
    PagedOptions, Pager,
};
use crate::types::{JsonObject, JsonValue, StringMap};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use tracing::info;

const JSON_PATCH: &str = "application/json-patch+json";

/// Client for the Data Product Exchange REST API.
///
/// Cheap to clone; clones share the connection pool and IAM token cache.
#[derive(Debug, Clone)]
pub struct DataProductExchangeService {
    http: HttpClient,
}

impl DataProductExchangeService {
    /// Create a client from an explicit configuration
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        info!(url = %config.service_url, auth = ?config.auth.auth_type(), "Creating service client");
        Ok(Self {
            http: HttpClient::new(&config)?,
        })
    }

    /// Create a client from `DATA_PRODUCT_EXCHANGE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ServiceConfig::from_env()?)
    }

    /// Base URL of the service
    pub fn service_url(&self) -> &str {
        self.http.base_url().as_str()
    }

    fn call(headers: &StringMap, timeout: Option<Duration>) -> RequestConfig {
        RequestConfig::new().headers(headers).timeout_opt(timeout)
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Start setting up the data product catalog in a container
    pub async fn initialize(&self, options: &InitializeOptions) -> Result<InitializeResource> {
        options.validate()?;

        let mut body = JsonObject::new();
        if let Some(container) = &options.container {
            body.insert("container".to_string(), serde_json::to_value(container)?);
        }
        if !options.include.is_empty() {
            body.insert("include".to_string(), json!(options.include));
        }

        let url = self.http.endpoint(&["configuration", "initialize"])?;
        let config = Self::call(&options.headers, options.timeout).json(JsonValue::Object(body));
        self.http.request_json(Method::POST, url, config).await
    }

    /// Current state of the catalog setup
    pub async fn get_initialize_status(
        &self,
        options: &GetInitializeStatusOptions,
    ) -> Result<InitializeResource> {
        let url = self
            .http
            .endpoint(&["configuration", "initialize", "status"])?;
        let config = Self::call(&options.headers, options.timeout)
            .query_opt("container.id", options.container_id.as_deref());
        self.http.get_json(url, config).await
    }

    // ========================================================================
    // Data products
    // ========================================================================

    /// Fetch one page of data products
    pub async fn list_data_products(
        &self,
        options: &ListDataProductsOptions,
    ) -> Result<DataProductSummaryCollection> {
        PagedOptions::validate(options)?;

        let url = self.http.endpoint(&["data_products"])?;
        let config = Self::call(&options.headers, options.timeout)
            .query_opt("limit", options.limit)
            .query_opt("start", options.start.as_deref());
        self.http.get_json(url, config).await
    }

    /// Create a data product from one initial draft
    pub async fn create_data_product(
        &self,
        options: &CreateDataProductOptions,
    ) -> Result<DataProduct> {
        options.validate()?;

        let url = self.http.endpoint(&["data_products"])?;
        let config = Self::call(&options.headers, options.timeout)
            .json(json!({ "drafts": options.drafts }));
        self.http.request_json(Method::POST, url, config).await
    }

    /// Fetch a data product by id
    pub async fn get_data_product(&self, options: &GetDataProductOptions) -> Result<DataProduct> {
        options.validate()?;

        let url = self
            .http
            .endpoint(&["data_products", &options.data_product_id])?;
        self.http
            .get_json(url, Self::call(&options.headers, options.timeout))
            .await
    }

    // ========================================================================
    // Drafts
    // ========================================================================

    /// Fetch one page of a data product's drafts
    pub async fn list_data_product_drafts(
        &self,
        options: &ListDataProductDraftsOptions,
    ) -> Result<DataProductDraftCollection> {
        PagedOptions::validate(options)?;

        let url = self
            .http
            .endpoint(&["data_products", &options.data_product_id, "drafts"])?;
        let config = Self::call(&options.headers, options.timeout)
            .query_opt("asset.container.id", options.asset_container_id.as_deref())
            .query_opt("version", options.version.as_deref())
            .query_opt("limit", options.limit)
            .query_opt("start", options.start.as_deref());
        self.http.get_json(url, config).await
    }

    /// Create a new draft of an existing data product
    pub async fn create_data_product_draft(
        &self,
        options: &CreateDataProductDraftOptions,
    ) -> Result<DataProductDraft> {
        options.validate()?;

        let url = self
            .http
            .endpoint(&["data_products", &options.data_product_id, "drafts"])?;
        let config = Self::call(&options.headers, options.timeout)
            .json(serde_json::to_value(&options.draft)?);
        self.http.request_json(Method::POST, url, config).await
    }

    /// Fetch a draft by id
    pub async fn get_data_product_draft(
        &self,
        options: &GetDataProductDraftOptions,
    ) -> Result<DataProductDraft> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "drafts",
            &options.draft_id,
        ])?;
        self.http
            .get_json(url, Self::call(&options.headers, options.timeout))
            .await
    }

    /// Apply JSON Patch operations to a draft
    pub async fn update_data_product_draft(
        &self,
        options: &UpdateDataProductDraftOptions,
    ) -> Result<DataProductDraft> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "drafts",
            &options.draft_id,
        ])?;
        let config = Self::call(&options.headers, options.timeout)
            .json(serde_json::to_value(&options.patch)?)
            .content_type(JSON_PATCH);
        self.http.request_json(Method::PATCH, url, config).await
    }

    /// Delete a draft
    pub async fn delete_data_product_draft(
        &self,
        options: &DeleteDataProductDraftOptions,
    ) -> Result<()> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "drafts",
            &options.draft_id,
        ])?;
        self.http
            .request_empty(
                Method::DELETE,
                url,
                Self::call(&options.headers, options.timeout),
            )
            .await
    }

    /// Publish a draft, turning it into the latest release
    pub async fn publish_data_product_draft(
        &self,
        options: &PublishDataProductDraftOptions,
    ) -> Result<DataProductRelease> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "drafts",
            &options.draft_id,
            "publish",
        ])?;
        self.http
            .request_json(
                Method::POST,
                url,
                Self::call(&options.headers, options.timeout),
            )
            .await
    }

    // ========================================================================
    // Contract terms documents
    // ========================================================================

    /// Attach a document to a draft's contract terms
    pub async fn create_draft_contract_terms_document(
        &self,
        options: &CreateDraftContractTermsDocumentOptions,
    ) -> Result<ContractTermsDocument> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "drafts",
            &options.draft_id,
            "contract_terms",
            &options.contract_terms_id,
            "documents",
        ])?;

        let mut body = JsonObject::new();
        body.insert("type".to_string(), serde_json::to_value(options.document_type)?);
        body.insert("name".to_string(), json!(options.name));
        if let Some(id) = &options.id {
            body.insert("id".to_string(), json!(id));
        }
        if let Some(doc_url) = &options.url {
            body.insert("url".to_string(), json!(doc_url));
        }

        let config = Self::call(&options.headers, options.timeout).json(JsonValue::Object(body));
        self.http.request_json(Method::POST, url, config).await
    }

    /// Fetch a document from a draft's contract terms
    pub async fn get_draft_contract_terms_document(
        &self,
        options: &GetDraftContractTermsDocumentOptions,
    ) -> Result<ContractTermsDocument> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "drafts",
            &options.draft_id,
            "contract_terms",
            &options.contract_terms_id,
            "documents",
            &options.document_id,
        ])?;
        self.http
            .get_json(url, Self::call(&options.headers, options.timeout))
            .await
    }

    /// Remove a document from a draft's contract terms
    pub async fn delete_draft_contract_terms_document(
        &self,
        options: &DeleteDraftContractTermsDocumentOptions,
    ) -> Result<()> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "drafts",
            &options.draft_id,
            "contract_terms",
            &options.contract_terms_id,
            "documents",
            &options.document_id,
        ])?;
        self.http
            .request_empty(
                Method::DELETE,
                url,
                Self::call(&options.headers, options.timeout),
            )
            .await
    }

    // ========================================================================
    // Releases
    // ========================================================================

    /// Fetch one page of a data product's releases
    pub async fn list_data_product_releases(
        &self,
        options: &ListDataProductReleasesOptions,
    ) -> Result<DataProductReleaseCollection> {
        PagedOptions::validate(options)?;

        let url = self
            .http
            .endpoint(&["data_products", &options.data_product_id, "releases"])?;
        let config = Self::call(&options.headers, options.timeout)
            .query_opt("asset.container.id", options.asset_container_id.as_deref())
            .query_opt("state", options.state_query())
            .query_opt("version", options.version.as_deref())
            .query_opt("limit", options.limit)
            .query_opt("start", options.start.as_deref());
        self.http.get_json(url, config).await
    }

    /// Fetch a release by id
    pub async fn get_data_product_release(
        &self,
        options: &GetDataProductReleaseOptions,
    ) -> Result<DataProductRelease> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "releases",
            &options.release_id,
        ])?;
        self.http
            .get_json(url, Self::call(&options.headers, options.timeout))
            .await
    }

    /// Apply JSON Patch operations to a release
    pub async fn update_data_product_release(
        &self,
        options: &UpdateDataProductReleaseOptions,
    ) -> Result<DataProductRelease> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "releases",
            &options.release_id,
        ])?;
        let config = Self::call(&options.headers, options.timeout)
            .json(serde_json::to_value(&options.patch)?)
            .content_type(JSON_PATCH);
        self.http.request_json(Method::PATCH, url, config).await
    }

    /// Retire a release so it is no longer offered
    pub async fn retire_data_product_release(
        &self,
        options: &RetireDataProductReleaseOptions,
    ) -> Result<DataProductRelease> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "releases",
            &options.release_id,
            "retire",
        ])?;
        self.http
            .request_json(
                Method::POST,
                url,
                Self::call(&options.headers, options.timeout),
            )
            .await
    }

    /// Fetch a document from a release's contract terms
    pub async fn get_release_contract_terms_document(
        &self,
        options: &GetReleaseContractTermsDocumentOptions,
    ) -> Result<ContractTermsDocument> {
        options.validate()?;

        let url = self.http.endpoint(&[
            "data_products",
            &options.data_product_id,
            "releases",
            &options.release_id,
            "contract_terms",
            &options.contract_terms_id,
            "documents",
            &options.document_id,
        ])?;
        self.http
            .get_json(url, Self::call(&options.headers, options.timeout))
            .await
    }

    // ========================================================================
    // Pagers
    // ========================================================================

    /// Pager over every data product matching `options`
    pub fn data_products_pager(
        &self,
        options: ListDataProductsOptions,
    ) -> Result<DataProductsPager<'_>> {
        Pager::new(self, options)
    }

    /// Pager over every draft matching `options`
    pub fn data_product_drafts_pager(
        &self,
        options: ListDataProductDraftsOptions,
    ) -> Result<DataProductDraftsPager<'_>> {
        Pager::new(self, options)
    }

    /// Pager over every release matching `options`
    pub fn data_product_releases_pager(
        &self,
        options: ListDataProductReleasesOptions,
    ) -> Result<DataProductReleasesPager<'_>> {
        Pager::new(self, options)
    }
}

#[async_trait]
impl ListOperation<ListDataProductsOptions> for DataProductExchangeService {
    type Page = DataProductSummaryCollection;

    async fn list(&self, options: &ListDataProductsOptions) -> Result<Self::Page> {
        self.list_data_products(options).await
    }
}

#[async_trait]
impl ListOperation<ListDataProductDraftsOptions> for DataProductExchangeService {
    type Page = DataProductDraftCollection;

    async fn list(&self, options: &ListDataProductDraftsOptions) -> Result<Self::Page> {
        self.list_data_product_drafts(options).await
    }
}

#[async_trait]
impl ListOperation<ListDataProductReleasesOptions> for DataProductExchangeService {
    type Page = DataProductReleaseCollection;

    async fn list(&self, options: &ListDataProductReleasesOptions) -> Result<Self::Page> {
        self.list_data_product_releases(options).await
    }
}
