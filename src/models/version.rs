//! Data product version models (drafts and releases)
//!
//! Drafts and releases share one shape on the wire. The aliases keep call
//! sites readable.

use super::common::{
    AssetPrototype, AssetReference, ContractTerms, DataProductReference, Domain, FirstPage,
    NextPage,
};
use crate::pagination::PagedResponse;
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a data product version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Draft,
    Available,
    Retired,
}

impl State {
    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Available => "available",
            Self::Retired => "retired",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Version as listed in a draft or release collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataProductVersionSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_product: Option<DataProductReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

/// Draft as listed in a collection
pub type DataProductDraftSummary = DataProductVersionSummary;

/// Release as listed in a collection
pub type DataProductReleaseSummary = DataProductVersionSummary;

/// Full data product version
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataProductVersion {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_product: Option<DataProductReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts_out: Vec<JsonValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contract_terms: Vec<ContractTerms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Full draft
pub type DataProductDraft = DataProductVersion;

/// Full release
pub type DataProductRelease = DataProductVersion;

/// Body for creating a draft (and the drafts of a new data product)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataProductDraftPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_product: Option<DataProductReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub asset: AssetPrototype,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<JsonValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contract_terms: Vec<ContractTerms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts_out: Vec<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_restricted: Option<bool>,
}

impl DataProductDraftPrototype {
    /// Minimal draft placed in the given container
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            asset: AssetPrototype::in_container(container_id),
            ..Default::default()
        }
    }

    /// Set the name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the version string
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// One page of drafts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataProductDraftCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<FirstPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NextPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub drafts: Vec<DataProductDraftSummary>,
}

impl PagedResponse for DataProductDraftCollection {
    type Item = DataProductDraftSummary;

    fn next_start(&self) -> Option<&str> {
        self.next.as_ref().and_then(|n| n.start.as_deref())
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.drafts
    }
}

/// One page of releases
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataProductReleaseCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<FirstPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NextPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub releases: Vec<DataProductReleaseSummary>,
}

impl PagedResponse for DataProductReleaseCollection {
    type Item = DataProductReleaseSummary;

    fn next_start(&self) -> Option<&str> {
        self.next.as_ref().and_then(|n| n.start.as_deref())
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.releases
    }
}
