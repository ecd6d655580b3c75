//! Shared model types

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// Catalog or project that holds an asset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerReference {
    /// Container identifier
    pub id: String,
    /// Container type (`catalog` or `project`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub container_type: Option<String>,
}

impl ContainerReference {
    /// Reference to a container by id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            container_type: None,
        }
    }
}

/// Reference to an asset inside a container
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub container: ContainerReference,
}

/// Asset placement for a new draft
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub container: ContainerReference,
}

impl AssetPrototype {
    /// Asset placed in the given container
    pub fn in_container(container_id: impl Into<String>) -> Self {
        Self {
            id: None,
            container: ContainerReference::new(container_id),
        }
    }
}

/// Reference to a release
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReleaseReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Reference to the data product a version belongs to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataProductReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<ReleaseReference>,
    pub container: ContainerReference,
}

/// Link to the first page of a collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FirstPage {
    pub href: String,
}

/// Link and cursor for the next page of a collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NextPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Opaque cursor to pass as `start`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// Business domain of a data product
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerReference>,
}

/// Kind of contract terms document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractTermsDocumentType {
    /// Hosted elsewhere, referenced by URL
    Terms,
    /// Uploaded file
    Sla,
}

/// A document attached to contract terms
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContractTermsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<ContractTermsDocumentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,
}

/// Contract terms bound to a data product version
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContractTerms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<ContractTermsDocument>,
}

/// JSON Patch operation kind (RFC 6902)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// One JSON Patch instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    pub op: PatchOp,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,
}

impl JsonPatchOperation {
    /// `replace` instruction
    pub fn replace(path: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            from: None,
            value: Some(value.into()),
        }
    }

    /// `add` instruction
    pub fn add(path: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self {
            op: PatchOp::Add,
            path: path.into(),
            from: None,
            value: Some(value.into()),
        }
    }

    /// `remove` instruction
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            from: None,
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_serialization() {
        let patch = vec![
            JsonPatchOperation::replace("/description", "Updated"),
            JsonPatchOperation::remove("/tags/0"),
        ];
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!([
                {"op": "replace", "path": "/description", "value": "Updated"},
                {"op": "remove", "path": "/tags/0"}
            ])
        );
    }

    #[test]
    fn test_container_type_rename() {
        let container: ContainerReference =
            serde_json::from_value(json!({"id": "c1", "type": "catalog"})).unwrap();
        assert_eq!(container.container_type.as_deref(), Some("catalog"));

        let out = serde_json::to_value(ContainerReference::new("c2")).unwrap();
        assert_eq!(out, json!({"id": "c2"}));
    }
}
