//! Data product models

use super::common::{ContainerReference, FirstPage, NextPage, ReleaseReference};
use super::version::DataProductVersionSummary;
use crate::pagination::PagedResponse;
use serde::{Deserialize, Serialize};

/// Data product as listed in a collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataProductSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<ReleaseReference>,
    pub container: ContainerReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Full data product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataProduct {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<ReleaseReference>,
    pub container: ContainerReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_release: Option<DataProductVersionSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drafts: Vec<DataProductVersionSummary>,
}

/// One page of data products
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataProductSummaryCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<FirstPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NextPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub data_products: Vec<DataProductSummary>,
}

impl PagedResponse for DataProductSummaryCollection {
    type Item = DataProductSummary;

    fn next_start(&self) -> Option<&str> {
        self.next.as_ref().and_then(|n| n.start.as_deref())
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.data_products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_with_next() {
        let page: DataProductSummaryCollection = serde_json::from_value(json!({
            "limit": 1,
            "first": {"href": "https://dpx.example.com/v1/data_products?limit=1"},
            "next": {"href": "https://dpx.example.com/v1/data_products?limit=1&start=1", "start": "1"},
            "total_count": 2,
            "data_products": [
                {"id": "b38df608-d34b-4d58-8136-ed25e6c6684e", "release": {"id": "18bdbde1-918e-4ecf-aa23-6727bf319e14"}, "container": {"id": "d29c42eb-7100-4b7a-8257-c196dbcca1cd", "type": "catalog"}, "name": "Sample Data Product"}
            ]
        }))
        .unwrap();

        assert_eq!(page.next_start(), Some("1"));
        assert_eq!(page.total_count, Some(2));
        let items = page.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("Sample Data Product"));
    }

    #[test]
    fn test_collection_without_items_or_next() {
        let page: DataProductSummaryCollection =
            serde_json::from_value(json!({"limit": 10, "total_count": 0})).unwrap();
        assert_eq!(page.next_start(), None);
        assert!(page.into_items().is_empty());
    }

    #[test]
    fn test_next_without_start_ends_paging() {
        let page: DataProductSummaryCollection = serde_json::from_value(json!({
            "next": {"href": "https://dpx.example.com/v1/data_products?limit=1"},
            "data_products": [{"id": "A", "container": {"id": "c1"}}]
        }))
        .unwrap();

        assert!(page.next.is_some());
        assert_eq!(page.next_start(), None);
        assert_eq!(page.into_items().len(), 1);
    }
}
