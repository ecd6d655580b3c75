//! Service initialization models

use super::common::ContainerReference;
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress of a container initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitializeStatus {
    NotStarted,
    InProgress,
    Succeeded,
    Failed,
}

impl InitializeStatus {
    /// True once initialization has finished, successfully or not
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// A resource set up during initialization
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InitializedOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// State of the data product catalog setup
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InitializeResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InitializeStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_finished_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initialized_options: Vec<InitializedOption>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initialize_resource() {
        let resource: InitializeResource = serde_json::from_value(json!({
            "container": {"id": "d29c42eb-7100-4b7a-8257-c196dbcca1cd", "type": "catalog"},
            "href": "https://dpx.example.com/v1/configuration/initialize/status?catalog_id=d29c42eb",
            "status": "in_progress",
            "trace": "4da6a74e-2a9a-4d45-a5a5-6e1f0c6b4e3b",
            "last_started_at": "2023-08-21T15:24:06.021Z",
            "initialized_options": [{"name": "data_product_samples", "version": 1}]
        }))
        .unwrap();

        assert_eq!(resource.status, Some(InitializeStatus::InProgress));
        assert!(!InitializeStatus::InProgress.is_terminal());
        assert!(InitializeStatus::Failed.is_terminal());
        assert!(resource.last_started_at.is_some());
        assert_eq!(resource.initialized_options.len(), 1);
    }
}
