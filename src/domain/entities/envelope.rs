use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::profile::Profile;

/// `{ success, data, count? }` wrapper used by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileList {
    pub success: bool,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub data: Vec<Profile>,
}

/// Reply of aggregate endpoints where only the count is of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateCount {
    pub success: bool,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

/// Failure body; only `message` is read.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_ignores_payload() {
        let body = r#"{"success": true, "count": 7, "data": [{"title": "x"}]}"#;
        let parsed: AggregateCount = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.count, 7);
    }

    #[test]
    fn health_keeps_extra_fields() {
        let parsed: HealthStatus =
            serde_json::from_str(r#"{"status": "OK", "uptime": 12.5}"#).unwrap();
        assert_eq!(parsed.status, "OK");
        assert!(parsed.details.contains_key("uptime"));
    }
}
