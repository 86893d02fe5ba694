//! Server status and data sync models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a status ping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Status {
    /// Name of the authenticated user
    pub user_name: Option<String>,
    /// Name of the user's group
    pub account_name: Option<String>,
    /// Id of the authenticated user
    pub user_id: Option<Uuid>,
    /// Group of the authenticated user
    pub group_key: Option<Uuid>,
    /// Whether the credentials were accepted
    pub logged_in: Option<bool>,
    /// Error message, when authentication failed
    pub error_message: Option<String>,
    /// Roles granted to the user
    pub roles: Option<Vec<String>>,
    /// Last time the user logged in
    pub last_logged_in: Option<DateTime<Utc>>,
    /// API key used for this call
    pub api_key_id: Option<Uuid>,
    /// Status of the authenticated user
    pub user_status: Option<String>,
    /// Server environment name
    pub environment: Option<String>,
    /// Server version
    pub version: Option<String>,
    /// Dependency health, keyed by dependency name
    pub dependencies: Option<serde_json::Value>,
}

/// A data sync job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SyncRequest {
    /// Unique id assigned by the server
    pub sync_request_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// `Ready`, `In Progress`, `Cancelled`, `Failed`, `Success`
    pub status_code: Option<String>,
    /// Progress or failure message
    pub process_result_message: Option<String>,
    /// App enrollment being synced
    pub app_enrollment_id: Option<Uuid>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
    /// User that last modified the record
    pub modified_user_id: Option<Uuid>,
    /// Detailed log, when requested with `include=Details`
    pub details: Option<serde_json::Value>,
}

/// Request to start a sync for an app enrollment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SyncSubmit {
    /// App enrollment to sync
    pub app_enrollment_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::client::decode_success;

    #[test]
    fn test_status_dependencies_keep_server_keys() {
        let body = br#"{
            "LoggedIn": true,
            "UserName": "ar@example.com",
            "Dependencies": { "SqlServer": { "IsHealthy": true }, "ServiceBus": "Degraded" }
        }"#;
        let status: Status = decode_success(StatusCode::OK, body).unwrap();
        assert_eq!(status.logged_in, Some(true));
        assert_eq!(
            status.dependencies,
            Some(json!({ "SqlServer": { "IsHealthy": true }, "ServiceBus": "Degraded" }))
        );
    }
}
