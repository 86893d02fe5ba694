//! Lead capture and account provisioning models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::application::AppEnrollment;
use super::company::Company;
use super::user::UserAccount;

/// A prospective customer signing up for the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Lead {
    /// Unique id assigned by the server
    pub lead_id: Option<Uuid>,
    /// Name of the person
    pub name: Option<String>,
    /// Company name
    pub company: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// ERP the prospect uses
    pub erp_system: Option<String>,
}

/// Request to provision a new user account and group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Provisioning {
    /// Full name of the user
    pub full_name: Option<String>,
    /// Time zone, e.g. `Pacific Standard Time`
    pub time_zone: Option<String>,
    /// Default currency code
    pub default_currency: Option<String>,
    /// Application to enroll in
    pub erp: Option<ConnectorInfo>,
}

/// Connection details for the ERP chosen during provisioning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ConnectorInfo {
    /// Application id of the connector
    pub app_id: Option<Uuid>,
    /// OAuth authorization code
    pub auth_code: Option<String>,
    /// OAuth redirect URI used to obtain the code
    pub redirect_uri: Option<String>,
    /// Realm or tenant id in the ERP
    pub realm_id: Option<String>,
}

/// Result of provisioning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProvisioningResponse {
    /// The user that was created
    pub user_name: Option<String>,
    /// Group created for the user
    pub group_key: Option<Uuid>,
    /// App enrollment created for the ERP
    pub app_enrollment_id: Option<Uuid>,
    /// Sync request started for the new enrollment
    pub sync_request_id: Option<Uuid>,
    /// Error, when provisioning failed
    pub error_message: Option<String>,
}

/// Request to finish a registration started by provisioning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProvisioningFinalizeRequest {
    /// Group's own company
    pub company: Option<Company>,
    /// The user
    pub full_name: Option<String>,
    /// Time zone
    pub time_zone: Option<String>,
    /// Default currency code
    pub default_currency: Option<String>,
    /// ERP connection details
    pub erp_info: Option<ConnectorInfo>,
}

/// Result of finalizing a registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProvisioningFinalizeResponse {
    /// The user account
    pub user_account: Option<UserAccount>,
    /// The ERP enrollment
    pub app_enrollment: Option<AppEnrollment>,
    /// Group's own company
    pub company: Option<Company>,
}
