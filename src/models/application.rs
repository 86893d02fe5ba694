//! Marketplace applications, enrollments, API keys and webhooks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attachment::Attachment;
use super::custom_field::{CustomFieldDefinition, CustomFieldValue};
use super::note::Note;

/// An application published on the platform marketplace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Application {
    /// Unique id assigned by the server
    pub app_id: Option<Uuid>,
    /// Name
    pub name: Option<String>,
    /// Description
    pub description: Option<String>,
    /// `Bank`, `Email`, `ERP`, ...
    pub app_type: Option<String>,
    /// Owner of the application
    pub owner_id: Option<Uuid>,
    /// Project page
    pub project_url: Option<String>,
    /// Icon
    pub icon_url: Option<String>,
    /// Pricing text
    pub price_terms: Option<String>,
    /// Whether the application is active
    pub is_active: Option<bool>,
    /// Wiki page
    pub wiki_url: Option<String>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
    /// User that last modified the record
    pub modified_user_id: Option<Uuid>,
    /// Notes, when requested with `include=Notes`
    pub notes: Option<Vec<Note>>,
    /// Attachments, when requested with `include=Attachments`
    pub attachments: Option<Vec<Attachment>>,
    /// Custom field definitions, when requested with `include=CustomFields`
    pub custom_field_definitions: Option<Vec<CustomFieldDefinition>>,
    /// Custom field values, when requested with `include=CustomFields`
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// An application installed by a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AppEnrollment {
    /// Unique id assigned by the server
    pub app_enrollment_id: Option<Uuid>,
    /// Application installed
    pub app_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Whether the enrollment is active
    pub is_active: Option<bool>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
    /// User that last modified the record
    pub modified_user_id: Option<Uuid>,
    /// Sync schedule as a cron expression
    pub cron_settings: Option<String>,
    /// Whether the sync schedule is enabled
    pub sync_schedule_is_active: Option<bool>,
    /// The application, when requested with `include=App`
    pub app: Option<Application>,
    /// Custom field definitions, when requested with `include=CustomFields`
    pub custom_field_definitions: Option<Vec<CustomFieldDefinition>>,
    /// Custom field values, when requested with `include=CustomFields`
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// A custom field value stored on an app enrollment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AppEnrollmentCustomField {
    /// The app enrollment
    pub app_enrollment_id: Option<Uuid>,
    /// The application
    pub app_id: Option<Uuid>,
    /// The field definition
    pub custom_field_definition_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Field label
    pub custom_field_label: Option<String>,
    /// Data type
    pub data_type: Option<String>,
    /// Display order
    pub sort_order: Option<i32>,
    /// String value
    pub string_value: Option<String>,
    /// Numeric value
    pub numeric_value: Option<rust_decimal::Decimal>,
}

/// An API key issued to the group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ApiKey {
    /// Unique id assigned by the server
    pub api_key_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Name
    pub name: Option<String>,
    /// The key itself; only returned on creation
    pub api_key: Option<String>,
    /// First characters of the key, for identification
    pub key_prefix: Option<String>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Revocation time
    pub revoked: Option<DateTime<Utc>>,
    /// User that revoked the key
    pub revoked_user_id: Option<Uuid>,
    /// Expiry time
    pub expires: Option<DateTime<Utc>>,
}

/// A webhook receiving event notifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Webhook {
    /// Unique id assigned by the server
    pub webhook_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Name
    pub name: Option<String>,
    /// `Active`, `Inactive`, `Errored`
    pub status_code: Option<String>,
    /// Reason for the current status
    pub status_message: Option<String>,
    /// Shared secret used to sign deliveries; only returned on creation
    pub client_secret: Option<String>,
    /// Content type of deliveries, e.g. `application/json`
    pub request_content_type: Option<String>,
    /// HTTP verb used for deliveries
    pub callback_http_method: Option<String>,
    /// Delivery URL
    pub callback_url: Option<String>,
    /// Time after which the webhook stops delivering
    pub expiration_date: Option<DateTime<Utc>>,
    /// Maximum number of retries
    pub retry_count: Option<i32>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
    /// User that last modified the record
    pub modified_user_id: Option<Uuid>,
}
