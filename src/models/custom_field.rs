//! Custom field definitions and values.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Definition of a user-defined field on a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CustomFieldDefinition {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Unique id assigned by the server
    pub custom_field_definition_id: Option<Uuid>,
    /// Table the field applies to
    pub table_key: Option<String>,
    /// App enrollment that created this record
    pub app_id: Option<Uuid>,
    /// Field label
    pub custom_field_label: Option<String>,
    /// `String`, `Number` or `Date`
    pub data_type: Option<String>,
    /// Display order
    pub sort_order: Option<i32>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
    /// User that last modified the record
    pub modified_user_id: Option<Uuid>,
}

/// The value of a custom field on one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CustomFieldValue {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Field definition
    pub custom_field_definition_id: Option<Uuid>,
    /// Record the value belongs to
    pub record_key: Option<Uuid>,
    /// String value
    pub string_value: Option<String>,
    /// Numeric value
    pub numeric_value: Option<Decimal>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
    /// User that last modified the record
    pub modified_user_id: Option<Uuid>,
    /// App enrollment that created this record
    pub app_enrollment_id: Option<Uuid>,
    /// The definition, when requested with `include=CustomFieldDefinition`
    pub custom_field_definition: Option<CustomFieldDefinition>,
}
