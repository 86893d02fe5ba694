//! File attachment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A file attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Attachment {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Unique id assigned by the server
    pub attachment_id: Option<Uuid>,
    /// Table of the record the file is attached to, e.g. `Invoices`
    pub table_key: Option<String>,
    /// Id of the record the file is attached to
    pub object_key: Option<Uuid>,
    /// Original file name
    pub file_name: Option<String>,
    /// File extension
    pub file_ext: Option<String>,
    /// Attachment category
    pub attachment_type_id: Option<Uuid>,
    /// Whether the attachment is archived
    pub is_archived: Option<bool>,
    /// Server-side original file id
    pub original_file_id: Option<Uuid>,
    /// Whether the attachment is visible to customers
    pub view_internal_only: Option<bool>,
    /// Key in the originating system
    pub erp_key: Option<String>,
    /// App enrollment that created this record
    pub app_enrollment_id: Option<Uuid>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Attachment type name
    pub attachment_type: Option<String>,
}

/// A temporary download link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Uri {
    /// Absolute URL; usually expires after a short time
    pub download_link: Option<String>,
}
