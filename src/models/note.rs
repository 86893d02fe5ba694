//! Notes attached to other records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-text note attached to any record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Note {
    /// Unique id assigned by the server
    pub note_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Table of the record the note is attached to, e.g. `Invoices`
    pub table_key: Option<String>,
    /// Id of the record the note is attached to
    pub object_key: Option<Uuid>,
    /// Note text
    pub note_text: Option<String>,
    /// Note category
    pub note_type: Option<String>,
    /// Whether the note is archived
    pub is_archived: Option<bool>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Name of the user that created the record
    pub created_user_name: Option<String>,
    /// Name of the person the note is about
    pub recipient_name: Option<String>,
    /// App enrollment that created this record
    pub app_enrollment_id: Option<Uuid>,
}
