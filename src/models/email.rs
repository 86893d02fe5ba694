//! Email models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attachment::Attachment;
use super::custom_field::{CustomFieldDefinition, CustomFieldValue};
use super::note::Note;

/// An email sent or received about a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Email {
    /// Unique id assigned by the server
    pub email_id: Option<Uuid>,
    /// Conversation thread
    pub thread_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Company the email concerns
    pub company_id: Option<Uuid>,
    /// Sender address
    pub email_from: Option<String>,
    /// Recipient addresses
    pub email_to: Option<String>,
    /// CC addresses
    pub email_cc: Option<String>,
    /// Subject line
    pub email_subject: Option<String>,
    /// Body
    pub email_body: Option<String>,
    /// When the email was sent
    pub sent_date: Option<DateTime<Utc>>,
    /// Whether the email has not been read
    pub is_unread: Option<bool>,
    /// Whether the email has high priority
    pub is_priority: Option<bool>,
    /// Whether the email is flagged as spam
    pub is_spam: Option<bool>,
    /// Whether the email needs a reply
    pub to_be_sent: Option<bool>,
    /// Email this one replies to
    pub response_origin_id: Option<Uuid>,
    /// Key in the originating system
    pub external_email_id: Option<String>,
    /// Thread id in the originating system
    pub external_thread_id: Option<String>,
    /// Tracking id for open receipts
    pub receiver_id: Option<Uuid>,
    /// When the recipient opened the email
    pub opened_date: Option<DateTime<Utc>>,
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
    /// Notes, when requested with `include=Notes`
    pub notes: Option<Vec<Note>>,
    /// Attachments, when requested with `include=Attachments`
    pub attachments: Option<Vec<Attachment>>,
    /// Custom field definitions, when requested with `include=CustomFields`
    pub custom_field_definitions: Option<Vec<CustomFieldDefinition>>,
    /// Custom field values, when requested with `include=CustomFields`
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}
