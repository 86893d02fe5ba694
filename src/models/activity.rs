//! Activity (task / work item) models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attachment::Attachment;
use super::company::Company;
use super::custom_field::{CustomFieldDefinition, CustomFieldValue};
use super::note::Note;

/// A unit of collections work, e.g. a follow-up call or a dispute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Activity {
    /// Unique id assigned by the server
    pub activity_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Company the activity concerns
    pub company_id: Option<Uuid>,
    /// Type, e.g. `Email`, `Call`, `Dispute`
    pub activity_type_code: Option<String>,
    /// Short name
    pub activity_name: Option<String>,
    /// Longer description
    pub activity_description: Option<String>,
    /// `Open`, `Closed`, ...
    pub activity_status: Option<String>,
    /// Whether the activity is open
    pub is_open: Option<bool>,
    /// `Low`, `Normal`, `High`
    pub priority: Option<String>,
    /// User assigned to the activity
    pub user_assigned_to: Option<Uuid>,
    /// When the activity was assigned
    pub date_assigned: Option<DateTime<Utc>>,
    /// When the activity was closed
    pub date_closed: Option<DateTime<Utc>>,
    /// Snooze until this date
    pub snooze_until_date: Option<NaiveDate>,
    /// Amount collected through this activity
    pub amount_collected: Option<Decimal>,
    /// Amount paid
    pub amount_paid: Option<Decimal>,
    /// Credit given
    pub credit_given: Option<Decimal>,
    /// Whether the activity was read
    pub is_unread: Option<bool>,
    /// Whether the activity is archived
    pub is_archived: Option<bool>,
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
    /// Company, when requested with `include=Company`
    pub company: Option<Company>,
    /// Notes, when requested with `include=Notes`
    pub notes: Option<Vec<Note>>,
    /// Attachments, when requested with `include=Attachments`
    pub attachments: Option<Vec<Attachment>>,
    /// Custom field definitions, when requested with `include=CustomFields`
    pub custom_field_definitions: Option<Vec<CustomFieldDefinition>>,
    /// Custom field values, when requested with `include=CustomFields`
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// One entry in the timeline of an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ActivityStreamItem {
    /// Id of the underlying record
    pub object_key: Option<Uuid>,
    /// Kind of record, e.g. `Email` or `Note`
    pub activity_stream_type: Option<String>,
    /// Text of the item
    pub text_value: Option<String>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the item
    pub created_user_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Sender, for email items
    pub from_email_address: Option<String>,
    /// Recipient, for email items
    pub to_email_address: Option<String>,
    /// Sender name
    pub from_contact_name: Option<String>,
    /// Recipient name
    pub to_contact_name: Option<String>,
}
