//! User account, role and invitation models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attachment::Attachment;
use super::custom_field::{CustomFieldDefinition, CustomFieldValue};
use super::note::Note;

/// A user with access to the group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct UserAccount {
    /// Unique id assigned by the server
    pub user_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Full name
    pub user_name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// `Active`, `Invited`, `Disabled`
    pub status: Option<String>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
    /// User that last modified the record
    pub modified_user_id: Option<Uuid>,
    /// Role assigned to the user
    pub user_role: Option<Uuid>,
    /// When the invitation was sent
    pub invitation_sent: Option<DateTime<Utc>>,
    /// Phone number
    pub phone_number: Option<String>,
    /// Fax number
    pub fax_number: Option<String>,
    /// Job title
    pub title: Option<String>,
    /// Account owner flag
    pub account_owner: Option<bool>,
    /// Default currency code
    pub default_currency_code: Option<String>,
    /// Avatar image
    pub image_url: Option<String>,
    /// Notes, when requested with `include=Notes`
    pub notes: Option<Vec<Note>>,
    /// Attachments, when requested with `include=Attachments`
    pub attachments: Option<Vec<Attachment>>,
    /// Custom field definitions, when requested with `include=CustomFields`
    pub custom_field_definitions: Option<Vec<CustomFieldDefinition>>,
    /// Custom field values, when requested with `include=CustomFields`
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// A role grantable to users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct UserRole {
    /// Unique id assigned by the server
    pub user_role_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Role name
    pub user_role_name: Option<String>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
    /// User that last modified the record
    pub modified_user_id: Option<Uuid>,
}

/// Request to invite a user by email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct InviteSubmit {
    /// Email address to invite
    pub email: Option<String>,
}

/// Result of one invitation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Invite {
    /// Email address invited
    pub email: Option<String>,
    /// Whether the invitation was sent
    pub success: Option<bool>,
    /// The user created or updated by the invitation
    pub invited_user: Option<UserAccount>,
    /// Reason the invitation failed
    pub error_message: Option<String>,
}

/// Information about a pending invitation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct InviteData {
    /// Email address invited
    pub email: Option<String>,
    /// `Invited`, `Active`, ...
    pub user_status: Option<String>,
}

/// Request to hand account ownership to another user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TransferOwnerSubmit {
    /// User that becomes the owner
    pub target_user_id: Option<Uuid>,
}

/// Result of an ownership transfer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TransferOwner {
    /// Previous owner
    pub previous_owner: Option<UserAccount>,
    /// New owner
    pub new_owner: Option<UserAccount>,
}
