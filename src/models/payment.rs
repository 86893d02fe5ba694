//! Payment and application models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attachment::Attachment;
use super::custom_field::{CustomFieldDefinition, CustomFieldValue};
use super::note::Note;

/// A payment received from a customer or made to a vendor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Payment {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Unique id assigned by the server
    pub payment_id: Option<Uuid>,
    /// Company that made or received the payment
    pub company_id: Option<Uuid>,
    /// Key in the originating system
    pub erp_key: Option<String>,
    /// `Payment`, `AR Payment`, `AP Payment`
    pub payment_type: Option<String>,
    /// `Check`, `ACH`, `Wire`, ...
    pub tender_type: Option<String>,
    /// Whether the payment is fully applied
    pub is_open: Option<bool>,
    /// Free-text memo
    pub memo_text: Option<String>,
    /// Date the payment was made
    pub payment_date: Option<NaiveDate>,
    /// Date the payment was posted
    pub post_date: Option<NaiveDate>,
    /// Total payment amount
    pub payment_amount: Option<Decimal>,
    /// Portion not yet applied to invoices
    pub unapplied_amount: Option<Decimal>,
    /// Currency of the payment
    pub currency_code: Option<String>,
    /// Check number or other reference
    pub reference_code: Option<String>,
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
    /// Whether the payment is voided
    pub is_voided: Option<bool>,
    /// Whether the payment is in dispute
    pub in_dispute: Option<bool>,
    /// Applications to invoices, when requested with `include=Applications`
    pub applications: Option<Vec<PaymentApplied>>,
    /// Notes, when requested with `include=Notes`
    pub notes: Option<Vec<Note>>,
    /// Attachments, when requested with `include=Attachments`
    pub attachments: Option<Vec<Attachment>>,
    /// Custom field definitions, when requested with `include=CustomFields`
    pub custom_field_definitions: Option<Vec<CustomFieldDefinition>>,
    /// Custom field values, when requested with `include=CustomFields`
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// The application of part of a payment to an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PaymentApplied {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Unique id assigned by the server
    pub payment_applied_id: Option<Uuid>,
    /// Invoice receiving the payment
    pub invoice_id: Option<Uuid>,
    /// Payment being applied
    pub payment_id: Option<Uuid>,
    /// Key in the originating system
    pub erp_key: Option<String>,
    /// Reference code
    pub entry_number: Option<i32>,
    /// Date the application took effect
    pub apply_to_invoice_date: Option<NaiveDate>,
    /// Amount applied
    pub payment_applied_amount: Option<Decimal>,
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
}

/// The application of a credit memo to an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CreditMemoApplied {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Unique id assigned by the server
    pub credit_memo_applied_id: Option<Uuid>,
    /// Invoice receiving the credit
    pub invoice_id: Option<Uuid>,
    /// Credit memo being applied (itself an invoice record)
    pub credit_memo_invoice_id: Option<Uuid>,
    /// Key in the originating system
    pub erp_key: Option<String>,
    /// Entry number
    pub entry_number: Option<i32>,
    /// Date the credit took effect
    pub apply_to_invoice_date: Option<NaiveDate>,
    /// Amount applied
    pub credit_memo_applied_amount: Option<Decimal>,
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
    /// Attachments, when requested with `include=Attachments`
    pub attachments: Option<Vec<Attachment>>,
}

/// Aggregated view of a payment for listing screens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PaymentSummary {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// The payment
    pub payment_id: Option<Uuid>,
    /// Customer that made the payment
    pub customer_id: Option<Uuid>,
    /// Customer name
    pub customer_name: Option<String>,
    /// Reference code
    pub reference_code: Option<String>,
    /// Date the payment was made
    pub payment_date: Option<NaiveDate>,
    /// Tender type
    pub tender_type: Option<String>,
    /// Total payment amount
    pub payment_amount: Option<Decimal>,
    /// Unapplied remainder
    pub unapplied_amount: Option<Decimal>,
    /// Number of invoices the payment was applied to
    pub invoice_count: Option<i32>,
    /// Total amount applied
    pub total_payments_applied: Option<Decimal>,
    /// Invoice numbers paid
    pub invoice_list: Option<Vec<String>>,
    /// Invoices paid
    pub invoice_id_list: Option<Vec<Uuid>>,
}
