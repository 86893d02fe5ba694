//! Invoice models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attachment::Attachment;
use super::company::{Company, Contact};
use super::custom_field::{CustomFieldDefinition, CustomFieldValue};
use super::note::Note;
use super::payment::CreditMemoApplied;

/// An invoice, credit memo or other receivable document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Invoice {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Unique id assigned by the server
    pub invoice_id: Option<Uuid>,
    /// Company that issued the invoice
    pub company_id: Option<Uuid>,
    /// Customer being billed
    pub customer_id: Option<Uuid>,
    /// Key in the originating system
    pub erp_key: Option<String>,
    /// Purchase order code
    pub purchase_order_code: Option<String>,
    /// Reference code printed on the invoice
    pub reference_code: Option<String>,
    /// Salesperson code
    pub salesperson_code: Option<String>,
    /// Salesperson name
    pub salesperson_name: Option<String>,
    /// Document type, e.g. `Invoice` or `Credit Memo`
    pub invoice_type_code: Option<String>,
    /// Status, e.g. `Open`, `Closed`, `Voided`
    pub invoice_status_code: Option<String>,
    /// Payment terms code
    pub terms_code: Option<String>,
    /// Special terms
    pub special_terms: Option<String>,
    /// Currency of the invoice
    pub currency_code: Option<String>,
    /// Total amount
    pub total_amount: Option<Decimal>,
    /// Sales tax amount
    pub sales_tax_amount: Option<Decimal>,
    /// Discount amount
    pub discount_amount: Option<Decimal>,
    /// Remaining balance
    pub outstanding_balance_amount: Option<Decimal>,
    /// Date the invoice was issued
    pub invoice_date: Option<NaiveDate>,
    /// Discount deadline
    pub discount_date: Option<NaiveDate>,
    /// Posting date
    pub posted_date: Option<NaiveDate>,
    /// Date the invoice was closed
    pub invoice_closed_date: Option<NaiveDate>,
    /// Payment due date
    pub payment_due_date: Option<NaiveDate>,
    /// Import time
    pub imported_date: Option<DateTime<Utc>>,
    /// Primary origin address
    pub primary_origin_address_id: Option<Uuid>,
    /// Primary billing address
    pub primary_bill_to_address_id: Option<Uuid>,
    /// Primary shipping address
    pub primary_ship_to_address_id: Option<Uuid>,
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
    /// Whether the invoice is voided
    pub is_voided: Option<bool>,
    /// Whether the invoice is in dispute
    pub in_dispute: Option<bool>,
    /// Whether the invoice was excluded from aging
    pub exclude_from_aging: Option<bool>,
    /// Addresses, when requested with `include=Addresses`
    pub addresses: Option<Vec<InvoiceAddress>>,
    /// Lines, when requested with `include=Lines`
    pub lines: Option<Vec<InvoiceLine>>,
    /// Applied payments, when requested with `include=Payments`
    pub payments: Option<Vec<InvoicePaymentDetail>>,
    /// Notes, when requested with `include=Notes`
    pub notes: Option<Vec<Note>>,
    /// Attachments, when requested with `include=Attachments`
    pub attachments: Option<Vec<Attachment>>,
    /// Issuing company, when requested with `include=Company`
    pub company: Option<Company>,
    /// Customer, when requested with `include=Customer`
    pub customer: Option<Company>,
    /// Customer's primary contact, when requested with `include=Customer`
    pub customer_primary_contact: Option<Contact>,
    /// Credit memos applied, when requested with `include=CreditMemos`
    pub credit_memos: Option<Vec<CreditMemoApplied>>,
    /// Custom field definitions, when requested with `include=CustomFields`
    pub custom_field_definitions: Option<Vec<CustomFieldDefinition>>,
    /// Custom field values, when requested with `include=CustomFields`
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// One line item on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct InvoiceLine {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Unique id assigned by the server
    pub invoice_line_id: Option<Uuid>,
    /// Invoice this line belongs to
    pub invoice_id: Option<Uuid>,
    /// Key in the originating system
    pub erp_key: Option<String>,
    /// Line number
    pub line_number: Option<String>,
    /// Item code
    pub item_code: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Unit of measure
    pub unit_measure_code: Option<String>,
    /// Price per unit
    pub unit_price: Option<Decimal>,
    /// Quantity billed
    pub quantity: Option<Decimal>,
    /// Quantity shipped
    pub quantity_shipped: Option<Decimal>,
    /// Quantity received
    pub quantity_received: Option<Decimal>,
    /// Line total
    pub total_amount: Option<Decimal>,
    /// Exemption code
    pub exemption_code: Option<String>,
    /// Date the line was reported
    pub reporting_date: Option<NaiveDate>,
    /// Origin address override
    pub override_origin_address_id: Option<Uuid>,
    /// Billing address override
    pub override_bill_to_address_id: Option<Uuid>,
    /// Shipping address override
    pub override_ship_to_address_id: Option<Uuid>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
    /// App enrollment that created this record
    pub app_enrollment_id: Option<Uuid>,
}

/// An address printed on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct InvoiceAddress {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Unique id assigned by the server
    pub invoice_address_id: Option<Uuid>,
    /// Invoice this address belongs to
    pub invoice_id: Option<Uuid>,
    /// Address line 1
    pub line1: Option<String>,
    /// Address line 2
    pub line2: Option<String>,
    /// Address line 3
    pub line3: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or region
    pub region: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// Latitude
    pub latitude: Option<Decimal>,
    /// Longitude
    pub longitude: Option<Decimal>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
}

/// A payment applied to an invoice, as embedded in [`Invoice::payments`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct InvoicePaymentDetail {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// The payment application
    pub payment_applied_id: Option<Uuid>,
    /// The invoice
    pub invoice_id: Option<Uuid>,
    /// The payment
    pub payment_id: Option<Uuid>,
    /// Date the payment was applied
    pub apply_to_invoice_date: Option<NaiveDate>,
    /// Amount applied
    pub payment_applied_amount: Option<Decimal>,
    /// Reference code of the payment
    pub reference_code: Option<String>,
    /// Company that made the payment
    pub company_id: Option<Uuid>,
    /// Total payment amount
    pub payment_amount: Option<Decimal>,
    /// Unapplied remainder of the payment
    pub unapplied_amount: Option<Decimal>,
}

/// Aggregated view of an invoice for listing screens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct InvoiceSummary {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Customer being billed
    pub customer_id: Option<Uuid>,
    /// The invoice
    pub invoice_id: Option<Uuid>,
    /// Invoice number
    pub invoice_number: Option<String>,
    /// Date the invoice was issued
    pub invoice_date: Option<NaiveDate>,
    /// Customer name
    pub customer_name: Option<String>,
    /// Status
    pub status: Option<String>,
    /// Payment due date
    pub payment_due_date: Option<NaiveDate>,
    /// Total amount
    pub invoice_amount: Option<Decimal>,
    /// Remaining balance
    pub outstanding_balance: Option<Decimal>,
    /// Document type
    pub invoice_type_code: Option<String>,
    /// Date of the newest activity
    pub newest_activity: Option<NaiveDate>,
    /// Days past the due date
    pub days_past_due: Option<i32>,
    /// Payment numbers applied
    pub payment_numbers: Option<Vec<String>>,
    /// Payments applied
    pub payment_ids: Option<Vec<Uuid>>,
}

/// A snapshot of an invoice recorded each time it changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct InvoiceHistory {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Unique id of this snapshot
    pub invoice_history_id: Option<Uuid>,
    /// The invoice
    pub invoice_id: Option<Uuid>,
    /// Company that issued the invoice
    pub company_id: Option<Uuid>,
    /// Customer being billed
    pub customer_id: Option<Uuid>,
    /// Key in the originating system
    pub erp_key: Option<String>,
    /// Document type
    pub invoice_type_code: Option<String>,
    /// Status at the time of the snapshot
    pub invoice_status_code: Option<String>,
    /// Currency of the invoice
    pub currency_code: Option<String>,
    /// Total amount
    pub total_amount: Option<Decimal>,
    /// Remaining balance
    pub outstanding_balance_amount: Option<Decimal>,
    /// Date the invoice was issued
    pub invoice_date: Option<NaiveDate>,
    /// Payment due date
    pub payment_due_date: Option<NaiveDate>,
    /// Creation time of the snapshot
    pub created: Option<DateTime<Utc>>,
    /// User that caused the change
    pub created_user_id: Option<Uuid>,
}
