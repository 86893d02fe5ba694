//! Company and contact models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attachment::Attachment;
use super::custom_field::{CustomFieldDefinition, CustomFieldValue};
use super::invoice::Invoice;
use super::note::Note;
use super::payment::Payment;

/// A customer, vendor, or the group's own company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Company {
    /// Unique id assigned by the server
    pub company_id: Option<Uuid>,
    /// Display name of the company
    pub company_name: Option<String>,
    /// Key of this company in the originating ERP or accounting system
    pub erp_key: Option<String>,
    /// `Customer`, `Vendor`, `Group` or `Companyprivate`
    pub company_type: Option<String>,
    /// Status reported by the originating system
    pub company_status: Option<String>,
    /// Parent company, when part of a hierarchy
    pub parent_company_id: Option<Uuid>,
    /// Top of the company hierarchy
    pub enterprise_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Whether the company is active
    pub is_active: Option<bool>,
    /// Default currency code
    pub default_currency_code: Option<String>,
    /// URL of the company logo
    pub company_logo_url: Option<String>,
    /// Primary contact for this company
    pub primary_contact_id: Option<Uuid>,
    /// Address line 1
    pub address1: Option<String>,
    /// Address line 2
    pub address2: Option<String>,
    /// Address line 3
    pub address3: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or region
    pub state_region: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// Main phone number
    pub phone_number: Option<String>,
    /// Main fax number
    pub fax_number: Option<String>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
    /// User that last modified the record
    pub modified_user_id: Option<Uuid>,
    /// Name of the user that last modified the record
    pub modified_user_name: Option<String>,
    /// Federal tax id
    pub tax_id: Option<String>,
    /// Dun & Bradstreet number
    pub duns_number: Option<String>,
    /// Accounts payable email address
    pub ap_email_address: Option<String>,
    /// Accounts receivable email address
    pub ar_email_address: Option<String>,
    /// Preferred delivery method for invoices
    pub preferred_delivery_method: Option<String>,
    /// Domain name, used for enrichment
    pub domain_name: Option<String>,
    /// App enrollment that created this record
    pub app_enrollment_id: Option<Uuid>,
    /// Notes, when requested with `include=Notes`
    pub notes: Option<Vec<Note>>,
    /// Attachments, when requested with `include=Attachments`
    pub attachments: Option<Vec<Attachment>>,
    /// Contacts, when requested with `include=Contacts`
    pub contacts: Option<Vec<Contact>>,
    /// Invoices, when requested with `include=Invoices`
    pub invoices: Option<Vec<Invoice>>,
    /// Custom field definitions, when requested with `include=CustomFields`
    pub custom_field_definitions: Option<Vec<CustomFieldDefinition>>,
    /// Custom field values, when requested with `include=CustomFields`
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// A person associated with a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Contact {
    /// Unique id assigned by the server
    pub contact_id: Option<Uuid>,
    /// Company this contact belongs to
    pub company_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Key in the originating system
    pub erp_key: Option<String>,
    /// Full name
    pub contact_name: Option<String>,
    /// Contact code
    pub contact_code: Option<String>,
    /// Job title
    pub title: Option<String>,
    /// Role within the company
    pub role_code: Option<String>,
    /// Email address
    pub email_address: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Fax number
    pub fax: Option<String>,
    /// Address line 1
    pub address1: Option<String>,
    /// Address line 2
    pub address2: Option<String>,
    /// Address line 3
    pub address3: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or region
    pub state_region: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
    /// Country code
    pub country_code: Option<String>,
    /// Whether the contact is active
    pub is_active: Option<bool>,
    /// Website
    pub webpage_url: Option<String>,
    /// Profile picture
    pub picture_url: Option<String>,
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
    /// Custom field values, when requested with `include=CustomFields`
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// Aggregated receivables figures for one customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CustomerSummary {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// The customer
    pub company_id: Option<Uuid>,
    /// Customer name
    pub company_name: Option<String>,
    /// Primary contact name
    pub primary_contact: Option<String>,
    /// Number of open invoices
    pub outstanding_invoices: Option<i32>,
    /// Number of invoices past due
    pub total_invoices_past_due: Option<i32>,
    /// Number of open invoices
    pub total_invoices_open: Option<i32>,
    /// Sum of open invoice balances
    pub outstanding_amount: Option<Decimal>,
    /// Sum of unapplied payments
    pub amount_collected: Option<Decimal>,
    /// Total amount past due
    pub amount_past_due: Option<Decimal>,
    /// Unapplied credits
    pub unapplied_credits: Option<Decimal>,
    /// Percentage of balance that is past due
    pub percent_of_total_ar: Option<Decimal>,
    /// Days sales outstanding
    pub dso: Option<Decimal>,
    /// Date of the newest invoice
    pub newest_activity: Option<NaiveDate>,
    /// Date of the oldest open invoice
    pub oldest_invoice_date: Option<NaiveDate>,
    /// Percent of invoices paid on time
    pub percent_paid_on_time: Option<Decimal>,
}

/// A customer with its address and payment history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CustomerDetails {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// The customer
    pub customer_id: Option<Uuid>,
    /// Customer name
    pub name: Option<String>,
    /// Address line 1
    pub address1: Option<String>,
    /// Address line 2
    pub address2: Option<String>,
    /// Address line 3
    pub address3: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or region
    pub state: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// Main phone number
    pub phone_number: Option<String>,
    /// Main fax number
    pub fax_number: Option<String>,
    /// Sum of open invoice balances
    pub outstanding: Option<Decimal>,
    /// Accounts receivable email address
    pub ar_email_address: Option<String>,
    /// Primary contact email address
    pub primary_contact_email_address: Option<String>,
    /// Payments received from this customer
    pub payments: Option<Vec<Payment>>,
}
