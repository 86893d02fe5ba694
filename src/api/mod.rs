//! API service modules for Platform API resources.
//!
//! Each service wraps one resource group. Methods substitute ids into a
//! fixed path, assemble query parameters from their optional arguments and
//! hand the request to the shared transport. The resulting
//! [`ApiResponse`](crate::ApiResponse) is returned unchanged: no retries,
//! no pagination, no validation.

mod resource;

mod activities;
mod api_keys;
mod app_enrollments;
mod applications;
mod attachments;
mod code_definitions;
mod companies;
mod contacts;
mod credit_memos_applied;
mod currencies;
mod custom_field_definitions;
mod custom_field_values;
mod definitions;
mod emails;
mod invoice_history;
mod invoices;
mod leads;
mod notes;
mod payments;
mod payments_applied;
mod provisioning;
mod reports;
mod status;
mod sync;
mod user_accounts;
mod user_roles;
mod webhooks;

pub use resource::{QueryOptions, RetrieveOptions};
pub(crate) use resource::{crud_operations, Endpoint, Resource};

pub use activities::ActivitiesService;
pub use api_keys::ApiKeysService;
pub use app_enrollments::AppEnrollmentsService;
pub use applications::ApplicationsService;
pub use attachments::AttachmentsService;
pub use code_definitions::CodeDefinitionsService;
pub use companies::CompaniesService;
pub use contacts::ContactsService;
pub use credit_memos_applied::CreditMemosAppliedService;
pub use currencies::CurrenciesService;
pub use custom_field_definitions::CustomFieldDefinitionsService;
pub use custom_field_values::CustomFieldValuesService;
pub use definitions::DefinitionsService;
pub use emails::EmailsService;
pub use invoice_history::InvoiceHistoryService;
pub use invoices::InvoicesService;
pub use leads::LeadsService;
pub use notes::NotesService;
pub use payments::PaymentsService;
pub use payments_applied::PaymentsAppliedService;
pub use provisioning::ProvisioningService;
pub use reports::ReportsService;
pub use status::StatusService;
pub use sync::SyncService;
pub use user_accounts::UserAccountsService;
pub use user_roles::UserRolesService;
pub use webhooks::WebhooksService;
