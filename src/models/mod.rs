//! Data models for the Platform API.
//!
//! Every model is a plain field container mirroring one server JSON shape.
//! Fields are optional unless the server always sends them; related records
//! appear as nested collections only when requested with `include`.
//! Models serialize as camelCase and deserialize from any key casing the
//! transport normalizes (camelCase, PascalCase, upper-case).
//!
//! - [`primitives`] - Environment selection and result wrappers
//! - [`company`] - Companies, contacts and customer summaries
//! - [`invoice`] - Invoices, lines, addresses and history
//! - [`payment`] - Payments, applications and credit memos
//! - [`activity`], [`email`], [`note`], [`attachment`] - Collections work
//! - [`custom_field`] - User-defined fields
//! - [`reference`] - Code definitions, countries, currencies
//! - [`user`] - User accounts, roles and invitations
//! - [`application`] - Marketplace apps, enrollments, API keys, webhooks
//! - [`onboarding`] - Leads and provisioning
//! - [`report`] - Receivables reports
//! - [`status`] - Server status and sync jobs

pub mod primitives;
pub mod activity;
pub mod application;
pub mod attachment;
pub mod company;
pub mod custom_field;
pub mod email;
pub mod invoice;
pub mod note;
pub mod onboarding;
pub mod payment;
pub mod reference;
pub mod report;
pub mod status;
pub mod user;

// Re-export commonly used types
pub use primitives::*;
pub use activity::*;
pub use application::*;
pub use attachment::*;
pub use company::*;
pub use custom_field::*;
pub use email::*;
pub use invoice::*;
pub use note::*;
pub use onboarding::*;
pub use payment::*;
pub use reference::*;
pub use report::*;
pub use status::*;
pub use user::*;

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use reqwest::StatusCode;
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use serde_json::{json, Map, Value};

    use super::*;
    use crate::client::decode_success;

    /// Candidate field values, tried in order until one decodes.
    fn field_samples() -> Vec<Value> {
        vec![
            json!("2024-01-15T10:30:00Z"),
            json!("2024-01-15"),
            json!("0b6f4e2c-9a51-4d8e-8c1a-3f2d7e9b5a10"),
            json!(1),
            json!(true),
            json!([{}]),
            json!([]),
            json!({}),
        ]
    }

    fn decode<T: DeserializeOwned>(body: &Value) -> Option<T> {
        decode_success(StatusCode::OK, body.to_string().as_bytes()).ok()
    }

    fn pascal_case(body: &Value) -> Value {
        let Value::Object(map) = body else {
            return body.clone();
        };
        let map = map
            .iter()
            .map(|(key, value)| {
                let mut chars = key.chars();
                let key: String = match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                };
                (key, value.clone())
            })
            .collect::<Map<_, _>>();
        Value::Object(map)
    }

    /// Populate every serialized field of `T` and check it survives decoding
    /// from both camelCase and PascalCase keys.
    fn assert_fields_round_trip<T>()
    where
        T: Serialize + DeserializeOwned + Default + PartialEq + Debug,
    {
        let name = std::any::type_name::<T>();
        let empty = serde_json::to_value(T::default()).unwrap();
        let keys: Vec<String> = empty.as_object().unwrap().keys().cloned().collect();
        assert!(!keys.is_empty(), "{name} has no fields");

        let mut populated = Map::new();
        for key in &keys {
            let sample = field_samples()
                .into_iter()
                .find(|sample| {
                    let mut body = Map::new();
                    body.insert(key.clone(), sample.clone());
                    decode::<T>(&Value::Object(body)).is_some_and(|model| model != T::default())
                })
                .unwrap_or_else(|| panic!("{name}.{key} is dropped when decoding"));
            populated.insert(key.clone(), sample);
        }

        let model: T = decode(&Value::Object(populated))
            .unwrap_or_else(|| panic!("{name} rejects a fully populated body"));
        let reserialized = serde_json::to_value(&model).unwrap();
        for key in &keys {
            assert!(!reserialized[key].is_null(), "{name}.{key} lost on round trip");
        }
        assert_eq!(decode::<T>(&reserialized).as_ref(), Some(&model), "{name} camelCase");
        assert_eq!(
            decode::<T>(&pascal_case(&reserialized)).as_ref(),
            Some(&model),
            "{name} PascalCase"
        );
    }

    #[test]
    fn test_customer_models_round_trip() {
        assert_fields_round_trip::<Company>();
        assert_fields_round_trip::<Contact>();
        assert_fields_round_trip::<CustomerSummary>();
        assert_fields_round_trip::<CustomerDetails>();
    }

    #[test]
    fn test_receivable_models_round_trip() {
        assert_fields_round_trip::<Invoice>();
        assert_fields_round_trip::<InvoiceLine>();
        assert_fields_round_trip::<InvoiceAddress>();
        assert_fields_round_trip::<InvoicePaymentDetail>();
        assert_fields_round_trip::<InvoiceSummary>();
        assert_fields_round_trip::<InvoiceHistory>();
        assert_fields_round_trip::<Payment>();
        assert_fields_round_trip::<PaymentApplied>();
        assert_fields_round_trip::<CreditMemoApplied>();
        assert_fields_round_trip::<PaymentSummary>();
    }

    #[test]
    fn test_collection_models_round_trip() {
        assert_fields_round_trip::<Activity>();
        assert_fields_round_trip::<ActivityStreamItem>();
        assert_fields_round_trip::<Attachment>();
        assert_fields_round_trip::<Uri>();
        assert_fields_round_trip::<Email>();
        assert_fields_round_trip::<Note>();
        assert_fields_round_trip::<CustomFieldDefinition>();
        assert_fields_round_trip::<CustomFieldValue>();
    }

    #[test]
    fn test_account_models_round_trip() {
        assert_fields_round_trip::<UserAccount>();
        assert_fields_round_trip::<UserRole>();
        assert_fields_round_trip::<InviteSubmit>();
        assert_fields_round_trip::<Invite>();
        assert_fields_round_trip::<InviteData>();
        assert_fields_round_trip::<TransferOwnerSubmit>();
        assert_fields_round_trip::<TransferOwner>();
        assert_fields_round_trip::<Application>();
        assert_fields_round_trip::<AppEnrollment>();
        assert_fields_round_trip::<AppEnrollmentCustomField>();
        assert_fields_round_trip::<ApiKey>();
        assert_fields_round_trip::<Webhook>();
        assert_fields_round_trip::<Lead>();
        assert_fields_round_trip::<Provisioning>();
        assert_fields_round_trip::<ConnectorInfo>();
        assert_fields_round_trip::<ProvisioningResponse>();
        assert_fields_round_trip::<ProvisioningFinalizeRequest>();
        assert_fields_round_trip::<ProvisioningFinalizeResponse>();
    }

    #[test]
    fn test_reference_and_report_models_round_trip() {
        assert_fields_round_trip::<CodeDefinition>();
        assert_fields_round_trip::<Country>();
        assert_fields_round_trip::<Currency>();
        assert_fields_round_trip::<FinancialSystem>();
        assert_fields_round_trip::<CurrencyRate>();
        assert_fields_round_trip::<BulkCurrencyConversion>();
        assert_fields_round_trip::<CashflowReport>();
        assert_fields_round_trip::<DailySalesOutstandingReport>();
        assert_fields_round_trip::<RiskRate>();
        assert_fields_round_trip::<ArHeaderInfo>();
        assert_fields_round_trip::<Status>();
        assert_fields_round_trip::<SyncRequest>();
        assert_fields_round_trip::<SyncSubmit>();
        assert_fields_round_trip::<DeleteResult>();
        assert_fields_round_trip::<ActionResultModel>();
    }
}
