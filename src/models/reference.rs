//! Reference data: code definitions, countries, currencies and rates.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A code used by the group, e.g. a payment term or activity type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CodeDefinition {
    /// Unique id assigned by the server
    pub code_definition_id: Option<Uuid>,
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Category, e.g. `AccountType`
    pub code_type: Option<String>,
    /// The code
    pub code: Option<String>,
    /// Human-readable meaning
    pub code_description: Option<String>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// User that created the record
    pub created_user_id: Option<Uuid>,
}

/// A country known to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Country {
    /// Country name
    pub name: Option<String>,
    /// ISO 3166 alpha-2 code
    pub alpha2: Option<String>,
    /// ISO 3166 alpha-3 code
    pub alpha3: Option<String>,
    /// ISO 3166 numeric code
    pub country_code: Option<i32>,
    /// Region
    pub region: Option<String>,
    /// Sub-region
    pub sub_region: Option<String>,
    /// Intermediate region
    pub intermediate_region: Option<String>,
    /// Region code
    pub region_code: Option<i32>,
    /// Sub-region code
    pub sub_region_code: Option<i32>,
    /// Intermediate region code
    pub intermediate_region_code: Option<i32>,
    /// French name
    pub french_name: Option<String>,
    /// Alternate names
    pub aliases: Option<String>,
}

/// A currency known to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Currency {
    /// ISO 4217 alphabetic code
    pub alpha_code: Option<String>,
    /// ISO 4217 numeric code
    pub numeric_code: Option<String>,
    /// Currency name
    pub currency_name: Option<String>,
    /// Number of minor units
    pub minor_unit: Option<i32>,
    /// Symbol, e.g. `$`
    pub symbol: Option<String>,
}

/// A financial system (ERP) the server can connect to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FinancialSystem {
    /// Unique id assigned by the server
    pub erp_system_id: Option<Uuid>,
    /// Name
    pub name: Option<String>,
    /// Whether the system is supported
    pub is_supported: Option<bool>,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
}

/// Exchange rate between two currencies on a date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CurrencyRate {
    /// Source currency code
    pub source_currency: Option<String>,
    /// Destination currency code
    pub destination_currency: Option<String>,
    /// Rate applied to convert source into destination
    pub currency_rate: Option<Decimal>,
    /// Date of the rate
    pub currency_date: Option<NaiveDate>,
}

/// One conversion in a bulk currency request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct BulkCurrencyConversion {
    /// Date of the rate to use
    pub date: Option<NaiveDate>,
    /// Source currency code
    pub source_currency: Option<String>,
}
