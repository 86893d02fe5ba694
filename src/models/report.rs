//! Receivables report models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cash collected and invoiced over a time window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CashflowReport {
    /// Window start
    pub timeframe: Option<i32>,
    /// Number of payments collected
    pub payments_collected: Option<i32>,
    /// Amount collected
    pub payments_collected_amount: Option<Decimal>,
    /// Number of invoices billed
    pub invoices_billed: Option<i32>,
    /// Amount billed
    pub invoices_billed_amount: Option<Decimal>,
}

/// Days-sales-outstanding figure for one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DailySalesOutstandingReport {
    /// Month covered
    pub timeframe: Option<NaiveDate>,
    /// Invoices open during the month
    pub invoice_count: Option<i32>,
    /// Days sales outstanding
    pub daily_sales_outstanding: Option<Decimal>,
}

/// Share of receivables at risk for one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct RiskRate {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Month covered
    pub report_period: Option<NaiveDate>,
    /// Month name
    pub invoice_month_name: Option<String>,
    /// Total invoices in the month
    pub total_invoice_count: Option<i32>,
    /// Total invoiced amount
    pub total_invoice_amount: Option<Decimal>,
    /// Invoices at risk
    pub atrisk_count: Option<i32>,
    /// Amount at risk
    pub atrisk_amount: Option<Decimal>,
    /// Share of invoices at risk
    pub atrisk_count_percentage: Option<Decimal>,
    /// Share of amount at risk
    pub atrisk_percentage: Option<Decimal>,
}

/// Header figures for the accounts-receivable aging screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ArHeaderInfo {
    /// Group that owns this record
    pub group_key: Option<Uuid>,
    /// Date the figures were computed for
    pub report_period: Option<NaiveDate>,
    /// Customers with open balances
    pub total_customers: Option<i32>,
    /// Open invoices
    pub total_invoices: Option<i32>,
    /// Invoiced amount
    pub total_invoiced_amount: Option<Decimal>,
    /// Unapplied payments
    pub total_unapplied_payments: Option<Decimal>,
    /// Collected amount
    pub total_collected: Option<Decimal>,
    /// Receivables balance
    pub total_ar_amount: Option<Decimal>,
    /// Invoices paid
    pub total_invoices_paid: Option<i32>,
    /// Invoices past due
    pub total_invoices_past_due: Option<i32>,
    /// Invoices past due over 90 days
    pub total_invoices_90_days_past_due: Option<i32>,
    /// Amount past due
    pub total_past_due_amount: Option<Decimal>,
    /// Amount past due over 90 days
    pub total_past_due_amount_90_days: Option<Decimal>,
    /// Share of receivables past due
    pub percentage_of_total_ar: Option<Decimal>,
    /// Days sales outstanding
    pub dso: Option<Decimal>,
    /// Customers with past-due balances
    pub total_customers_past_due: Option<i32>,
}

/// Options for the aging header report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArHeaderOptions {
    /// Date to compute the figures for
    pub report_date: Option<NaiveDate>,
    /// Restrict to one company
    pub company_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::client::decode_success;

    #[test]
    fn test_ar_header_info_ninety_day_figures() {
        let body = br#"{
            "GroupKey": "0b6f4e2c-9a51-4d8e-8c1a-3f2d7e9b5a10",
            "ReportPeriod": "2024-03-31",
            "TotalInvoicesPastDue": 5,
            "TotalInvoices90DaysPastDue": 3,
            "TotalPastDueAmount": 980.25,
            "TotalPastDueAmount90Days": 120.5,
            "DSO": 41.7
        }"#;
        let info: ArHeaderInfo = decode_success(StatusCode::OK, body).unwrap();
        assert_eq!(info.report_period, NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(info.total_invoices_past_due, Some(5));
        assert_eq!(info.total_invoices_90_days_past_due, Some(3));
        assert_eq!(info.total_past_due_amount, Some(dec!(980.25)));
        assert_eq!(info.total_past_due_amount_90_days, Some(dec!(120.5)));
        assert_eq!(info.dso, Some(dec!(41.7)));

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["totalInvoices90DaysPastDue"], 3);
        let again: ArHeaderInfo = decode_success(StatusCode::OK, json.to_string().as_bytes()).unwrap();
        assert_eq!(again, info);
    }
}
