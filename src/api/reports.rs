//! Reports service.

use std::sync::Arc;

use super::Endpoint;
use crate::client::{ClientInner, QueryParams};
use crate::models::{
    ArHeaderInfo, ArHeaderOptions, CashflowReport, DailySalesOutstandingReport, RiskRate,
};
use crate::{ApiResponse, Result};

const CASH_FLOW: Endpoint = Endpoint::get("/api/v1/Reports/cashflow");
const DAILY_SALES_OUTSTANDING: Endpoint = Endpoint::get("/api/v1/Reports/dailysalesoutstanding");
const RISK_RATES: Endpoint = Endpoint::get("/api/v1/Reports/riskrates");
const AR_HEADER: Endpoint = Endpoint::get("/api/v1/Reports/ar-header");

/// Service for accounts-receivable reports.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: platform_api::PlatformClient) -> platform_api::Result<()> {
/// let last_month = client.reports().cash_flow(Some(30)).await?;
/// if let Some(report) = last_month.value() {
///     println!("collected {:?}", report.payments_collected_amount);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ReportsService {
    inner: Arc<ClientInner>,
}

impl ReportsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Payments collected and invoices billed over the last `days` days.
    pub async fn cash_flow(&self, days: Option<i32>) -> Result<ApiResponse<CashflowReport>> {
        let request = CASH_FLOW
            .request(&[])
            .query(QueryParams::new().with("timeWindowDays", days));
        self.inner.execute(request).await
    }

    /// Days sales outstanding for each recent month.
    pub async fn daily_sales_outstanding(
        &self,
    ) -> Result<ApiResponse<Vec<DailySalesOutstandingReport>>> {
        self.inner.execute(DAILY_SALES_OUTSTANDING.request(&[])).await
    }

    /// Share of receivables at risk for each recent month.
    pub async fn risk_rates(&self) -> Result<ApiResponse<Vec<RiskRate>>> {
        self.inner.execute(RISK_RATES.request(&[])).await
    }

    /// Headline figures for the aging screen.
    pub async fn ar_aging_header(
        &self,
        options: &ArHeaderOptions,
    ) -> Result<ApiResponse<ArHeaderInfo>> {
        let request = AR_HEADER.request(&[]).query(
            QueryParams::new()
                .with("reportDate", options.report_date)
                .with("companyId", options.company_id),
        );
        self.inner.execute(request).await
    }
}
