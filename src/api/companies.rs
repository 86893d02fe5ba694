//! Companies service.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{crud_operations, Endpoint, QueryOptions, Resource};
use crate::client::ClientInner;
use crate::models::{Company, CustomerDetails, CustomerSummary, FetchResult};
use crate::{ApiResponse, Result};

const COMPANIES: Resource = Resource::new("/api/v1/Companies");
const CUSTOMER_SUMMARY: Endpoint = Endpoint::get("/api/v1/Companies/views/customer-summary");
const CUSTOMER_DETAILS: Endpoint = Endpoint::get("/api/v1/Companies/views/customer-details/{id}");

/// Service for companies: the group itself, its customers and vendors.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: platform_api::PlatformClient) -> platform_api::Result<()> {
/// use platform_api::api::{QueryOptions, RetrieveOptions};
/// use platform_api::models::Company;
///
/// let created = client
///     .companies()
///     .create(&[Company {
///         company_name: Some("Acme Corp".to_string()),
///         company_type: Some("Customer".to_string()),
///         ..Default::default()
///     }])
///     .await?;
///
/// let customers = client
///     .companies()
///     .query(&QueryOptions::new().filter("companyType eq 'Customer'"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct CompaniesService {
    inner: Arc<ClientInner>,
}

impl CompaniesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Company, COMPANIES; retrieve, create, update, delete, query);

    /// Query customers with their outstanding and paid totals.
    ///
    /// `report_date` fixes the aging date; the server uses today when unset.
    pub async fn customer_summaries(
        &self,
        options: &QueryOptions,
        report_date: Option<NaiveDate>,
    ) -> Result<ApiResponse<FetchResult<CustomerSummary>>> {
        let request = CUSTOMER_SUMMARY
            .request(&[])
            .query(options.to_params().with("reportDate", report_date));
        self.inner.execute(request).await
    }

    /// Get the balance details of one customer.
    pub async fn customer_details(&self, id: uuid::Uuid) -> Result<ApiResponse<CustomerDetails>> {
        self.inner.execute(CUSTOMER_DETAILS.request(&[&id])).await
    }
}
