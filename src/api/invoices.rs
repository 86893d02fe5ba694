//! Invoices service.

use std::sync::Arc;

use super::{crud_operations, Endpoint, QueryOptions, Resource};
use crate::client::ClientInner;
use crate::models::{FetchResult, Invoice, InvoiceAddress, InvoiceSummary, Uri};
use crate::{ApiResponse, Result};

const INVOICES: Resource = Resource::new("/api/v1/Invoices");
const ADDRESSES: Endpoint = Endpoint::get("/api/v1/Invoices/views/addresses");
const SUMMARY: Endpoint = Endpoint::get("/api/v1/Invoices/views/summary");
const PDF: Endpoint = Endpoint::get("/api/v1/Invoices/{id}/pdf");

/// Service for invoices and their lines.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: platform_api::PlatformClient, id: uuid::Uuid) -> platform_api::Result<()> {
/// use platform_api::api::RetrieveOptions;
///
/// let invoice = client
///     .invoices()
///     .retrieve(id, &RetrieveOptions::new().include("Lines,Addresses"))
///     .await?;
///
/// match invoice.into_result() {
///     Ok(invoice) => println!("balance: {:?}", invoice.outstanding_balance_amount),
///     Err(problem) => eprintln!("lookup failed: {}", problem),
/// }
/// # Ok(())
/// # }
/// ```
pub struct InvoicesService {
    inner: Arc<ClientInner>,
}

impl InvoicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Invoice, INVOICES; retrieve, create, update, delete, query);

    /// Query the addresses used on invoices.
    pub async fn addresses(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<InvoiceAddress>>> {
        let request = ADDRESSES.request(&[]).query(options.to_params());
        self.inner.execute(request).await
    }

    /// Query invoices with their payment totals.
    pub async fn summaries(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<InvoiceSummary>>> {
        let request = SUMMARY.request(&[]).query(options.to_params());
        self.inner.execute(request).await
    }

    /// Get a download link for the rendered invoice PDF.
    pub async fn retrieve_pdf(&self, id: uuid::Uuid) -> Result<ApiResponse<Uri>> {
        self.inner.execute(PDF.request(&[&id])).await
    }
}
