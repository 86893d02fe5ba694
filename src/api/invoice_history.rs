//! Invoice history service.

use std::sync::Arc;

use super::{crud_operations, Resource, RetrieveOptions};
use crate::client::ClientInner;
use crate::models::{FetchResult, InvoiceHistory};
use crate::{ApiResponse, Result};

const INVOICE_HISTORY: Resource = Resource::new("/api/v1/InvoiceHistory");

/// Read-only service for the change log of invoices.
pub struct InvoiceHistoryService {
    inner: Arc<ClientInner>,
}

impl InvoiceHistoryService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(InvoiceHistory, INVOICE_HISTORY; query);

    /// Get every recorded revision of one invoice.
    pub async fn retrieve(
        &self,
        invoice_id: uuid::Uuid,
    ) -> Result<ApiResponse<FetchResult<InvoiceHistory>>> {
        let request = INVOICE_HISTORY.retrieve(invoice_id, &RetrieveOptions::new());
        self.inner.execute(request).await
    }
}
