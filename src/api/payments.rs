//! Payments service.

use std::sync::Arc;

use super::{crud_operations, Endpoint, QueryOptions, Resource};
use crate::client::ClientInner;
use crate::models::{FetchResult, Payment, PaymentSummary};
use crate::{ApiResponse, Result};

const PAYMENTS: Resource = Resource::new("/api/v1/Payments");
const SUMMARY: Endpoint = Endpoint::get("/api/v1/Payments/views/summary");

/// Service for payments received from customers.
pub struct PaymentsService {
    inner: Arc<ClientInner>,
}

impl PaymentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Payment, PAYMENTS; retrieve, create, update, delete, query);

    /// Query payments with their applied and unapplied totals.
    pub async fn summaries(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<PaymentSummary>>> {
        let request = SUMMARY.request(&[]).query(options.to_params());
        self.inner.execute(request).await
    }
}
