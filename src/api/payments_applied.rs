//! Payment applications service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::PaymentApplied;

const PAYMENTS_APPLIED: Resource = Resource::new("/api/v1/PaymentsApplied");

/// Service for the portions of payments applied to invoices.
pub struct PaymentsAppliedService {
    inner: Arc<ClientInner>,
}

impl PaymentsAppliedService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(PaymentApplied, PAYMENTS_APPLIED; retrieve, create, update, delete, query);
}
