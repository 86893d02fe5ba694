//! Credit memo applications service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::CreditMemoApplied;

const CREDIT_MEMOS_APPLIED: Resource = Resource::new("/api/v1/CreditMemosApplied");

/// Service for credit memos applied against invoices.
pub struct CreditMemosAppliedService {
    inner: Arc<ClientInner>,
}

impl CreditMemosAppliedService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(
        CreditMemoApplied,
        CREDIT_MEMOS_APPLIED;
        retrieve, create, update, delete, query
    );
}
