//! Leads service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::Lead;

const LEADS: Resource = Resource::new("/api/v1/Leads");

/// Service for registering prospective customers.
pub struct LeadsService {
    inner: Arc<ClientInner>,
}

impl LeadsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Lead, LEADS; create);
}
