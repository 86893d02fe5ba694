//! Code definitions service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::CodeDefinition;

const CODE_DEFINITIONS: Resource = Resource::new("/api/v1/CodeDefinitions");

/// Read-only service for the code tables used by other records.
pub struct CodeDefinitionsService {
    inner: Arc<ClientInner>,
}

impl CodeDefinitionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(CodeDefinition, CODE_DEFINITIONS; retrieve, query);
}
