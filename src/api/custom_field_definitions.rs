//! Custom field definitions service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::CustomFieldDefinition;

const CUSTOM_FIELD_DEFINITIONS: Resource = Resource::new("/api/v1/CustomFieldDefinitions");

/// Service for user-defined fields that can be attached to records.
pub struct CustomFieldDefinitionsService {
    inner: Arc<ClientInner>,
}

impl CustomFieldDefinitionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(
        CustomFieldDefinition,
        CUSTOM_FIELD_DEFINITIONS;
        retrieve, create, update, delete, query
    );
}
