//! Custom field values service.
//!
//! Values are keyed by the pair (definition id, record key) rather than a
//! single id, so only `create` and `query` come from the shared resource.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use super::{crud_operations, Endpoint, Resource, RetrieveOptions};
use crate::client::ClientInner;
use crate::models::{CustomFieldValue, DeleteResult};
use crate::{ApiResponse, Result};

const CUSTOM_FIELD_VALUES: Resource = Resource::new("/api/v1/CustomFieldValues");
const RETRIEVE: Endpoint = Endpoint::get("/api/v1/CustomFieldValues/{definitionId}/{recordKey}");
const UPDATE: Endpoint = Endpoint::patch("/api/v1/CustomFieldValues/{definitionId}/{recordKey}");
const DELETE: Endpoint = Endpoint::delete("/api/v1/CustomFieldValues/{definitionId}/{recordKey}");

/// Service for values of custom fields on individual records.
pub struct CustomFieldValuesService {
    inner: Arc<ClientInner>,
}

impl CustomFieldValuesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(CustomFieldValue, CUSTOM_FIELD_VALUES; create, query);

    /// Retrieve the value of `definition_id` on the record `record_key`.
    pub async fn retrieve(
        &self,
        definition_id: Uuid,
        record_key: Uuid,
        options: &RetrieveOptions,
    ) -> Result<ApiResponse<CustomFieldValue>> {
        let request = RETRIEVE
            .request(&[&definition_id, &record_key])
            .query(options.to_params());
        self.inner.execute(request).await
    }

    /// Update a value with a partial JSON document.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        definition_id: Uuid,
        record_key: Uuid,
        patch: &B,
    ) -> Result<ApiResponse<CustomFieldValue>> {
        let request = UPDATE.request(&[&definition_id, &record_key]).json(patch)?;
        self.inner.execute(request).await
    }

    /// Delete a value.
    pub async fn delete(
        &self,
        definition_id: Uuid,
        record_key: Uuid,
    ) -> Result<ApiResponse<DeleteResult>> {
        self.inner
            .execute(DELETE.request(&[&definition_id, &record_key]))
            .await
    }
}
