//! API keys service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::ApiKey;
use crate::{ApiResponse, Result};

const API_KEYS: Resource = Resource::new("/api/v1/ApiKeys");

/// Service for managing the group's API keys.
///
/// The key value itself is only returned by [`create`](Self::create); store
/// it then, later reads carry only the prefix.
pub struct ApiKeysService {
    inner: Arc<ClientInner>,
}

impl ApiKeysService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(ApiKey, API_KEYS; retrieve, create, query);

    /// Revoke a key. Revoked keys stay visible but can no longer authenticate.
    pub async fn revoke(&self, id: uuid::Uuid) -> Result<ApiResponse<ApiKey>> {
        self.inner.execute(API_KEYS.delete(id)).await
    }
}
