//! Webhooks service.

use std::sync::Arc;

use super::{crud_operations, Endpoint, Resource};
use crate::client::ClientInner;
use crate::models::Webhook;
use crate::{ApiResponse, Result};

const WEBHOOKS: Resource = Resource::new("/api/v1/Webhooks");
const REGENERATE_SECRET: Endpoint = Endpoint::patch("/api/v1/Webhooks/{id}/regenerateclientsecret");

/// Service for webhook subscriptions.
pub struct WebhooksService {
    inner: Arc<ClientInner>,
}

impl WebhooksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Webhook, WEBHOOKS; retrieve, create, update, delete, query);

    /// Issue a new signing secret. The old secret stops working immediately.
    pub async fn regenerate_secret(&self, id: uuid::Uuid) -> Result<ApiResponse<Webhook>> {
        self.inner.execute(REGENERATE_SECRET.request(&[&id])).await
    }
}
