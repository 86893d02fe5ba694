//! App enrollments service.

use std::sync::Arc;

use super::{crud_operations, Endpoint, Resource};
use crate::client::ClientInner;
use crate::models::{AppEnrollment, AppEnrollmentCustomField, FetchResult};
use crate::{ApiResponse, Result};

const APP_ENROLLMENTS: Resource = Resource::new("/api/v1/AppEnrollments");
const SETTINGS: Endpoint = Endpoint::get("/api/v1/AppEnrollments/settings/{id}");

/// Service for applications installed by the group.
pub struct AppEnrollmentsService {
    inner: Arc<ClientInner>,
}

impl AppEnrollmentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(AppEnrollment, APP_ENROLLMENTS; retrieve, create, update, delete, query);

    /// Get the custom field values configured on an enrollment.
    pub async fn custom_fields(
        &self,
        id: uuid::Uuid,
    ) -> Result<ApiResponse<FetchResult<AppEnrollmentCustomField>>> {
        self.inner.execute(SETTINGS.request(&[&id])).await
    }
}
