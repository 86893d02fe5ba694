//! Data sync service.

use std::path::Path;
use std::sync::Arc;

use super::{crud_operations, Endpoint, Resource};
use crate::client::ClientInner;
use crate::models::{SyncRequest, SyncSubmit};
use crate::{ApiResponse, Result};

const SYNC: Resource = Resource::new("/api/v1/Sync");
const UPLOAD_ZIP: Endpoint = Endpoint::post("/api/v1/Sync/zip");

/// Service for starting and tracking data syncs.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: platform_api::PlatformClient, enrollment: uuid::Uuid) -> platform_api::Result<()> {
/// use platform_api::models::SyncSubmit;
///
/// let started = client
///     .sync()
///     .create(&SyncSubmit { app_enrollment_id: Some(enrollment) })
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct SyncService {
    inner: Arc<ClientInner>,
}

impl SyncService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(SyncRequest, SYNC; retrieve, update, query);

    /// Start a sync for an app enrollment.
    pub async fn create(&self, submit: &SyncSubmit) -> Result<ApiResponse<SyncRequest>> {
        self.inner.execute(SYNC.create(submit)?).await
    }

    /// Upload a zip of flat files to import.
    pub async fn upload_zip(&self, path: impl AsRef<Path>) -> Result<ApiResponse<SyncRequest>> {
        let request = UPLOAD_ZIP.request(&[]).upload(path.as_ref());
        self.inner.execute(request).await
    }
}
