//! Activities service.

use std::sync::Arc;

use super::{crud_operations, Endpoint, Resource};
use crate::client::ClientInner;
use crate::models::{Activity, ActivityStreamItem};
use crate::{ApiResponse, Result};

const ACTIVITIES: Resource = Resource::new("/api/v1/Activities");
const STREAM: Endpoint = Endpoint::get("/api/v1/Activities/{id}/stream");

/// Service for collection activities: calls, follow-ups and tasks
/// assigned to users.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: platform_api::PlatformClient) -> platform_api::Result<()> {
/// use platform_api::api::QueryOptions;
///
/// let open = client
///     .activities()
///     .query(&QueryOptions::new().filter("isOpen eq true").page_size(50))
///     .await?;
/// if let Some(page) = open.value() {
///     println!("{} open activities", page.records.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ActivitiesService {
    inner: Arc<ClientInner>,
}

impl ActivitiesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Activity, ACTIVITIES; retrieve, create, update, delete, query);

    /// Get the timeline of notes, emails and payments attached to an activity.
    pub async fn stream(&self, id: uuid::Uuid) -> Result<ApiResponse<Vec<ActivityStreamItem>>> {
        self.inner.execute(STREAM.request(&[&id])).await
    }
}
