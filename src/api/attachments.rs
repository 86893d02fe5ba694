//! Attachments service.

use std::path::Path;
use std::sync::Arc;

use super::{crud_operations, Endpoint, Resource};
use crate::client::{ClientInner, QueryParams};
use crate::models::{ActionResultModel, Attachment, Uri};
use crate::{ApiResponse, Result};

const ATTACHMENTS: Resource = Resource::new("/api/v1/Attachments");
const DOWNLOAD: Endpoint = Endpoint::get("/api/v1/Attachments/{id}/download");
const UPLOAD: Endpoint = Endpoint::post("/api/v1/Attachments");

/// Service for files attached to records.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: platform_api::PlatformClient, invoice_id: uuid::Uuid) -> platform_api::Result<()> {
/// let uploaded = client
///     .attachments()
///     .upload("Invoices", invoice_id, "./scans/INV-1001.pdf")
///     .await?;
/// assert!(uploaded.success());
/// # Ok(())
/// # }
/// ```
pub struct AttachmentsService {
    inner: Arc<ClientInner>,
}

impl AttachmentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Attachment, ATTACHMENTS; retrieve, update, query);

    /// Archive an attachment. The file is kept but hidden from queries.
    pub async fn archive(&self, id: uuid::Uuid) -> Result<ApiResponse<ActionResultModel>> {
        self.inner.execute(ATTACHMENTS.delete(id)).await
    }

    /// Upload a local file and attach it to a record.
    ///
    /// `table_name` is the record's table (e.g. `Invoices`), `object_id` its
    /// primary key. The file is sent as a multipart part named `file`.
    pub async fn upload(
        &self,
        table_name: &str,
        object_id: uuid::Uuid,
        path: impl AsRef<Path>,
    ) -> Result<ApiResponse<Vec<Attachment>>> {
        let request = UPLOAD
            .request(&[])
            .query(
                QueryParams::new()
                    .with("tableName", Some(table_name))
                    .with("objectId", Some(object_id)),
            )
            .upload(path.as_ref());
        self.inner.execute(request).await
    }

    /// Get a short-lived download link for an attachment.
    pub async fn download_url(&self, id: uuid::Uuid) -> Result<ApiResponse<Uri>> {
        self.inner.execute(DOWNLOAD.request(&[&id])).await
    }
}
