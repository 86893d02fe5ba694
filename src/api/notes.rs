//! Notes service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::{ActionResultModel, Note};
use crate::{ApiResponse, Result};

const NOTES: Resource = Resource::new("/api/v1/Notes");

/// Service for free-text notes attached to records.
pub struct NotesService {
    inner: Arc<ClientInner>,
}

impl NotesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Note, NOTES; retrieve, create, query);

    /// Archive a note.
    pub async fn archive(&self, id: uuid::Uuid) -> Result<ApiResponse<ActionResultModel>> {
        self.inner.execute(NOTES.delete(id)).await
    }
}
