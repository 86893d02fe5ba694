//! Status service.

use std::sync::Arc;

use super::Endpoint;
use crate::client::ClientInner;
use crate::models::Status;
use crate::{ApiResponse, Result};

const STATUS: Endpoint = Endpoint::get("/api/v1/Status");

/// Service for checking connectivity and credentials.
pub struct StatusService {
    inner: Arc<ClientInner>,
}

impl StatusService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Ping the server.
    ///
    /// Succeeds without credentials; `logged_in` reports whether the
    /// configured credentials were accepted.
    pub async fn ping(&self) -> Result<ApiResponse<Status>> {
        self.inner.execute(STATUS.request(&[])).await
    }
}
