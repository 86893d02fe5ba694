//! Provisioning service.

use std::sync::Arc;

use super::Endpoint;
use crate::client::ClientInner;
use crate::models::{
    Provisioning, ProvisioningFinalizeRequest, ProvisioningFinalizeResponse, ProvisioningResponse,
};
use crate::{ApiResponse, Result};

const PROVISION: Endpoint = Endpoint::post("/api/v1/Provisioning");
const FINALIZE: Endpoint = Endpoint::post("/api/v1/Provisioning/finalize");

/// Service for creating new accounts and connecting their ERP.
pub struct ProvisioningService {
    inner: Arc<ClientInner>,
}

impl ProvisioningService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a user account and group, and enroll the chosen ERP.
    pub async fn provision_user_account(
        &self,
        body: &Provisioning,
    ) -> Result<ApiResponse<ProvisioningResponse>> {
        let request = PROVISION.request(&[]).json(body)?;
        self.inner.execute(request).await
    }

    /// Complete a registration with the group's company and ERP details.
    pub async fn finalize_registration(
        &self,
        body: &ProvisioningFinalizeRequest,
    ) -> Result<ApiResponse<ProvisioningFinalizeResponse>> {
        let request = FINALIZE.request(&[]).json(body)?;
        self.inner.execute(request).await
    }
}
