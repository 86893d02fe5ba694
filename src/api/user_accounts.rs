//! User accounts service.

use std::sync::Arc;

use super::{crud_operations, Endpoint, Resource};
use crate::client::{ClientInner, QueryParams};
use crate::models::{
    ActionResultModel, Invite, InviteData, InviteSubmit, TransferOwner, TransferOwnerSubmit,
    UserAccount,
};
use crate::{ApiResponse, Result};

const USER_ACCOUNTS: Resource = Resource::new("/api/v1/UserAccounts");
const REENABLE: Endpoint = Endpoint::post("/api/v1/UserAccounts/reenable");
const INVITE: Endpoint = Endpoint::post("/api/v1/UserAccounts/invite");
const INVITE_DATA: Endpoint = Endpoint::get("/api/v1/UserAccounts/invite");
const TRANSFER_OWNER: Endpoint = Endpoint::post("/api/v1/UserAccounts/transfer-owner");

/// Service for users of the group.
pub struct UserAccountsService {
    inner: Arc<ClientInner>,
}

impl UserAccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(UserAccount, USER_ACCOUNTS; retrieve, create, update, query);

    /// Disable a user. Disabled users keep their history and can be
    /// re-enabled with [`reenable`](Self::reenable).
    pub async fn delete(&self, id: uuid::Uuid) -> Result<ApiResponse<ActionResultModel>> {
        self.inner.execute(USER_ACCOUNTS.delete(id)).await
    }

    /// Re-enable a disabled user.
    pub async fn reenable(&self, id: uuid::Uuid) -> Result<ApiResponse<ActionResultModel>> {
        let request = REENABLE
            .request(&[])
            .query(QueryParams::new().with("id", Some(id)));
        self.inner.execute(request).await
    }

    /// Invite users by email.
    pub async fn invite(&self, invites: &[InviteSubmit]) -> Result<ApiResponse<Vec<Invite>>> {
        let request = INVITE.request(&[]).json(invites)?;
        self.inner.execute(request).await
    }

    /// Look up the invitation behind an invite code.
    pub async fn invite_data(&self, code: uuid::Uuid) -> Result<ApiResponse<InviteData>> {
        let request = INVITE_DATA
            .request(&[])
            .query(QueryParams::new().with("code", Some(code)));
        self.inner.execute(request).await
    }

    /// Make another user the owner of the group.
    pub async fn transfer_owner(
        &self,
        submit: &TransferOwnerSubmit,
    ) -> Result<ApiResponse<TransferOwner>> {
        let request = TRANSFER_OWNER.request(&[]).json(submit)?;
        self.inner.execute(request).await
    }
}
