//! User roles service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::UserRole;

const USER_ROLES: Resource = Resource::new("/api/v1/UserRoles");

/// Read-only service for the roles users can hold.
pub struct UserRolesService {
    inner: Arc<ClientInner>,
}

impl UserRolesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(UserRole, USER_ROLES; retrieve, query);
}
