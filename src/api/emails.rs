//! Emails service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::Email;

const EMAILS: Resource = Resource::new("/api/v1/Emails");

/// Service for emails sent and received on behalf of the group.
pub struct EmailsService {
    inner: Arc<ClientInner>,
}

impl EmailsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Email, EMAILS; retrieve, create, update, delete, query);
}
