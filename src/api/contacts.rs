//! Contacts service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::Contact;

const CONTACTS: Resource = Resource::new("/api/v1/Contacts");

/// Service for people at a company.
pub struct ContactsService {
    inner: Arc<ClientInner>,
}

impl ContactsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Contact, CONTACTS; retrieve, create, update, delete, query);
}
