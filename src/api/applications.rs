//! Applications service.

use std::sync::Arc;

use super::{crud_operations, Resource};
use crate::client::ClientInner;
use crate::models::Application;

const APPLICATIONS: Resource = Resource::new("/api/v1/Applications");

/// Service for marketplace applications.
pub struct ApplicationsService {
    inner: Arc<ClientInner>,
}

impl ApplicationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    crud_operations!(Application, APPLICATIONS; retrieve, create, update, delete, query);
}
