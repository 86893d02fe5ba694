//! Shared description of a REST resource and its standard operations.
//!
//! Every resource group exposes some subset of the same five calls:
//!
//! | Operation  | Verb   | Path                 |
//! |------------|--------|----------------------|
//! | `retrieve` | GET    | `{base}/{id}`        |
//! | `create`   | POST   | `{base}`             |
//! | `update`   | PATCH  | `{base}/{id}`        |
//! | `delete`   | DELETE | `{base}/{id}`        |
//! | `query`    | GET    | `{base}/query`       |
//!
//! [`Resource`] turns one of these into a [`Request`]; the services hand the
//! request to the transport unchanged. [`Endpoint`] does the same for the
//! one-off paths a resource adds on top.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::client::{Method, QueryParams, Request};
use crate::Result;

/// Options for fetching a single record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetrieveOptions {
    /// Comma-separated related collections to embed (e.g. `Lines,Notes`)
    pub include: Option<String>,
}

impl RetrieveOptions {
    /// No related data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request related collections to be embedded in the response.
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        QueryParams::new().with("include", self.include.as_deref())
    }
}

/// Options for a `query` call.
///
/// # Example
///
/// ```
/// use platform_api::api::QueryOptions;
///
/// let options = QueryOptions::new()
///     .filter("companyType eq 'Customer'")
///     .order("companyName asc")
///     .page_size(250);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Searchlight filter expression
    pub filter: Option<String>,
    /// Comma-separated related collections to embed
    pub include: Option<String>,
    /// Sort expression, e.g. `name asc`
    pub order: Option<String>,
    /// Records per page
    pub page_size: Option<i32>,
    /// Zero-based page number
    pub page_number: Option<i32>,
}

impl QueryOptions {
    /// Empty query: the server's default page of all records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter expression.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the related collections to embed.
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Set the sort order.
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the page number.
    pub fn page_number(mut self, page_number: i32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("filter", self.filter.as_deref())
            .with("include", self.include.as_deref())
            .with("order", self.order.as_deref())
            .with("pageSize", self.page_size)
            .with("pageNumber", self.page_number)
    }
}

/// A resource collection rooted at a fixed path, e.g. `/api/v1/Companies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Resource {
    base: &'static str,
}

impl Resource {
    pub(crate) const fn new(base: &'static str) -> Self {
        Self { base }
    }

    pub(crate) fn retrieve(&self, id: impl Display, options: &RetrieveOptions) -> Request {
        Request::new(Method::Get, format!("{}/{}", self.base, id)).query(options.to_params())
    }

    pub(crate) fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<Request> {
        Request::new(Method::Post, self.base).json(body)
    }

    pub(crate) fn update<B: Serialize + ?Sized>(&self, id: impl Display, patch: &B) -> Result<Request> {
        Request::new(Method::Patch, format!("{}/{}", self.base, id)).json(patch)
    }

    pub(crate) fn delete(&self, id: impl Display) -> Request {
        Request::new(Method::Delete, format!("{}/{}", self.base, id))
    }

    pub(crate) fn query(&self, options: &QueryOptions) -> Request {
        Request::new(Method::Get, format!("{}/query", self.base)).query(options.to_params())
    }
}

/// A single non-CRUD endpoint with a `{placeholder}` path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Endpoint {
    method: Method,
    template: &'static str,
}

impl Endpoint {
    pub(crate) const fn get(template: &'static str) -> Self {
        Self { method: Method::Get, template }
    }

    pub(crate) const fn post(template: &'static str) -> Self {
        Self { method: Method::Post, template }
    }

    pub(crate) const fn patch(template: &'static str) -> Self {
        Self { method: Method::Patch, template }
    }

    pub(crate) const fn delete(template: &'static str) -> Self {
        Self { method: Method::Delete, template }
    }

    /// Substitute `args` into the template's placeholders, left to right.
    pub(crate) fn path(&self, args: &[&dyn Display]) -> String {
        let mut out = String::with_capacity(self.template.len() + 40);
        let mut rest = self.template;
        let mut args = args.iter();

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            out.push_str(&rest[..open]);
            match args.next() {
                Some(arg) => {
                    let _ = fmt::write(&mut out, format_args!("{}", arg));
                }
                None => out.push_str(&rest[open..open + close + 1]),
            }
            rest = &rest[open + close + 1..];
        }
        out.push_str(rest);
        out
    }

    pub(crate) fn request(&self, args: &[&dyn Display]) -> Request {
        Request::new(self.method, self.path(args))
    }
}

/// Generates the standard resource operations inside a service `impl`.
///
/// The service must have an `inner: Arc<ClientInner>` field; `$resource`
/// is the [`Resource`] constant describing the collection.
macro_rules! crud_operations {
    ($model:ty, $resource:expr; $($op:ident),+ $(,)?) => {
        $( crud_operations!(@op $op, $model, $resource); )+
    };
    (@op retrieve, $model:ty, $resource:expr) => {
        /// Retrieve a single record by id.
        ///
        /// Use [`RetrieveOptions::include`](crate::api::RetrieveOptions::include)
        /// to embed related collections.
        pub async fn retrieve(
            &self,
            id: uuid::Uuid,
            options: &$crate::api::RetrieveOptions,
        ) -> $crate::Result<$crate::ApiResponse<$model>> {
            self.inner.execute($resource.retrieve(id, options)).await
        }
    };
    (@op create, $model:ty, $resource:expr) => {
        /// Create one or more records.
        ///
        /// Returns the created records, with server-assigned ids.
        pub async fn create(
            &self,
            records: &[$model],
        ) -> $crate::Result<$crate::ApiResponse<Vec<$model>>> {
            self.inner.execute($resource.create(records)?).await
        }
    };
    (@op update, $model:ty, $resource:expr) => {
        /// Update a record with a partial JSON document.
        ///
        /// Only the fields present in `patch` are changed.
        pub async fn update<B: serde::Serialize + ?Sized>(
            &self,
            id: uuid::Uuid,
            patch: &B,
        ) -> $crate::Result<$crate::ApiResponse<$model>> {
            self.inner.execute($resource.update(id, patch)?).await
        }
    };
    (@op delete, $model:ty, $resource:expr) => {
        /// Delete a record by id.
        pub async fn delete(
            &self,
            id: uuid::Uuid,
        ) -> $crate::Result<$crate::ApiResponse<$crate::models::DeleteResult>> {
            self.inner.execute($resource.delete(id)).await
        }
    };
    (@op query, $model:ty, $resource:expr) => {
        /// Query records with a filter, sort order and paging.
        pub async fn query(
            &self,
            options: &$crate::api::QueryOptions,
        ) -> $crate::Result<$crate::ApiResponse<$crate::models::FetchResult<$model>>> {
            self.inner.execute($resource.query(options)).await
        }
    };
}

pub(crate) use crud_operations;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RequestBody;

    const COMPANIES: Resource = Resource::new("/api/v1/Companies");

    #[test]
    fn test_resource_paths() {
        let id = uuid::Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();

        let retrieve = COMPANIES.retrieve(id, &RetrieveOptions::new().include("Contacts"));
        assert_eq!(retrieve.method, Method::Get);
        assert_eq!(
            retrieve.path_and_query(),
            "/api/v1/Companies/11111111-1111-1111-1111-111111111111?include=Contacts"
        );

        let delete = COMPANIES.delete(id);
        assert_eq!(delete.method, Method::Delete);
        assert_eq!(
            delete.path_and_query(),
            "/api/v1/Companies/11111111-1111-1111-1111-111111111111"
        );
    }

    #[test]
    fn test_query_options_encoding() {
        let options = QueryOptions::new()
            .filter("companyName eq 'Acme'")
            .order("companyName asc")
            .page_size(250);
        let request = COMPANIES.query(&options);
        assert_eq!(
            request.path_and_query(),
            "/api/v1/Companies/query?filter=companyName%20eq%20%27Acme%27&order=companyName%20asc&pageSize=250"
        );
    }

    #[test]
    fn test_update_carries_patch_body() {
        let id = uuid::Uuid::nil();
        let request = COMPANIES
            .update(id, &serde_json::json!({ "companyName": "Acme 2" }))
            .unwrap();
        assert_eq!(request.method, Method::Patch);
        assert!(matches!(request.body, RequestBody::Json(ref v) if v["companyName"] == "Acme 2"));
    }

    #[test]
    fn test_endpoint_template_substitution() {
        let endpoint = Endpoint::get("/api/v1/CustomFieldValues/{definitionId}/{recordKey}");
        assert_eq!(
            endpoint.path(&[&"abc", &42]),
            "/api/v1/CustomFieldValues/abc/42"
        );

        let no_args = Endpoint::post("/api/v1/Status");
        assert_eq!(no_args.path(&[]), "/api/v1/Status");
    }

    #[test]
    fn test_endpoint_missing_args_leaves_placeholder() {
        let endpoint = Endpoint::patch("/api/v1/UserAccounts/{id}/reenable");
        assert_eq!(endpoint.path(&[]), "/api/v1/UserAccounts/{id}/reenable");
        assert_eq!(Endpoint::delete("/x/{id}").request(&[&1]).path, "/x/1");
    }
}
