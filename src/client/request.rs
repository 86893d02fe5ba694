//! Request descriptions consumed by the transport.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::Result;

/// HTTP verbs used by the Platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource or collection
    Get,
    /// Create a resource or invoke an action
    Post,
    /// Partially update a resource
    Patch,
    /// Remove, archive or disable a resource
    Delete,
}

impl Method {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A scalar query-string value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Free text
    Str(String),
    /// Integer
    Int(i64),
    /// Decimal number
    Decimal(Decimal),
    /// Boolean, rendered as `true`/`false`
    Bool(bool),
    /// Calendar date, rendered as `YYYY-MM-DD`
    Date(NaiveDate),
    /// Timestamp, rendered as RFC 3339
    DateTime(DateTime<Utc>),
    /// Identifier, rendered hyphenated
    Uuid(Uuid),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(i) => write!(f, "{}", i),
            QueryValue::Decimal(d) => write!(f, "{}", d),
            QueryValue::Bool(b) => write!(f, "{}", b),
            QueryValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            QueryValue::DateTime(dt) => {
                f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            QueryValue::Uuid(u) => write!(f, "{}", u.hyphenated()),
        }
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(s: &String) -> Self {
        QueryValue::Str(s.clone())
    }
}

impl From<i32> for QueryValue {
    fn from(i: i32) -> Self {
        QueryValue::Int(i64::from(i))
    }
}

impl From<i64> for QueryValue {
    fn from(i: i64) -> Self {
        QueryValue::Int(i)
    }
}

impl From<Decimal> for QueryValue {
    fn from(d: Decimal) -> Self {
        QueryValue::Decimal(d)
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<NaiveDate> for QueryValue {
    fn from(d: NaiveDate) -> Self {
        QueryValue::Date(d)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(dt: DateTime<Utc>) -> Self {
        QueryValue::DateTime(dt)
    }
}

impl From<Uuid> for QueryValue {
    fn from(u: Uuid) -> Self {
        QueryValue::Uuid(u)
    }
}

/// Ordered query parameters; entries without a value are never sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. `None` values are kept but skipped on encoding.
    pub fn push<V: Into<QueryValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.entries.push((key.into(), value.map(Into::into)));
    }

    /// Builder form of [`push`](Self::push).
    pub fn with<V: Into<QueryValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.push(key, value);
        self
    }

    /// Returns `true` if no parameter carries a value.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_none())
    }

    /// Encode as `key=value&key=value` with percent-encoded keys and values.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .filter_map(|(key, value)| {
                value.as_ref().map(|v| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(&v.to_string())
                    )
                })
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Payload attached to a request.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    None,
    /// JSON document
    Json(serde_json::Value),
    /// Local file sent as a single multipart part named `file`
    Upload(PathBuf),
}

/// Everything the transport needs to issue one call.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP verb
    pub method: Method,
    /// Path relative to the base URL, ids already substituted
    pub path: String,
    /// Query parameters
    pub query: QueryParams,
    /// Request payload
    pub body: RequestBody,
}

impl Request {
    /// Create a request without parameters or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: RequestBody::None,
        }
    }

    /// Attach query parameters.
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a file to upload instead of a JSON body.
    pub fn upload(mut self, path: impl Into<PathBuf>) -> Self {
        self.body = RequestBody::Upload(path.into());
        self
    }

    /// Path plus encoded query string.
    pub fn path_and_query(&self) -> String {
        let query = self.query.to_query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query)
        }
    }
}
