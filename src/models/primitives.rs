//! Environment selection and shared result wrappers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment configuration for the Platform API.
///
/// Determines which server the client talks to.
///
/// # Example
///
/// ```
/// use platform_api::Environment;
///
/// let env = Environment::Sandbox;
/// assert_eq!(env.api_base_url(), "https://api.sbx.lockstep.io");
///
/// let local = Environment::custom("http://localhost:5000/");
/// assert_eq!(local.api_base_url(), "http://localhost:5000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment
    #[default]
    Production,
    /// Sandbox environment for development and testing
    Sandbox,
    /// Any other server, e.g. a local stub
    Custom(String),
}

impl Environment {
    /// Build a custom environment from a base URL.
    pub fn custom(url: impl Into<String>) -> Self {
        Environment::Custom(url.into())
    }

    /// Get the base URL for REST API requests, without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        match self {
            Environment::Production => "https://api.lockstep.io",
            Environment::Sandbox => "https://api.sbx.lockstep.io",
            Environment::Custom(url) => url.trim_end_matches('/'),
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Custom(url) => write!(f, "custom({})", url),
        }
    }
}

/// One page of records returned by a `query` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FetchResult<T> {
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    /// Total number of records matching the filter
    #[serde(default)]
    pub total_count: Option<i32>,
    /// Page size used by the server
    #[serde(default)]
    pub page_size: Option<i32>,
    /// Zero-based page number
    #[serde(default)]
    pub page_number: Option<i32>,
}

/// Result of a delete or archive call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DeleteResult {
    /// Messages describing what was removed
    #[serde(default)]
    pub messages: Option<Vec<String>>,
}

/// Result of an action endpoint that returns only messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ActionResultModel {
    /// Messages returned by the server
    #[serde(default)]
    pub messages: Option<Vec<String>>,
}
