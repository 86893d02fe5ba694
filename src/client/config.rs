//! Client configuration options.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

const API_KEY: HeaderName = HeaderName::from_static("api-key");

/// SDK name reported in the `SdkName` header.
pub const SDK_NAME: &str = "Rust";

/// SDK version reported in the `SdkVersion` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the Platform API client.
///
/// # Example
///
/// ```
/// use platform_api::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_application_name("ledger-sync");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Optional application name sent as `ApplicationName`
    pub application_name: Option<String>,
    /// Value of the `SdkName` header
    pub sdk_name: String,
    /// Value of the `SdkVersion` header
    pub sdk_version: String,
    /// Value of the `MachineName` header
    pub machine_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(100),
            user_agent: format!("platform-api-rs/{} (Rust)", SDK_VERSION),
            application_name: None,
            sdk_name: SDK_NAME.to_string(),
            sdk_version: SDK_VERSION.to_string(),
            machine_name: default_machine_name(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Identify the calling application to the server.
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Override the machine name reported to the server.
    pub fn with_machine_name(mut self, name: impl Into<String>) -> Self {
        self.machine_name = name.into();
        self
    }
}

fn default_machine_name() -> String {
    sysinfo::System::host_name().unwrap_or_else(|| "unknown".to_string())
}

/// Credential attached to every outgoing request.
///
/// The client holds at most one credential, so installing a bearer token
/// drops any API key and vice versa.
#[derive(Clone)]
pub enum Credentials {
    /// JWT sent as `Authorization: Bearer <token>`
    BearerToken(SecretString),
    /// Key sent as `Api-Key: <key>`
    ApiKey(SecretString),
}

impl Credentials {
    /// Create a bearer token credential.
    pub fn bearer_token(token: impl Into<String>) -> Self {
        Credentials::BearerToken(SecretString::from(token.into()))
    }

    /// Create an API key credential.
    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials::ApiKey(SecretString::from(key.into()))
    }

    /// Header name used to transmit this credential.
    pub fn header_name(&self) -> HeaderName {
        match self {
            Credentials::BearerToken(_) => AUTHORIZATION,
            Credentials::ApiKey(_) => API_KEY,
        }
    }

    /// Header name and sensitive value to attach to a request.
    pub(crate) fn to_header(&self) -> Result<(HeaderName, HeaderValue)> {
        let mut value = match self {
            Credentials::BearerToken(token) => {
                HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                    .map_err(|_| Error::InvalidHeader("Invalid bearer token format".to_string()))?
            }
            Credentials::ApiKey(key) => HeaderValue::from_str(key.expose_secret())
                .map_err(|_| Error::InvalidHeader("Invalid API key format".to_string()))?,
        };
        value.set_sensitive(true);
        Ok((self.header_name(), value))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::BearerToken(_) => f.write_str("BearerToken([REDACTED])"),
            Credentials::ApiKey(_) => f.write_str("ApiKey([REDACTED])"),
        }
    }
}
