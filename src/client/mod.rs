//! HTTP client and transport for the Platform API.
//!
//! This module provides the main entry point [`PlatformClient`] and the
//! request/response types every service call goes through.
//!
//! # Example
//!
//! ```no_run
//! use platform_api::{Environment, PlatformClient};
//!
//! # async fn example() -> platform_api::Result<()> {
//! let client = PlatformClient::with_api_key(Environment::Sandbox, "my-api-key")?;
//!
//! let status = client.status().ping().await?;
//! println!("logged in: {:?}", status.value().and_then(|s| s.logged_in));
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod request;
pub(crate) mod response;

pub use config::{ClientConfig, Credentials, SDK_NAME, SDK_VERSION};
pub use http::{PlatformClient, SERVER_DURATION_HEADER};
pub use request::{Method, QueryParams, QueryValue, Request, RequestBody};
pub use response::{ApiResponse, ErrorResult};
pub(crate) use http::{decode_success, ClientInner};
