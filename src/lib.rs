//! # platform-api-rs
//!
//! An async Rust client for the Platform API, an accounting and
//! accounts-receivable data service.
//!
//! The crate is a thin typed layer over REST: every call goes through one
//! shared transport that attaches credentials and identification headers,
//! times the round trip and classifies the outcome into an [`ApiResponse`].
//!
//! ## Features
//!
//! - **Resource services**: companies, contacts, invoices, payments, notes,
//!   attachments, activities, users, webhooks and more
//! - **Typed envelopes**: success value or [`ErrorResult`] problem details,
//!   plus server and round-trip timings
//! - **Authentication**: bearer token or API key, swappable at runtime
//! - **File uploads**: multipart attachments and sync archives
//! - **Case-insensitive decoding**: PascalCase and camelCase payloads parse
//!   into the same models
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use platform_api::{Environment, PlatformClient};
//! use platform_api::api::QueryOptions;
//!
//! #[tokio::main]
//! async fn main() -> platform_api::Result<()> {
//!     let client = PlatformClient::with_api_key(Environment::Sandbox, "my-api-key")?;
//!
//!     let page = client
//!         .invoices()
//!         .query(&QueryOptions::new().filter("outstandingBalanceAmount gt 0").page_size(100))
//!         .await?;
//!
//!     match page.as_result() {
//!         Ok(page) => println!("{} open invoices", page.records.len()),
//!         Err(problem) => eprintln!("HTTP {}: {}", page.status(), problem),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! A non-2xx reply is not an [`Error`]: it arrives as an unsuccessful
//! [`ApiResponse`] carrying an [`ErrorResult`]. [`Error`] is reserved for
//! failures where no usable HTTP response exists, such as connection
//! failures, unreadable upload files or a 2xx body that does not match
//! the expected model.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ApiResponse, ClientConfig, Credentials, ErrorResult, PlatformClient};
pub use error::{Error, Result};
pub use models::{Environment, FetchResult};

/// Prelude module for convenient imports.
///
/// ```rust
/// use platform_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{QueryOptions, RetrieveOptions};
    pub use crate::client::{ApiResponse, ClientConfig, Credentials, ErrorResult, PlatformClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Wrappers
        ActionResultModel, DeleteResult, Environment, FetchResult,
        // Customers
        Company, Contact, CustomerSummary,
        // Receivables
        Invoice, InvoiceLine, Payment, PaymentApplied, CreditMemoApplied,
        // Collections work
        Activity, Attachment, Email, Note,
    };
}
