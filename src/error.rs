//! Error types for the Platform API client.
//!
//! Only failures where no usable HTTP response exists end up here: the
//! network call itself failed, an upload file could not be read, or a
//! successful response did not match the expected shape. A 4xx/5xx reply
//! from the server is not an [`Error`]; it is returned in-band as an
//! [`ApiResponse`](crate::ApiResponse) whose `success()` is `false`.

use std::path::PathBuf;

use thiserror::Error;

/// A specialized `Result` type for Platform API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Transport-level failures raised by the client.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP request could not be completed (DNS, connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request body could not be serialized to JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A local file given for upload could not be read
    #[error("Failed to read upload file {path}: {source}")]
    Io {
        /// Path of the file that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The server reported success but the body did not match the expected type
    #[error("Failed to decode successful response (status={status}): {source}")]
    Decode {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body
        body: String,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// A configured value cannot be sent as an HTTP header
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the request timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Http(err) => err.is_timeout(),
            _ => false,
        }
    }

    /// Returns `true` if the connection to the server could not be established.
    pub fn is_connect(&self) -> bool {
        match self {
            Error::Http(err) => err.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if this error was caused by local input rather than
    /// the network or the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Io { .. }
                | Error::Json(_)
                | Error::InvalidHeader(_)
                | Error::UrlParse(_)
                | Error::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_client_side() {
        assert!(Error::Config("bad".into()).is_client_error());
        assert!(Error::InvalidHeader("x".into()).is_client_error());

        let io = Error::Io {
            path: PathBuf::from("missing.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        };
        assert!(io.is_client_error());
        assert!(!io.is_timeout());
        assert!(io.to_string().contains("missing.pdf"));
    }

    #[test]
    fn test_decode_error_message() {
        let source = serde_json::from_str::<u32>("\"text\"").unwrap_err();
        let err = Error::Decode {
            status: 200,
            body: "\"text\"".to_string(),
            source,
        };
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("status=200"));
    }
}
