//! Response envelope returned by every API call.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of one API call.
///
/// Holds either the deserialized value (on a 2xx status) or an
/// [`ErrorResult`] (on any other status), never both, along with timing
/// information.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: platform_api::PlatformClient) -> platform_api::Result<()> {
/// let response = client.status().ping().await?;
/// if response.success() {
///     println!("logged in: {:?}", response.value().and_then(|s| s.logged_in));
/// } else if let Some(err) = response.error() {
///     println!("ping failed: {}", err.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: u16,
    outcome: Result<T, ErrorResult>,
    server_duration: i64,
    total_roundtrip: i64,
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(
        status: u16,
        outcome: Result<T, ErrorResult>,
        server_duration: i64,
        total_roundtrip: i64,
    ) -> Self {
        Self {
            status,
            outcome,
            server_duration,
            total_roundtrip,
        }
    }

    /// Returns `true` if the server answered with a 2xx status.
    pub fn success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// HTTP status code of the response.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The deserialized value, present only on success.
    pub fn value(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    /// The error detail, present only on failure.
    pub fn error(&self) -> Option<&ErrorResult> {
        self.outcome.as_ref().err()
    }

    /// Milliseconds the server reported spending on the request
    /// (`ServerDuration` header), or 0 when not reported.
    pub fn server_duration(&self) -> i64 {
        self.server_duration
    }

    /// Milliseconds from sending the request to finishing reading the body.
    pub fn total_roundtrip(&self) -> i64 {
        self.total_roundtrip
    }

    /// Consume the envelope, keeping only the value.
    pub fn into_value(self) -> Option<T> {
        self.outcome.ok()
    }

    /// Consume the envelope into a standard `Result`.
    pub fn into_result(self) -> Result<T, ErrorResult> {
        self.outcome
    }

    /// Borrow the outcome as a standard `Result`.
    pub fn as_result(&self) -> Result<&T, &ErrorResult> {
        self.outcome.as_ref()
    }
}

/// Details of a failed API call.
///
/// Mirrors the server's problem-details body. When the body is empty or not
/// JSON, `title` is set to the HTTP status line and `content` holds whatever
/// text was returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    /// Problem type URI
    #[serde(rename = "type", alias = "Type", default)]
    pub error_type: Option<String>,
    /// Short human-readable summary
    #[serde(alias = "Title", default)]
    pub title: String,
    /// HTTP status reported in the body
    #[serde(alias = "Status", default)]
    pub status: Option<i32>,
    /// Validation messages keyed by field name
    #[serde(alias = "Errors", default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
    /// Raw response body
    #[serde(skip)]
    pub content: String,
}

impl ErrorResult {
    /// Build an error detail from a failed response's status and raw body.
    pub(crate) fn from_response(status: StatusCode, content: String) -> Self {
        let status_line = status_line(status);

        let parsed = if content.trim().is_empty() {
            None
        } else {
            let document = serde_json::from_str::<Value>(&content).and_then(|value| {
                if value.is_object() {
                    serde_json::from_value::<ErrorResult>(value)
                } else {
                    Err(serde::de::Error::custom("expected a JSON object"))
                }
            });
            match document {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    tracing::warn!(
                        status = status.as_u16(),
                        error = %err,
                        "Error response body is not a problem-details document"
                    );
                    None
                }
            }
        };

        let mut result = parsed.unwrap_or_default();
        if result.title.is_empty() {
            result.title = status_line;
        }
        result.content = content;
        result
    }

    /// Field-level validation messages for `field`, if any.
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(Vec::as_slice)
    }
}

impl std::fmt::Display for ErrorResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.title, status),
            None => f.write_str(&self.title),
        }
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// Keys whose values are free-form JSON handed to the caller as-is.
const OPAQUE_KEYS: &[&str] = &["dependencies", "details"];

/// Rewrite every object key in `value` to snake_case so that camelCase,
/// PascalCase and upper-case server keys all match the model field names.
///
/// Values under [`OPAQUE_KEYS`] keep their original keys.
pub(crate) fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| {
                    let key = normalize_key(&key);
                    if OPAQUE_KEYS.contains(&key.as_str()) {
                        (key, value)
                    } else {
                        (key, normalize_keys(value))
                    }
                })
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Convert a JSON key to snake_case, treating runs of capitals as one word.
///
/// A digit run after a letter is its own word only when another word
/// follows it: `amount90Days` is `amount_90_days`, `address1` stays
/// `address1`.
pub(crate) fn normalize_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };

        if c.is_uppercase() {
            let next = chars.get(i + 1).copied();
            let starts_word = match prev {
                None => false,
                Some(p) if p == '_' => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                Some(_) => false,
            };
            if starts_word {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else if c.is_ascii_digit() && prev.is_some_and(char::is_alphabetic) {
            let after_run = chars[i..].iter().find(|d| !d.is_ascii_digit());
            if after_run.is_some_and(|a| a.is_uppercase()) {
                out.push('_');
            }
            out.push(c);
        } else {
            out.push(c);
        }
    }

    out
}
