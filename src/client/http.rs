//! HTTP client implementation for the Platform API.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::api::{
    ActivitiesService, ApiKeysService, AppEnrollmentsService, ApplicationsService,
    AttachmentsService, CodeDefinitionsService, CompaniesService, ContactsService,
    CreditMemosAppliedService, CurrenciesService, CustomFieldDefinitionsService,
    CustomFieldValuesService, DefinitionsService, EmailsService, InvoiceHistoryService,
    InvoicesService, LeadsService, NotesService, PaymentsAppliedService, PaymentsService,
    ProvisioningService, ReportsService, StatusService, SyncService, UserAccountsService,
    UserRolesService, WebhooksService,
};
use crate::{Environment, Error, Result};

use super::config::{ClientConfig, Credentials};
use super::request::{Request, RequestBody};
use super::response::{normalize_keys, ApiResponse, ErrorResult};

/// Response header carrying the server's own processing time in milliseconds.
pub const SERVER_DURATION_HEADER: &str = "ServerDuration";

// Header names are case-insensitive on the wire; `http` stores them lowercase.
const SDK_NAME: HeaderName = HeaderName::from_static("sdkname");
const SDK_VERSION: HeaderName = HeaderName::from_static("sdkversion");
const MACHINE_NAME: HeaderName = HeaderName::from_static("machinename");
const APPLICATION_NAME: HeaderName = HeaderName::from_static("applicationname");

/// The main client for interacting with the Platform API.
///
/// The client owns one connection pool and one credential slot; every
/// service handed out by it shares both. Cloning the client is cheap.
///
/// # Example
///
/// ```no_run
/// use platform_api::{PlatformClient, Environment};
/// use platform_api::api::QueryOptions;
///
/// # async fn example() -> platform_api::Result<()> {
/// let client = PlatformClient::with_api_key(Environment::Sandbox, "my-api-key")?;
///
/// let page = client
///     .companies()
///     .query(&QueryOptions::new().page_size(50))
///     .await?;
///
/// match page.as_result() {
///     Ok(companies) => println!("{} companies", companies.records.len()),
///     Err(err) => println!("query failed: {}", err),
/// }
/// # Ok(())
/// # }
/// ```
pub struct PlatformClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) env: Environment,
    pub(crate) credentials: RwLock<Option<Credentials>>,
    pub(crate) config: ClientConfig,
}

impl PlatformClient {
    /// Create an unauthenticated client for the given environment.
    ///
    /// Only [`status().ping()`](crate::api::StatusService::ping) works without
    /// credentials; install one with [`set_bearer_token`](Self::set_bearer_token)
    /// or [`set_api_key`](Self::set_api_key).
    pub fn new(env: Environment) -> Result<Self> {
        Self::with_config(env, ClientConfig::default())
    }

    /// Create a client authenticated with a bearer token.
    pub fn with_bearer_token(env: Environment, token: impl Into<String>) -> Result<Self> {
        Self::with_credentials(env, Credentials::bearer_token(token), ClientConfig::default())
    }

    /// Create a client authenticated with an API key.
    pub fn with_api_key(env: Environment, key: impl Into<String>) -> Result<Self> {
        Self::with_credentials(env, Credentials::api_key(key), ClientConfig::default())
    }

    /// Create a client with credentials and custom configuration.
    pub fn with_credentials(
        env: Environment,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::build(env, Some(credentials), config)
    }

    /// Create an unauthenticated client with custom configuration.
    pub fn with_config(env: Environment, config: ClientConfig) -> Result<Self> {
        Self::build(env, None, config)
    }

    fn build(
        env: Environment,
        credentials: Option<Credentials>,
        config: ClientConfig,
    ) -> Result<Self> {
        let base = url::Url::parse(env.api_base_url())?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported URL scheme '{}' for {}",
                base.scheme(),
                env
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                env,
                credentials: RwLock::new(credentials),
                config,
            }),
        })
    }

    /// Authenticate subsequent calls with a bearer token, replacing any API key.
    pub async fn set_bearer_token(&self, token: impl Into<String>) {
        *self.inner.credentials.write().await = Some(Credentials::bearer_token(token));
    }

    /// Authenticate subsequent calls with an API key, replacing any bearer token.
    pub async fn set_api_key(&self, key: impl Into<String>) {
        *self.inner.credentials.write().await = Some(Credentials::api_key(key));
    }

    /// Remove the installed credential.
    pub async fn clear_credentials(&self) {
        *self.inner.credentials.write().await = None;
    }

    /// Get the current environment.
    pub fn environment(&self) -> &Environment {
        &self.inner.env
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Issue a raw request through the shared transport.
    ///
    /// Services call this for every operation; it is public for endpoints
    /// this crate does not wrap yet.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<ApiResponse<T>> {
        self.inner.execute(request).await
    }

    /// Get the activities service.
    pub fn activities(&self) -> ActivitiesService {
        ActivitiesService::new(self.inner.clone())
    }

    /// Get the API keys service.
    pub fn api_keys(&self) -> ApiKeysService {
        ApiKeysService::new(self.inner.clone())
    }

    /// Get the app enrollments service.
    pub fn app_enrollments(&self) -> AppEnrollmentsService {
        AppEnrollmentsService::new(self.inner.clone())
    }

    /// Get the applications service.
    pub fn applications(&self) -> ApplicationsService {
        ApplicationsService::new(self.inner.clone())
    }

    /// Get the attachments service.
    pub fn attachments(&self) -> AttachmentsService {
        AttachmentsService::new(self.inner.clone())
    }

    /// Get the code definitions service.
    pub fn code_definitions(&self) -> CodeDefinitionsService {
        CodeDefinitionsService::new(self.inner.clone())
    }

    /// Get the companies service.
    pub fn companies(&self) -> CompaniesService {
        CompaniesService::new(self.inner.clone())
    }

    /// Get the contacts service.
    pub fn contacts(&self) -> ContactsService {
        ContactsService::new(self.inner.clone())
    }

    /// Get the applied credit memos service.
    pub fn credit_memos_applied(&self) -> CreditMemosAppliedService {
        CreditMemosAppliedService::new(self.inner.clone())
    }

    /// Get the currencies service.
    pub fn currencies(&self) -> CurrenciesService {
        CurrenciesService::new(self.inner.clone())
    }

    /// Get the custom field definitions service.
    pub fn custom_field_definitions(&self) -> CustomFieldDefinitionsService {
        CustomFieldDefinitionsService::new(self.inner.clone())
    }

    /// Get the custom field values service.
    pub fn custom_field_values(&self) -> CustomFieldValuesService {
        CustomFieldValuesService::new(self.inner.clone())
    }

    /// Get the reference definitions service.
    pub fn definitions(&self) -> DefinitionsService {
        DefinitionsService::new(self.inner.clone())
    }

    /// Get the emails service.
    pub fn emails(&self) -> EmailsService {
        EmailsService::new(self.inner.clone())
    }

    /// Get the invoices service.
    pub fn invoices(&self) -> InvoicesService {
        InvoicesService::new(self.inner.clone())
    }

    /// Get the invoice history service.
    pub fn invoice_history(&self) -> InvoiceHistoryService {
        InvoiceHistoryService::new(self.inner.clone())
    }

    /// Get the leads service.
    pub fn leads(&self) -> LeadsService {
        LeadsService::new(self.inner.clone())
    }

    /// Get the notes service.
    pub fn notes(&self) -> NotesService {
        NotesService::new(self.inner.clone())
    }

    /// Get the payments service.
    pub fn payments(&self) -> PaymentsService {
        PaymentsService::new(self.inner.clone())
    }

    /// Get the applied payments service.
    pub fn payments_applied(&self) -> PaymentsAppliedService {
        PaymentsAppliedService::new(self.inner.clone())
    }

    /// Get the provisioning service.
    pub fn provisioning(&self) -> ProvisioningService {
        ProvisioningService::new(self.inner.clone())
    }

    /// Get the reports service.
    pub fn reports(&self) -> ReportsService {
        ReportsService::new(self.inner.clone())
    }

    /// Get the status service.
    pub fn status(&self) -> StatusService {
        StatusService::new(self.inner.clone())
    }

    /// Get the sync service.
    pub fn sync(&self) -> SyncService {
        SyncService::new(self.inner.clone())
    }

    /// Get the user accounts service.
    pub fn user_accounts(&self) -> UserAccountsService {
        UserAccountsService::new(self.inner.clone())
    }

    /// Get the user roles service.
    pub fn user_roles(&self) -> UserRolesService {
        UserRolesService::new(self.inner.clone())
    }

    /// Get the webhooks service.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.inner.clone())
    }
}

impl ClientInner {
    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        self.env.api_base_url()
    }

    /// Build identification and authentication headers.
    pub(crate) async fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        insert_header(&mut headers, SDK_NAME, &self.config.sdk_name)?;
        insert_header(&mut headers, SDK_VERSION, &self.config.sdk_version)?;
        insert_header(&mut headers, MACHINE_NAME, &self.config.machine_name)?;
        if let Some(ref name) = self.config.application_name {
            insert_header(&mut headers, APPLICATION_NAME, name)?;
        }

        if let Some(ref credentials) = *self.credentials.read().await {
            let (name, value) = credentials.to_header()?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// Send a request and classify the response into an [`ApiResponse`].
    ///
    /// Non-2xx statuses are returned in-band; only transport failures,
    /// unreadable upload files and undecodable 2xx bodies are `Err`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<ApiResponse<T>> {
        let started = Instant::now();

        let url = format!("{}{}", self.base_url(), request.path_and_query());
        let headers = self.build_headers().await?;

        tracing::debug!(method = %request.method, path = %request.path, "Sending request");

        let mut builder = self
            .http
            .request(request.method.as_reqwest(), &url)
            .headers(headers);

        builder = match request.body {
            RequestBody::None => builder,
            RequestBody::Json(ref body) => builder.json(body),
            RequestBody::Upload(ref path) => builder.multipart(upload_form(path).await?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let server_duration = parse_server_duration(response.headers());

        let outcome = if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(decode_success::<T>(status, &bytes)?)
        } else {
            let content = response.text().await?;
            Err(ErrorResult::from_response(status, content))
        };

        let total_roundtrip = i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX);

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            server_duration,
            total_roundtrip,
            "Received response"
        );

        Ok(ApiResponse::new(
            status.as_u16(),
            outcome,
            server_duration,
            total_roundtrip,
        ))
    }
}

fn insert_header(headers: &mut HeaderMap, name: HeaderName, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value)
        .map_err(|_| Error::InvalidHeader(format!("{} contains invalid characters", name)))?;
    headers.insert(name, value);
    Ok(())
}

/// Read the `ServerDuration` header, defaulting to 0 when absent or malformed.
fn parse_server_duration(headers: &HeaderMap) -> i64 {
    headers
        .get(SERVER_DURATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Wrap a local file as a single multipart part named `file`.
async fn upload_form(path: &Path) -> Result<Form> {
    let bytes = tokio::fs::read(path).await.map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());

    tracing::debug!(file = %file_name, size = bytes.len(), "Attaching upload");

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("application/octet-stream")?;

    Ok(Form::new().part("file", part))
}

/// Deserialize a successful body, matching keys case-insensitively.
pub(crate) fn decode_success<T: DeserializeOwned>(status: StatusCode, bytes: &[u8]) -> Result<T> {
    let decode_error = |source: serde_json::Error| Error::Decode {
        status: status.as_u16(),
        body: String::from_utf8_lossy(bytes).into_owned(),
        source,
    };

    let value = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(bytes).map_err(decode_error)?
    };

    serde_json::from_value(normalize_keys(value)).map_err(decode_error)
}

impl Clone for PlatformClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for PlatformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformClient")
            .field("environment", &self.inner.env)
            .field("config", &self.inner.config)
            .finish()
    }
}
