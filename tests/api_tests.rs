//! Integration tests for platform-api-rs
//!
//! Every test runs against a local wiremock server, so no credentials or
//! network access are needed.
//!
//! Run with: cargo test --test api_tests
//!
//! Set RUST_LOG=platform_api=debug to see transport logging.

use std::sync::Once;
use std::time::Duration;

use rust_decimal_macros::dec;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use platform_api::api::{QueryOptions, RetrieveOptions};
use platform_api::client::{Method, QueryParams, Request};
use platform_api::models::{ArHeaderOptions, Company, Note};
use platform_api::prelude::*;

static INIT: Once = Once::new();

const COMPANY_ID: &str = "11111111-1111-1111-1111-111111111111";

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Start a mock server and a client authenticated with an API key against it
async fn setup() -> (MockServer, PlatformClient) {
    init_logging();
    let server = MockServer::start().await;
    let client = PlatformClient::with_api_key(Environment::custom(server.uri()), "test-key")
        .expect("client should build");
    (server, client)
}

fn company_id() -> Uuid {
    Uuid::parse_str(COMPANY_ID).unwrap()
}

// =============================================================================
// Transport Tests
// =============================================================================

mod transport_tests {
    use super::*;

    #[tokio::test]
    async fn test_retrieve_success_with_pascal_case_body() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/v1/Companies/{}", COMPANY_ID)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "CompanyId": COMPANY_ID,
                        "CompanyName": "Acme",
                        "CompanyType": "Customer",
                        "IsActive": true
                    }))
                    .insert_header("ServerDuration", "42"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client
            .companies()
            .retrieve(company_id(), &RetrieveOptions::new())
            .await
            .expect("transport should succeed");

        assert!(response.success());
        assert_eq!(response.status(), 200);
        assert_eq!(response.server_duration(), 42);
        assert!(response.total_roundtrip() >= 0);
        assert!(response.error().is_none());

        let company = response.value().expect("value on success");
        assert_eq!(company.company_id, Some(company_id()));
        assert_eq!(company.company_name.as_deref(), Some("Acme"));
        assert_eq!(company.is_active, Some(true));
    }

    /// `{"CompanyName":"Acme"}` compressed with gzip.
    const GZIPPED_COMPANY: [u8; 40] = [
        0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x03, 0xab, 0x56, 0x72, 0xce, 0xcf,
        0x2d, 0x48, 0xcc, 0xab, 0xf4, 0x4b, 0xcc, 0x4d, 0x55, 0xb2, 0x52, 0x72, 0x4c, 0x06, 0x52,
        0xb5, 0x00, 0x91, 0x1d, 0x09, 0xa2, 0x16, 0x00, 0x00, 0x00,
    ];

    #[tokio::test]
    async fn test_gzip_response_is_decompressed() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/v1/Companies/{}", COMPANY_ID)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(GZIPPED_COMPANY.to_vec(), "application/json")
                    .insert_header("Content-Encoding", "gzip"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client
            .companies()
            .retrieve(company_id(), &RetrieveOptions::new())
            .await
            .expect("gzip body should decode");

        assert!(response.success());
        let company = response.value().expect("value on success");
        assert_eq!(company.company_name.as_deref(), Some("Acme"));

        let requests = server.received_requests().await.unwrap();
        let accept_encoding = requests[0]
            .headers
            .get("accept-encoding")
            .expect("accept-encoding advertised")
            .to_str()
            .unwrap();
        assert!(accept_encoding.contains("gzip"));
        assert!(accept_encoding.contains("deflate"));
        assert!(accept_encoding.contains("br"));
    }

    #[tokio::test]
    async fn test_camel_case_body_parses_identically() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/v1/Companies/{}", COMPANY_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "companyId": COMPANY_ID,
                "companyName": "Acme",
                "companyType": "Customer",
                "isActive": true
            })))
            .mount(&server)
            .await;

        let camel = client
            .companies()
            .retrieve(company_id(), &RetrieveOptions::new())
            .await
            .unwrap()
            .into_value()
            .unwrap();

        let expected = Company {
            company_id: Some(company_id()),
            company_name: Some("Acme".to_string()),
            company_type: Some("Customer".to_string()),
            is_active: Some(true),
            ..Default::default()
        };
        assert_eq!(camel, expected);
    }

    #[tokio::test]
    async fn test_unknown_fields_are_ignored() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/v1/Companies/{}", COMPANY_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "companyName": "Acme",
                "brandNewServerField": { "nested": [1, 2, 3] }
            })))
            .mount(&server)
            .await;

        let response = client
            .companies()
            .retrieve(company_id(), &RetrieveOptions::new())
            .await
            .unwrap();
        assert_eq!(
            response.value().and_then(|c| c.company_name.as_deref()),
            Some("Acme")
        );
    }

    #[tokio::test]
    async fn test_server_duration_missing_or_malformed_is_zero() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "loggedIn": true }))
                    .insert_header("ServerDuration", "fast"),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;

        let malformed = client.status().ping().await.unwrap();
        assert!(malformed.success());
        assert_eq!(malformed.server_duration(), 0);

        Mock::given(method("GET"))
            .and(path("/api/v1/Status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "loggedIn": true })))
            .mount(&server)
            .await;

        let missing = client.status().ping().await.unwrap();
        assert_eq!(missing.server_duration(), 0);
        assert_eq!(missing.value().and_then(|s| s.logged_in), Some(true));
    }

    #[tokio::test]
    async fn test_query_omits_unset_parameters() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Companies/query"))
            .and(query_param("pageSize", "250"))
            .and(query_param("order", "companyName asc"))
            .and(query_param_is_missing("filter"))
            .and(query_param_is_missing("include"))
            .and(query_param_is_missing("pageNumber"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "records": [{ "companyName": "Acme" }, { "companyName": "Globex" }],
                "totalCount": 2,
                "pageSize": 250,
                "pageNumber": 0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client
            .companies()
            .query(&QueryOptions::new().order("companyName asc").page_size(250))
            .await
            .unwrap();

        let page = response.value().unwrap();
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.total_count, Some(2));
        assert_eq!(page.records[1].company_name.as_deref(), Some("Globex"));

        let requests = server.received_requests().await.unwrap();
        let query = requests[0].url.query().unwrap_or_default();
        assert!(!query.contains("filter"));
        assert!(!query.contains("include="));
    }

    #[tokio::test]
    async fn test_json_body_is_sent_for_create() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/Notes"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "noteId": COMPANY_ID,
                "noteText": "Called customer"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let note = Note {
            note_text: Some("Called customer".to_string()),
            ..Default::default()
        };
        let response = client.notes().create(&[note]).await.unwrap();
        let created = response.value().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].note_id, Some(company_id()));

        let requests = server.received_requests().await.unwrap();
        let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent[0]["noteText"], "Called customer");
        assert!(sent[0].get("note_text").is_none());
    }

    #[tokio::test]
    async fn test_decimal_amounts_decode() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Reports/cashflow"))
            .and(query_param("timeWindowDays", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "PaymentsCollected": 3,
                "PaymentsCollectedAmount": 1250.50,
                "InvoicesBilled": 5,
                "InvoicesBilledAmount": "4000.00"
            })))
            .mount(&server)
            .await;

        let report = client
            .reports()
            .cash_flow(Some(30))
            .await
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(report.payments_collected, Some(3));
        assert_eq!(report.payments_collected_amount, Some(dec!(1250.50)));
        assert_eq!(report.invoices_billed_amount, Some(dec!(4000.00)));
    }

    #[tokio::test]
    async fn test_raw_execute_with_custom_request() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Invoices/query"))
            .and(query_param("filter", "invoiceStatusCode eq 'Open'"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "records": [] })))
            .mount(&server)
            .await;

        let request = Request::new(Method::Get, "/api/v1/Invoices/query").query(
            QueryParams::new()
                .with("filter", Some("invoiceStatusCode eq 'Open'"))
                .with("pageSize", None::<i32>),
        );
        let response: ApiResponse<FetchResult<Invoice>> = client.execute(request).await.unwrap();
        assert!(response.success());
        assert!(response.value().unwrap().records.is_empty());
    }
}

// =============================================================================
// Error Classification Tests
// =============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_problem_details_body() {
        let (server, client) = setup().await;

        let body = json!({
            "type": "https://tools.ietf.org/html/rfc7231#section-6.5.4",
            "title": "Not Found",
            "status": 404
        });
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/Companies/{}", COMPANY_ID)))
            .respond_with(ResponseTemplate::new(404).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let response = client
            .companies()
            .retrieve(company_id(), &RetrieveOptions::new())
            .await
            .expect("HTTP errors are returned in-band");

        assert!(!response.success());
        assert_eq!(response.status(), 404);
        assert!(response.value().is_none());

        let error = response.error().unwrap();
        assert_eq!(error.title, "Not Found");
        assert_eq!(error.status, Some(404));
        assert_eq!(
            error.error_type.as_deref(),
            Some("https://tools.ietf.org/html/rfc7231#section-6.5.4")
        );
        assert_eq!(serde_json::from_str::<serde_json::Value>(&error.content).unwrap(), body);
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/Companies"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "title": "One or more validation errors occurred.",
                "status": 400,
                "errors": { "CompanyName": ["The CompanyName field is required."] }
            })))
            .mount(&server)
            .await;

        let response = client.companies().create(&[Company::default()]).await.unwrap();
        let error = response.error().unwrap();
        assert_eq!(
            error.field_errors("CompanyName"),
            Some(&["The CompanyName field is required.".to_string()][..])
        );
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_status_line() {
        let (server, client) = setup().await;

        Mock::given(method("DELETE"))
            .and(path(format!("/api/v1/Companies/{}", COMPANY_ID)))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let response = client.companies().delete(company_id()).await.unwrap();
        assert!(!response.success());
        let error = response.error().unwrap();
        assert_eq!(error.title, "500 Internal Server Error");
        assert_eq!(error.content, "");
    }

    #[tokio::test]
    async fn test_non_json_error_body_keeps_content() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Status"))
            .respond_with(
                ResponseTemplate::new(502).set_body_raw("<html>Bad Gateway</html>", "text/html"),
            )
            .mount(&server)
            .await;

        let response = client.status().ping().await.unwrap();
        let error = response.error().unwrap();
        assert_eq!(error.title, "502 Bad Gateway");
        assert_eq!(error.content, "<html>Bad Gateway</html>");
        assert_eq!(error.status, None);
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
            .mount(&server)
            .await;

        let err = client.status().ping().await.unwrap_err();
        match err {
            Error::Decode { status, body, .. } => {
                assert_eq!(status, 200);
                assert_eq!(body, "definitely not json");
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        init_logging();
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client =
            PlatformClient::new(Environment::custom(format!("http://127.0.0.1:{}", port))).unwrap();

        let err = client.status().ping().await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(err.is_connect());
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        init_logging();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/Status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = ClientConfig::new().with_timeout(Duration::from_millis(100));
        let client = PlatformClient::with_config(Environment::custom(server.uri()), config).unwrap();

        let err = client.status().ping().await.unwrap_err();
        assert!(err.is_timeout());
    }
}

// =============================================================================
// Header Tests
// =============================================================================

mod header_tests {
    use super::*;

    #[tokio::test]
    async fn test_identification_headers() {
        init_logging();
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Status"))
            .and(header("Accept", "application/json"))
            .and(header("SdkName", "Rust"))
            .and(header("SdkVersion", env!("CARGO_PKG_VERSION")))
            .and(header("MachineName", "build-agent-07"))
            .and(header("ApplicationName", "ledger-sync"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::new()
            .with_machine_name("build-agent-07")
            .with_application_name("ledger-sync");
        let client = PlatformClient::with_config(Environment::custom(server.uri()), config).unwrap();

        let response = client.status().ping().await.unwrap();
        assert!(response.success());
    }

    #[tokio::test]
    async fn test_application_name_omitted_when_unset() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        client.status().ping().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("applicationname").is_none());
    }

    #[tokio::test]
    async fn test_api_key_header() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Status"))
            .and(header("Api-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client.status().ping().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_credentials_are_mutually_exclusive() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        client.set_bearer_token("jwt-token").await;
        client.status().ping().await.unwrap();

        client.set_api_key("second-key").await;
        client.status().ping().await.unwrap();

        client.clear_credentials().await;
        client.status().ping().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);

        let bearer = &requests[0].headers;
        assert_eq!(bearer.get("authorization").unwrap(), "Bearer jwt-token");
        assert!(bearer.get("api-key").is_none());

        let api_key = &requests[1].headers;
        assert_eq!(api_key.get("api-key").unwrap(), "second-key");
        assert!(api_key.get("authorization").is_none());

        let anonymous = &requests[2].headers;
        assert!(anonymous.get("authorization").is_none());
        assert!(anonymous.get("api-key").is_none());
    }

    #[tokio::test]
    async fn test_services_share_credentials() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Status"))
            .and(header("Authorization", "Bearer rotated"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let status = client.status();
        client.clone().set_bearer_token("rotated").await;
        assert!(status.ping().await.unwrap().success());
    }
}

// =============================================================================
// Upload Tests
// =============================================================================

mod upload_tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_attachment_upload_is_multipart() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/Attachments"))
            .and(query_param("tableName", "Invoices"))
            .and(query_param("objectId", COMPANY_ID))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "attachmentId": COMPANY_ID,
                "fileName": "INV-1001.pdf"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("INV-1001.pdf");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(b"%PDF-1.7 fake invoice").unwrap();
        drop(file);

        let response = client
            .attachments()
            .upload("Invoices", company_id(), &file_path)
            .await
            .unwrap();
        assert!(response.success());
        assert_eq!(response.value().unwrap()[0].file_name.as_deref(), Some("INV-1001.pdf"));

        let requests = server.received_requests().await.unwrap();
        let request = &requests[0];
        let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data"));

        let body = String::from_utf8_lossy(&request.body);
        assert!(body.contains("name=\"file\""));
        assert!(body.contains("filename=\"INV-1001.pdf\""));
        assert!(body.contains("%PDF-1.7 fake invoice"));
    }

    #[tokio::test]
    async fn test_sync_zip_upload() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/Sync/zip"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "syncRequestId": COMPANY_ID,
                "statusCode": "Ready"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut file = tempfile::Builder::new().suffix(".zip").tempfile().unwrap();
        file.write_all(b"PK\x03\x04").unwrap();

        let response = client.sync().upload_zip(file.path()).await.unwrap();
        assert_eq!(
            response.value().and_then(|s| s.status_code.as_deref()),
            Some("Ready")
        );
    }

    #[tokio::test]
    async fn test_missing_upload_file_is_io_error() {
        let (server, client) = setup().await;

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.csv");

        let err = client
            .attachments()
            .upload("Companies", company_id(), &missing)
            .await
            .unwrap_err();

        match err {
            Error::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("expected io error, got {:?}", other),
        }
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}

// =============================================================================
// Service Path Tests
// =============================================================================

mod service_tests {
    use super::*;

    async fn mount_ok(server: &MockServer, verb: &str, route: String, body: serde_json::Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_custom_field_value_composite_key() {
        let (server, client) = setup().await;
        let definition = Uuid::nil();
        let record = company_id();

        mount_ok(
            &server,
            "PATCH",
            format!("/api/v1/CustomFieldValues/{}/{}", definition, record),
            json!({ "stringValue": "Gold" }),
        )
        .await;

        let response = client
            .custom_field_values()
            .update(definition, record, &json!({ "stringValue": "Gold" }))
            .await
            .unwrap();
        assert_eq!(
            response.value().and_then(|v| v.string_value.as_deref()),
            Some("Gold")
        );
    }

    #[tokio::test]
    async fn test_currency_rate_optional_params() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Currencies/EUR/USD"))
            .and(query_param("date", "2024-03-01"))
            .and(query_param_is_missing("dataProvider"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sourceCurrency": "EUR",
                "destinationCurrency": "USD",
                "currencyRate": 1.0842
            })))
            .expect(1)
            .mount(&server)
            .await;

        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 1);
        let rate = client
            .currencies()
            .currency_rate("EUR", "USD", date, None)
            .await
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(rate.currency_rate, Some(dec!(1.0842)));
    }

    #[tokio::test]
    async fn test_user_account_lifecycle_paths() {
        let (server, client) = setup().await;
        let id = company_id();

        mount_ok(
            &server,
            "DELETE",
            format!("/api/v1/UserAccounts/{}", id),
            json!({ "messages": ["disabled"] }),
        )
        .await;

        Mock::given(method("POST"))
            .and(path("/api/v1/UserAccounts/reenable"))
            .and(query_param("id", COMPANY_ID))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "messages": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let disabled = client.user_accounts().delete(id).await.unwrap();
        assert_eq!(
            disabled.value().and_then(|r| r.messages.clone()),
            Some(vec!["disabled".to_string()])
        );

        assert!(client.user_accounts().reenable(id).await.unwrap().success());
    }

    #[tokio::test]
    async fn test_view_endpoints() {
        let (server, client) = setup().await;

        mount_ok(
            &server,
            "GET",
            "/api/v1/Invoices/views/summary".to_string(),
            json!({ "records": [{ "invoiceNumber": "INV-1", "outstandingBalance": 10 }] }),
        )
        .await;
        mount_ok(
            &server,
            "GET",
            format!("/api/v1/Invoices/{}/pdf", COMPANY_ID),
            json!({ "downloadLink": "https://files.example.com/inv.pdf" }),
        )
        .await;

        let summaries = client.invoices().summaries(&QueryOptions::new()).await.unwrap();
        assert_eq!(
            summaries.value().unwrap().records[0].outstanding_balance,
            Some(dec!(10))
        );

        let pdf = client.invoices().retrieve_pdf(company_id()).await.unwrap();
        assert_eq!(
            pdf.value().and_then(|u| u.download_link.as_deref()),
            Some("https://files.example.com/inv.pdf")
        );
    }

    #[tokio::test]
    async fn test_ar_aging_header_params() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Reports/ar-header"))
            .and(query_param("reportDate", "2024-01-31"))
            .and(query_param_is_missing("companyId"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "TotalCustomers": 12,
                "DSO": 41.5
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = ArHeaderOptions {
            report_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 31),
            company_id: None,
        };
        let header = client
            .reports()
            .ar_aging_header(&options)
            .await
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(header.total_customers, Some(12));
        assert_eq!(header.dso, Some(dec!(41.5)));
    }
}
