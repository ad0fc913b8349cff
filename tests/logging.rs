//! Failures must leave an error event behind before they are returned

use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use translations_api_client::{ApiClient, ApiClientError, ClientConfig, TranslationsApi};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "logging-token";

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// `#[tokio::test]` runs on the current thread, so a thread-local default sees every event.
fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

#[tokio::test]
async fn test_error_response_logs_full_payload() {
    let (logs, _guard) = capture_logs();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translations/subscription"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"detail": "X", "request_id": "r-42"})),
        )
        .mount(&server)
        .await;
    let api = TranslationsApi::from_config(&ClientConfig::new(server.uri())).unwrap();

    let err = api.get_my_subscription::<Value>(TOKEN).await.unwrap_err();
    assert_eq!(err.detail(), Some(&json!("X")));

    let output = logs.contents();
    assert!(output.contains("ERROR"), "no error event in: {output}");
    assert!(output.contains("server returned an error response"), "{output}");
    assert!(
        output.contains(r#"payload={"detail":"X","request_id":"r-42"}"#),
        "payload not logged in full: {output}"
    );
    assert!(output.contains("500"), "{output}");
    assert!(!output.contains(TOKEN), "token leaked into logs: {output}");
}

#[tokio::test]
async fn test_unreadable_error_response_logs_status() {
    let (logs, _guard) = capture_logs();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translations/history"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    let api = TranslationsApi::from_config(&ClientConfig::new(server.uri())).unwrap();

    let err = api
        .get_my_translation_history::<Value>(TOKEN, Default::default())
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(502));

    let output = logs.contents();
    assert!(output.contains("server returned an unreadable error response"), "{output}");
    assert!(output.contains("502 Bad Gateway"), "{output}");
}

#[tokio::test]
async fn test_transport_failure_is_logged() {
    let (logs, _guard) = capture_logs();
    // Nothing listens on port 1.
    let api = TranslationsApi::from_config(&ClientConfig::new("http://127.0.0.1:1")).unwrap();

    let err = api.get_admin_subscriptions::<Value>(TOKEN).await.unwrap_err();
    assert!(matches!(
        err,
        ApiClientError::NetworkIssue(_) | ApiClientError::RequestFailed(_)
    ));

    let output = logs.contents();
    assert!(output.contains("ERROR"), "no error event in: {output}");
    assert!(
        output.contains("request failed before a response was received"),
        "{output}"
    );
}

#[test]
fn test_invalid_base_url_is_logged() {
    let (logs, _guard) = capture_logs();

    let result = ApiClient::new(&ClientConfig::new("not a url"));
    assert!(matches!(result, Err(ApiClientError::BaseUrlInvalid(_))));

    let output = logs.contents();
    assert!(output.contains("invalid base URL"), "{output}");
    assert!(output.contains("not a url"), "{output}");
}

#[test]
fn test_invalid_token_is_logged_without_token() {
    let (logs, _guard) = capture_logs();
    let client = ApiClient::new(&ClientConfig::new("http://localhost:8080")).unwrap();

    let result = client.bearer_headers("secret\nvalue");
    assert!(matches!(result, Err(ApiClientError::InvalidToken(_))));

    let output = logs.contents();
    assert!(output.contains("bearer token is not a valid header value"), "{output}");
    assert!(!output.contains("secret"), "token leaked into logs: {output}");
}
