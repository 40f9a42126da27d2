//! Integration tests for `TelegramNotifier` using wiremock HTTP mocks.

use serde_json::json;
use stockwatch_notify::{Notifier, NotifyError, TelegramNotifier};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_notifier(base_url: &str) -> TelegramNotifier {
    TelegramNotifier::with_base_url("123:test-token", "-1001", 5, base_url)
        .expect("notifier construction should not fail")
}

#[tokio::test]
async fn send_posts_chat_id_and_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:test-token/sendMessage"))
        .and(body_json(json!({ "chat_id": "-1001", "text": "📊 realtime 库存汇总" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    test_notifier(&server.uri())
        .send("📊 realtime 库存汇总")
        .await
        .expect("send should succeed");
}

#[tokio::test]
async fn send_accepts_trailing_slash_in_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:test-token/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    test_notifier(&format!("{}/", server.uri()))
        .send("hi")
        .await
        .expect("send should succeed");
}

#[tokio::test]
async fn send_maps_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let err = test_notifier(&server.uri()).send("hi").await.unwrap_err();

    match err {
        NotifyError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("chat not found"), "body was: {body}");
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn send_error_does_not_leak_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let err = test_notifier(&server.uri()).send("hi").await.unwrap_err();
    assert!(!err.to_string().contains("test-token"), "error was: {err}");
}

#[test]
fn rejects_invalid_base_url() {
    let err = TelegramNotifier::with_base_url("123:t", "1", 5, "not a url").unwrap_err();
    assert!(
        matches!(err, NotifyError::InvalidBaseUrl(ref base) if base == "not a url"),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}
