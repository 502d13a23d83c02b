//! TelegramNotifier against a mocked Bot API.

use std::time::Duration;

use homework_common::error::NotifyError;
use homework_notifier::{Delivery, DeliveryTracker, Notifier, TelegramNotifier};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notifier(server: &MockServer) -> TelegramNotifier {
    TelegramNotifier::new(&server.uri(), "TEST_TOKEN", "100500", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_send_posts_chat_id_and_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/sendMessage"))
        .and(body_json(json!({"chat_id": "100500", "text": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
        .expect(1)
        .mount(&server)
        .await;

    notifier(&server).send("hello").await.unwrap();
}

#[tokio::test]
async fn test_api_error_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/sendMessage"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            json!({"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}),
        ))
        .mount(&server)
        .await;

    let err = notifier(&server).send("hello").await.unwrap_err();
    match err {
        NotifyError::Rejected { status, description } => {
            assert_eq!(status, 400);
            assert_eq!(description, "Bad Request: chat not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_api_is_transport_error() {
    // Nothing listens on port 1.
    let notifier =
        TelegramNotifier::new("http://127.0.0.1:1", "TEST_TOKEN", "100500", Duration::from_secs(2)).unwrap();
    let err = notifier.send("hello").await.unwrap_err();
    assert!(matches!(err, NotifyError::Transport(_)));
    assert!(!err.to_string().contains("TEST_TOKEN"));
}

#[tokio::test]
async fn test_empty_message_never_reaches_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(0)
        .mount(&server)
        .await;

    let err = notifier(&server).send("").await.unwrap_err();
    assert!(matches!(err, NotifyError::EmptyMessage));
}

#[tokio::test]
async fn test_long_message_sent_in_chunks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(2)
        .mount(&server)
        .await;

    notifier(&server).send(&"a".repeat(5000)).await.unwrap();
}

#[tokio::test]
async fn test_tracker_suppresses_repeat_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = notifier(&server);
    let mut tracker = DeliveryTracker::new();
    assert_eq!(tracker.deliver(&notifier, "same").await, Delivery::Sent);
    assert_eq!(tracker.deliver(&notifier, "same").await, Delivery::Duplicate);
}
