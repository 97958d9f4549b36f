use std::time::Duration;

use crate::ai_types::{ChatRequest, Message};
use crate::client::LlmClient;
use crate::error::LlmError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer, max_retries: usize) -> LlmClient {
    LlmClient::new("test-key".to_owned(), server.uri(), Duration::from_secs(5))
        .unwrap()
        .with_model("test-model".to_owned())
        .with_max_retries(max_retries)
}

fn create_test_request() -> ChatRequest {
    ChatRequest {
        model: "test-model".to_owned(),
        messages: vec![Message::user("hello")],
        temperature: 0.0,
    }
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [{
            "message": {
                "content": content,
                "role": "assistant"
            }
        }]
    }))
}

#[tokio::test]
async fn test_success_on_first_attempt() {
    let server = MockServer::start().await;
    let client = create_client(&server, 0);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(completion("test response"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.chat_completion(&create_test_request()).await.unwrap();
    assert_eq!(result, "test response");
}

#[tokio::test]
async fn test_no_retry_by_default() {
    let server = MockServer::start().await;
    let client = create_client(&server, 0);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.chat_completion(&create_test_request()).await.unwrap_err();
    assert!(matches!(err, LlmError::HttpStatus { code: 503, .. }));
}

#[tokio::test]
async fn test_retry_on_429_then_success() {
    let server = MockServer::start().await;
    let client = create_client(&server, 1);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion("success after retry"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit exceeded"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let result = client.chat_completion(&create_test_request()).await.unwrap();
    assert_eq!(result, "success after retry");
}

#[tokio::test]
async fn test_no_retry_on_401() {
    let server = MockServer::start().await;
    let client = create_client(&server, 2);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let err_msg = client.chat_completion(&create_test_request()).await.unwrap_err().to_string();
    assert!(err_msg.contains("401"));
    assert!(err_msg.contains("Unauthorized"));
}

#[tokio::test]
async fn test_all_retries_exhausted() {
    let server = MockServer::start().await;
    let client = create_client(&server, 1);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(2)
        .mount(&server)
        .await;

    let err = client.chat_completion(&create_test_request()).await.unwrap_err();
    assert!(matches!(err, LlmError::RetriesExhausted(_)));
    let err_msg = err.to_string();
    assert!(err_msg.contains("503"));
    assert!(err_msg.contains("Service Unavailable"));
}

#[tokio::test]
async fn test_empty_choices_is_an_error() {
    let server = MockServer::start().await;
    let client = create_client(&server, 0);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client.chat_completion(&create_test_request()).await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    let client = create_client(&server, 0);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client.chat_completion(&create_test_request()).await.unwrap_err();
    assert!(matches!(err, LlmError::JsonParse { .. }));
    assert!(err.to_string().contains("gateway"));
}

#[test]
fn test_debug_redacts_api_key() {
    let client = LlmClient::new(
        "sk-very-secret".to_owned(),
        "http://localhost".to_owned(),
        Duration::from_secs(1),
    )
    .unwrap();
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("sk-very-secret"));
}
