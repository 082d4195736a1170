use secrecy::Secret;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use voice_assistant::config::{GeminiConfig, OpenAiConfig};
use voice_assistant::domain::{ProviderError, TextGenerator};
use voice_assistant::providers::{GeminiGenerator, OpenAiChatGenerator};

const TIMEOUT: Duration = Duration::from_secs(5);

fn openai(server: &MockServer) -> OpenAiChatGenerator {
    let config = OpenAiConfig {
        api_key: Some(Secret::new("sk-test".to_string())),
        base_url: server.uri(),
        model: "gpt-4o".to_string(),
        max_tokens: 150,
    };
    OpenAiChatGenerator::new(&config, TIMEOUT).expect("Failed to build OpenAI adapter")
}

fn gemini(server: &MockServer) -> GeminiGenerator {
    let config = GeminiConfig {
        api_key: Some(Secret::new("g-test".to_string())),
        base_url: server.uri(),
        model: "gemini-1.5-flash".to_string(),
    };
    GeminiGenerator::new(&config, TIMEOUT).expect("Failed to build Gemini adapter")
}

#[tokio::test]
async fn test_openai_sends_system_and_user_messages() {
    let mock_server = MockServer::start().await;

    let expected_body = json!({
        "model": "gpt-4o",
        "messages": [
            { "role": "system", "content": "Be brief." },
            { "role": "user", "content": "What time is it?" }
        ],
        "max_tokens": 150
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Check your clock." } }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reply = openai(&mock_server)
        .generate("Be brief.", "What time is it?")
        .await
        .expect("generation should succeed");

    assert_eq!(reply, "Check your clock.");
}

#[tokio::test]
async fn test_openai_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&mock_server)
        .await;

    let err = openai(&mock_server)
        .generate("Be brief.", "hello")
        .await
        .unwrap_err();

    match err {
        ProviderError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_openai_missing_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&mock_server)
        .await;

    let err = openai(&mock_server)
        .generate("Be brief.", "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_openai_empty_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "" } }
            ]
        })))
        .mount(&mock_server)
        .await;

    let err = openai(&mock_server)
        .generate("Be brief.", "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_gemini_empty_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [ { "content": { "parts": [ { "text": "" } ] } } ]
        })))
        .mount(&mock_server)
        .await;

    let err = gemini(&mock_server)
        .generate("Be brief.", "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_openai_unparseable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let err = openai(&mock_server)
        .generate("Be brief.", "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_gemini_sends_single_combined_prompt() {
    let mock_server = MockServer::start().await;

    let expected_body = json!({
        "contents": [
            { "parts": [ { "text": "Be brief.\n\nUser: What time is it?" } ] }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "g-test"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [ { "text": "Check " }, { "text": "your clock." } ]
                    },
                    "finishReason": "STOP"
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reply = gemini(&mock_server)
        .generate("Be brief.", "What time is it?")
        .await
        .expect("generation should succeed");

    assert_eq!(reply, "Check your clock.");
}

#[tokio::test]
async fn test_gemini_blocked_prompt_has_no_candidates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&mock_server)
        .await;

    let err = gemini(&mock_server)
        .generate("Be brief.", "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_gemini_quota_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_string("RESOURCE_EXHAUSTED"))
        .mount(&mock_server)
        .await;

    let err = gemini(&mock_server)
        .generate("Be brief.", "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Status { status: 429, .. }));
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() {
    let config = OpenAiConfig {
        api_key: Some(Secret::new("sk-test".to_string())),
        // Nothing listens on port 1
        base_url: "http://127.0.0.1:1".to_string(),
        model: "gpt-4o".to_string(),
        max_tokens: 150,
    };
    let generator = OpenAiChatGenerator::new(&config, TIMEOUT).unwrap();

    let err = generator.generate("Be brief.", "hello").await.unwrap_err();

    assert!(matches!(err, ProviderError::Transport(_)));
}
