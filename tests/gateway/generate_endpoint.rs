use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use powwow::core::generation::Generator;
use powwow::core::providers::OpenAiResponsesProvider;
use powwow::transport::gateway::{AppState, MAX_BODY_SIZE, build_app};

fn marketing_json() -> Value {
    json!({
        "tagline": "Bread that shows up on time.",
        "value_proposition": "Fresh sourdough delivered before breakfast.",
        "aida": {
            "attention": "Still buying sad supermarket loaves?",
            "interest": "Our starter is 12 years old.",
            "desire": "Warm bread at your door every Friday.",
            "action": "Reserve your box today."
        },
        "four_ps": {
            "product": "Weekly sourdough box",
            "price": "$18/week",
            "place": "Doorstep delivery",
            "promotion": "First box half off"
        },
        "hooks": ["Crust you can hear", "Bread o'clock", "Friday smells better"],
        "cta": "Reserve now"
    })
}

fn responses_payload(text: &str) -> Value {
    json!({
        "id": "resp_123",
        "object": "response",
        "status": "completed",
        "error": null,
        "output": [{
            "type": "message",
            "id": "msg_1",
            "role": "assistant",
            "content": [{"type": "output_text", "text": text, "annotations": []}]
        }]
    })
}

/// Serve the gateway on an ephemeral port, backed by `provider_url`.
async fn spawn_gateway(provider_url: &str, api_key: Option<&str>) -> String {
    let provider = OpenAiResponsesProvider::with_base_url(api_key, provider_url, 10);
    let state = AppState {
        generator: Generator::new(Arc::new(provider)),
    };
    let app = build_app(state, &[], 30);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn get_is_rejected_with_fixed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let base = spawn_gateway(&server.uri(), Some("test-key")).await;
    let response = reqwest::get(format!("{base}/generate")).await.unwrap();

    assert_eq!(response.status().as_u16(), 405);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Use POST"}));
    server.verify().await;
}

#[tokio::test]
async fn post_returns_schema_conformant_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(responses_payload(&marketing_json().to_string())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let base = spawn_gateway(&server.uri(), Some("test-key")).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&json!({
            "business": "Sourdough bakery",
            "audience": "busy parents",
            "platform": "Instagram"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, marketing_json());

    let received = server
        .received_requests()
        .await
        .expect("mock server should record received requests");
    assert_eq!(received.len(), 1);
    let sent: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(sent["model"], "gpt-4o-mini");
    assert_eq!(sent["text"]["format"]["type"], "json_schema");
    assert_eq!(sent["text"]["format"]["name"], "MarketingOutput");
    assert_eq!(sent["text"]["format"]["strict"], true);
    assert_eq!(
        sent["text"]["format"]["schema"]["additionalProperties"],
        false
    );
    let input = sent["input"].as_str().unwrap();
    assert!(input.contains("- Business: Sourdough bakery"));
    assert!(input.contains("- Audience: busy parents"));
    assert!(input.contains("- Offer: \n"));
    server.verify().await;
}

#[tokio::test]
async fn provider_http_error_becomes_server_error_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided: sk-live-abcdef123456, check it"}
        })))
        .mount(&server)
        .await;

    let base = spawn_gateway(&server.uri(), Some("sk-live-abcdef123456")).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Server error");
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("OpenAI API error (401"));
    assert!(!detail.contains("abcdef123456"));
    assert_eq!(body["kind"], "provider");
}

#[tokio::test]
async fn oversized_body_gets_json_413_without_provider_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let base = spawn_gateway(&server.uri(), Some("test-key")).await;
    let body = format!(r#"{{"business":"{}"}}"#, "x".repeat(MAX_BODY_SIZE));
    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 413);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Payload Too Large");
    assert_eq!(body["kind"], "request");
    server.verify().await;
}

#[tokio::test]
async fn non_string_input_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let base = spawn_gateway(&server.uri(), Some("test-key")).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&json!({"business": 42}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["kind"], "request");
    server.verify().await;
}

#[tokio::test]
async fn unparseable_model_text_becomes_server_error_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(responses_payload("Here is your copy!")),
        )
        .mount(&server)
        .await;

    let base = spawn_gateway(&server.uri(), Some("test-key")).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .body("")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Server error");
    assert!(body["detail"].as_str().unwrap().contains("not valid JSON"));
    assert_eq!(body["kind"], "parse");
}

#[tokio::test]
async fn missing_api_key_fails_without_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let base = spawn_gateway(&server.uri(), None).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&json!({"business": "x"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("API key not set"));
    server.verify().await;
}

#[tokio::test]
async fn unreachable_provider_becomes_server_error_envelope() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let base = spawn_gateway(&dead, Some("test-key")).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("OpenAI request failed"));
}

#[tokio::test]
async fn artifacts_endpoint_renders_template_copy() {
    let server = MockServer::start().await;
    let base = spawn_gateway(&server.uri(), None).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/artifacts"))
        .json(&json!({"outcome": "more bookings"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["tagline"],
        "More bookings in minutes a day — not more noise."
    );
    assert_eq!(body["headlines"].as_array().unwrap().len(), 3);
}
