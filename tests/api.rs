use axum::http::StatusCode;
use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::{json, Value};
use async_trait::async_trait;
use mindwell::db::Database;
use mindwell::api::{build_router, AppState};
use mindwell::errors::MindwellError;
use mindwell::llm::{ChatMessage, CompletionParams, CompletionService, LLMResponse, Role};
use mindwell::responder::Responder;
use std::sync::{Arc, Mutex};

/// Completion service that answers from a fixed script and records requests.
struct FakeCompletions {
    reply: Result<Option<String>, String>,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
}

impl FakeCompletions {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self { reply: Ok(Some(text.to_string())), seen: Mutex::new(Vec::new()) })
    }

    fn silent() -> Arc<Self> {
        Arc::new(Self { reply: Ok(None), seen: Mutex::new(Vec::new()) })
    }

    fn broken(msg: &str) -> Arc<Self> {
        Arc::new(Self { reply: Err(msg.to_string()), seen: Mutex::new(Vec::new()) })
    }

    fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for FakeCompletions {
    async fn complete_chat(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<LLMResponse, MindwellError> {
        assert_eq!(params.max_tokens, 500);
        self.seen.lock().unwrap().push(messages.to_vec());
        match &self.reply {
            Ok(content) => Ok(LLMResponse {
                content: content.clone(),
                input_tokens: Some(10),
                output_tokens: Some(5),
                model: "fake".to_string(),
            }),
            Err(msg) => Err(MindwellError::Network(msg.clone())),
        }
    }

    fn provider_name(&self) -> &str { "fake" }
    fn model_name(&self) -> &str { "fake" }
}

fn create_test_state(service: Arc<FakeCompletions>) -> AppState {
    let db = Database::in_memory().unwrap();
    AppState {
        db,
        responder: Arc::new(Responder::new(service)),
        owner_id: "user123".to_string(),
    }
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = create_test_state(FakeCompletions::replying("unused"));
    let req = make_request("GET", "/api/health", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "mindwell");
    assert!(body["built_at"].as_str().is_some_and(|ts| !ts.is_empty()));
}

#[tokio::test]
async fn test_chat_crisis_end_to_end() {
    let service = FakeCompletions::replying("I'm so sorry you're hurting. Please call 988 now.");
    let state = create_test_state(service.clone());

    let req = make_request("POST", "/api/chat", Some(json!({
        "messages": [{"role": "user", "content": "I feel like I want to die"}]
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["response"], "I'm so sorry you're hurting. Please call 988 now.");
    assert_eq!(body["isCrisis"], true);

    let sent = &service.requests()[0];
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].role, Role::System);
    assert!(sent[0].content.contains("1-800-273-8255"));
    assert_eq!(sent[1].content, "I feel like I want to die");
}

#[tokio::test]
async fn test_chat_recovered_conversation_is_not_crisis() {
    let service = FakeCompletions::replying("Glad to hear it.");
    let state = create_test_state(service.clone());

    let req = make_request("POST", "/api/chat", Some(json!({
        "messages": [
            {"role": "user", "content": "I want to die"},
            {"role": "assistant", "content": "I'm sorry to hear that"},
            {"role": "user", "content": "actually I'm fine"}
        ]
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["isCrisis"], false);
    assert!(!service.requests()[0][0].content.contains("988"));
}

#[tokio::test]
async fn test_chat_empty_messages_is_bad_request() {
    let service = FakeCompletions::replying("unused");
    let state = create_test_state(service.clone());

    let req = make_request("POST", "/api/chat", Some(json!({ "messages": [] })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid messages format");
    assert!(service.requests().is_empty());
}

#[tokio::test]
async fn test_chat_non_json_body_is_bad_request() {
    let state = create_test_state(FakeCompletions::replying("unused"));
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/chat")
        .body(Body::from("messages=hello"))
        .unwrap();
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid messages format");
}

#[tokio::test]
async fn test_chat_without_user_message_is_bad_request() {
    let service = FakeCompletions::replying("unused");
    let state = create_test_state(service.clone());

    let req = make_request("POST", "/api/chat", Some(json!({
        "messages": [{"role": "assistant", "content": "hi"}]
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "No user message found");
    assert!(service.requests().is_empty());
}

#[tokio::test]
async fn test_chat_empty_completion_returns_empty_string() {
    let state = create_test_state(FakeCompletions::silent());

    let req = make_request("POST", "/api/chat", Some(json!({
        "messages": [{"role": "user", "content": "I keep thinking about self harm"}]
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["response"], "");
    assert_eq!(body["isCrisis"], true);
}

#[tokio::test]
async fn test_chat_backend_failure_is_generic_500() {
    let state = create_test_state(FakeCompletions::broken("connection reset by api.groq.com"));

    let req = make_request("POST", "/api/chat", Some(json!({
        "messages": [{"role": "user", "content": "hello"}]
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(body, json!({"error": "Failed to generate response"}));
}

#[tokio::test]
async fn test_journal_crud_flow() {
    let state = create_test_state(FakeCompletions::replying("unused"));

    // Create
    let req = make_request("POST", "/api/journal", Some(json!({
        "title": "  First entry ",
        "content": "Went for a run and felt better."
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    let id = body["journalEntry"]["_id"].as_str().unwrap().to_string();
    assert_eq!(body["journalEntry"]["title"], "First entry");
    assert_eq!(body["journalEntry"]["userId"], "user123");

    // List
    let req = make_request("GET", "/api/journal", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["journalEntries"].as_array().unwrap().len(), 1);

    // Update
    let req = make_request("PUT", &format!("/api/journal/{}", id), Some(json!({
        "title": "Edited",
        "content": "Still feeling better."
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["journalEntry"]["title"], "Edited");
    assert_eq!(body["journalEntry"]["_id"], id);

    // Delete
    let req = make_request("DELETE", &format!("/api/journal/{}", id), None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);

    // Gone
    let req = make_request("DELETE", &format!("/api/journal/{}", id), None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Journal entry not found or not authorized to delete");
}

#[tokio::test]
async fn test_created_entries_match_later_reads() {
    let state = create_test_state(FakeCompletions::replying("unused"));

    let req = make_request("POST", "/api/journal", Some(json!({ "title": "t", "content": "c" })));
    let created = response_json(app(&state).oneshot(req).await.unwrap()).await;
    let req = make_request("GET", "/api/journal", None);
    let listed = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(listed["journalEntries"][0], created["journalEntry"]);

    let req = make_request("POST", "/api/mood", Some(json!({ "mood": 3 })));
    let created = response_json(app(&state).oneshot(req).await.unwrap()).await;
    let req = make_request("GET", "/api/mood", None);
    let listed = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(listed["moodEntries"][0], created["moodEntry"]);
}

#[tokio::test]
async fn test_journal_update_missing_entry() {
    let state = create_test_state(FakeCompletions::replying("unused"));
    let req = make_request("PUT", "/api/journal/does-not-exist", Some(json!({
        "title": "t",
        "content": "c"
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Journal entry not found or not authorized to update");
}

#[tokio::test]
async fn test_journal_create_requires_title() {
    let state = create_test_state(FakeCompletions::replying("unused"));
    let req = make_request("POST", "/api/journal", Some(json!({ "content": "no title" })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Please provide a title for your journal entry");
}

#[tokio::test]
async fn test_mood_create_list_and_trend() {
    let state = create_test_state(FakeCompletions::replying("unused"));

    for mood in [2, 3, 4] {
        let req = make_request("POST", "/api/mood", Some(json!({ "mood": mood, "notes": "ok" })));
        let response = app(&state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        assert_eq!(body["moodEntry"]["mood"], mood);
    }

    let req = make_request("GET", "/api/mood", None);
    let response = app(&state).oneshot(req).await.unwrap();
    let body = response_json(response).await;
    let moods: Vec<i64> = body["moodEntries"].as_array().unwrap()
        .iter()
        .map(|e| e["mood"].as_i64().unwrap())
        .collect();
    assert_eq!(moods, vec![4, 3, 2]);

    let req = make_request("GET", "/api/mood/trend?limit=2", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let points: Vec<i64> = body["points"].as_array().unwrap()
        .iter()
        .map(|p| p["mood"].as_i64().unwrap())
        .collect();
    assert_eq!(points, vec![3, 4]);
}

#[tokio::test]
async fn test_mood_out_of_range_rejected() {
    let state = create_test_state(FakeCompletions::replying("unused"));
    let req = make_request("POST", "/api/mood", Some(json!({ "mood": 7 })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Mood must be between 1 and 5");
}

#[tokio::test]
async fn test_crisis_resources_listed() {
    let state = create_test_state(FakeCompletions::replying("unused"));
    let req = make_request("GET", "/api/crisis-resources", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let resources = body["resources"].as_array().unwrap();
    assert!(resources.iter().any(|r| r["contact"].as_str().unwrap().contains("988")));
    assert_eq!(resources[0]["category"], "emergency");
}
