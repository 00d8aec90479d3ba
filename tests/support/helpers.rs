// tests/support/helpers.rs
use super::mocks::{DummyIdentityVerifier, FixedClock, InMemoryStore, MemoryStorage};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use blog_core::application::services::{ApplicationServices, ServiceSettings};
use blog_core::infrastructure::util::UnicodeSlugGenerator;
use blog_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const SITE_URL: &str = "https://blog.test";
pub const TEST_MAX_UPLOAD_BYTES: usize = 1024;

/// テスト用アプリケーション一式（ルーターと観測用のモック）
pub struct TestApp {
    pub router: axum::Router,
    pub store: InMemoryStore,
    pub storage: MemoryStorage,
    pub services: Arc<ApplicationServices>,
}

pub fn build_services(store: &InMemoryStore, storage: &MemoryStorage) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(UnicodeSlugGenerator),
        Arc::new(DummyIdentityVerifier),
        Arc::new(storage.clone()),
        Arc::new(FixedClock),
        ServiceSettings {
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
            ..ServiceSettings::default()
        },
    ))
}

pub fn test_app() -> TestApp {
    let store = InMemoryStore::default();
    let storage = MemoryStorage::default();
    let services = build_services(&store, &storage);
    let state = HttpState {
        services: Arc::clone(&services),
        site_url: Arc::from(SITE_URL),
    };
    TestApp {
        router: build_router(state, &[]),
        store,
        storage,
        services,
    }
}

pub async fn make_test_router() -> axum::Router {
    test_app().router
}

impl TestApp {
    /// リクエストを送り、ステータスと JSON ボディを返す
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn post_json(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put_json(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(token), Some(body)).await
    }

    /// 投稿を作成し、レスポンスの `post` を返す
    pub async fn create_post(&self, token: &str, body: Value) -> Value {
        let (status, json) = self.post_json("/api/posts", token, body).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
        json["post"].clone()
    }
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// エラーボディの `error` と `message` を検証する
pub fn assert_error_json(status: StatusCode, json: &Value, expected: StatusCode, message: Option<&str>) {
    assert_eq!(status, expected, "unexpected status, body: {json}");
    assert_eq!(json["error"], expected.canonical_reason().unwrap());
    match message {
        Some(message) => assert_eq!(json["message"], message),
        None => assert!(!json["message"].as_str().unwrap_or_default().is_empty()),
    }
}
