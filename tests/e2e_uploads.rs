// tests/e2e_uploads.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::util::ServiceExt as _;

mod support;

use support::mocks::storage::PUBLIC_BASE;
use support::{TEST_MAX_UPLOAD_BYTES, TEST_TOKEN, TestApp, assert_error_json, test_app};

async fn upload(
    app: &TestApp,
    filename: &str,
    content_type: &str,
    token: Option<&str>,
    data: Vec<u8>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/uploads/images?filename={filename}"))
        .header(header::CONTENT_TYPE, content_type);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(data)).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// PNG は保存され、公開 URL とパスが返る
#[tokio::test]
async fn png_is_stored() {
    let app = test_app();
    let (status, json) = upload(&app, "Photo.PNG", "image/png", Some(TEST_TOKEN), vec![7; 64]).await;
    assert_eq!(status, StatusCode::CREATED, "{json}");

    let path = json["path"].as_str().unwrap();
    let name = path.strip_prefix("images/1704067200000_").unwrap();
    let (token, ext) = name.split_once('.').unwrap();
    assert_eq!(ext, "png");
    assert_eq!(token.len(), 8);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(json["url"], format!("{PUBLIC_BASE}/{path}"));

    let (content_type, data) = app.storage.object(path).unwrap();
    assert_eq!(content_type, "image/png");
    assert_eq!(data.len(), 64);
}

/// 画像以外の Content-Type は 400
#[tokio::test]
async fn non_image_type_is_rejected() {
    let app = test_app();
    let (status, json) = upload(&app, "doc.png", "application/pdf", Some(TEST_TOKEN), vec![1]).await;
    assert_error_json(status, &json, StatusCode::BAD_REQUEST, None);
    assert_eq!(app.storage.len(), 0);
}

/// 許可されていない拡張子は 400
#[tokio::test]
async fn unsupported_extension_is_rejected() {
    let app = test_app();
    let (status, json) = upload(&app, "image.bmp", "image/png", Some(TEST_TOKEN), vec![1]).await;
    assert_error_json(status, &json, StatusCode::BAD_REQUEST, None);
}

/// 空ファイルと上限超過は 400
#[tokio::test]
async fn empty_and_oversized_files_are_rejected() {
    let app = test_app();
    let (status, json) = upload(&app, "a.jpg", "image/jpeg", Some(TEST_TOKEN), Vec::new()).await;
    assert_error_json(status, &json, StatusCode::BAD_REQUEST, None);

    let (status, json) = upload(
        &app,
        "a.jpg",
        "image/jpeg",
        Some(TEST_TOKEN),
        vec![0; TEST_MAX_UPLOAD_BYTES + 1],
    )
    .await;
    assert_error_json(status, &json, StatusCode::BAD_REQUEST, None);

    let (status, _) = upload(
        &app,
        "a.jpg",
        "image/jpeg",
        Some(TEST_TOKEN),
        vec![0; TEST_MAX_UPLOAD_BYTES],
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

/// 認証なしは 401
#[tokio::test]
async fn upload_requires_token() {
    let app = test_app();
    let (status, json) = upload(&app, "a.png", "image/png", None, vec![1]).await;
    assert_error_json(status, &json, StatusCode::UNAUTHORIZED, None);
    assert_eq!(app.storage.len(), 0);
}
