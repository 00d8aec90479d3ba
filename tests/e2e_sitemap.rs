// tests/e2e_sitemap.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use tower::util::ServiceExt as _;

mod support;

use support::{PostBuilder, SITE_URL, TestApp, category, test_app};

async fn fetch(app: &TestApp, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

/// 静的ページ、公開記事、カテゴリが XML に並ぶ
#[tokio::test]
async fn sitemap_lists_pages_posts_and_categories() {
    let app = test_app();
    app.store.seed_post(PostBuilder::new("public-post").build());
    app.store.seed_post(PostBuilder::new("secret-draft").draft().build());
    app.store.seed_category(category("Rust", "rust"));

    let (status, content_type, xml) = fetch(&app, "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/xml; charset=utf-8"));
    assert!(xml.starts_with("<?xml"));

    assert!(xml.contains(&format!("<loc>{SITE_URL}/</loc>")));
    assert!(xml.contains(&format!("<loc>{SITE_URL}/posts</loc>")));
    assert!(xml.contains(&format!("<loc>{SITE_URL}/categories</loc>")));
    assert!(xml.contains(&format!("<loc>{SITE_URL}/posts/public-post</loc>")));
    assert!(xml.contains(&format!("<loc>{SITE_URL}/categories/rust</loc>")));
    assert!(!xml.contains("secret-draft"));
    assert!(xml.contains("<lastmod>2024-01-01T00:00:00.000Z</lastmod>"));
    assert!(xml.contains("<priority>0.8</priority>"));
    assert_eq!(xml.matches("<url>").count(), 5);
}

/// ドキュメントと OpenAPI が配信される
#[tokio::test]
async fn docs_are_served() {
    let app = test_app();
    let (status, content_type, body) = fetch(&app, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));
    let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"]["/api/slugs/check"].is_object());

    let (status, _, _) = fetch(&app, "/").await;
    assert!(status.is_redirection());
}
