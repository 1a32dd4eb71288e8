mod common;

use axum::{
    Router,
    http::{HeaderValue, StatusCode, header},
    routing::{get, post},
};
use axum_test::TestServer;
use link_shortener::api::dto::link::LinkResponse;
use link_shortener::api::handlers::{create_link_handler, get_link_handler};
use link_shortener::domain::store::LinkStore;
use link_shortener::infrastructure::persistence::InMemoryLinkStore;
use regex::Regex;
use serde_json::json;
use std::sync::Arc;

fn create_server() -> (TestServer, Arc<InMemoryLinkStore>) {
    let (state, store) = common::create_test_state();
    let app = Router::new()
        .route("/api/v1/links", post(create_link_handler))
        .route("/api/v1/links/{short}", get(get_link_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), store)
}

#[tokio::test]
async fn test_create_link_success() {
    let (server, store) = create_server();

    let response = server
        .post("/api/v1/links")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let link = response.json::<LinkResponse>();
    assert_eq!(link.original, "http://example.com");

    let code = common::code_of(&link.short);
    assert_eq!(code, "1f8GXD");

    let stored = store.get_original(code).await.unwrap();
    assert_eq!(stored.as_deref(), Some("http://example.com"));
}

#[tokio::test]
async fn test_create_link_short_includes_host() {
    let (server, _store) = create_server();

    let response = server
        .post("/api/v1/links")
        .add_header(header::HOST, HeaderValue::from_static(common::HOST))
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let link = response.json::<LinkResponse>();
    assert!(link.short.ends_with("/1Xhgal"), "got {}", link.short);
}

#[tokio::test]
async fn test_create_link_is_idempotent() {
    let (server, store) = create_server();

    for _ in 0..2 {
        let response = server
            .post("/api/v1/links")
            .json(&json!({ "url": "http://example.com" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(
            common::code_of(&response.json::<LinkResponse>().short),
            "1f8GXD"
        );
    }

    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_create_link_collision_fails() {
    let (server, store) = create_server();

    // Another URL already owns the code this URL hashes to.
    common::create_test_link(&store, "1f8GXD", "http://squatter.example").await;

    let response = server
        .post("/api/v1/links")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let stored = store.get_original("1f8GXD").await.unwrap();
    assert_eq!(stored.as_deref(), Some("http://squatter.example"));
}

#[tokio::test]
async fn test_create_link_no_content_type() {
    let (server, store) = create_server();

    let response = server
        .post("/api/v1/links")
        .bytes(r#"{"url":"http://example.com"}"#.into())
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_link_unexpected_content_type() {
    let (server, _store) = create_server();

    let response = server
        .post("/api/v1/links")
        .content_type("application/binary")
        .bytes(r#"{"url":"http://example.com"}"#.into())
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_json_with_charset() {
    let (server, _store) = create_server();

    let response = server
        .post("/api/v1/links")
        .content_type("application/json; charset=utf-8")
        .bytes(r#"{"url":"http://example.com"}"#.into())
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_link_empty_body() {
    let (server, _store) = create_server();

    let response = server
        .post("/api/v1/links")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_link_malformed_json() {
    let (server, _store) = create_server();

    for body in [r#"{"url":"#, r#"{"url":42}"#, "null", "[]"] {
        let response = server
            .post("/api/v1/links")
            .content_type("application/json")
            .bytes(body.into())
            .await;

        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_create_link_empty_url() {
    let (server, store) = create_server();

    let response = server
        .post("/api/v1/links")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_link_missing_url_field() {
    let (server, _store) = create_server();

    let response = server.post("/api/v1/links").json(&json!({})).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let (server, store) = create_server();

    for url in [
        "not a url",
        "example.com",
        "/relative",
        "mailto:a@example.com",
        " http://example.com",
        "http://example.com/a\tb",
    ] {
        let response = server
            .post("/api/v1/links")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status_bad_request();
    }

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_link_code_format() {
    let (server, _store) = create_server();
    let code_format = Regex::new(r"^[0-9a-zA-Z]{1,6}$").unwrap();

    for i in 0..50 {
        let url = format!("https://example.org/path/{i}?q={}", i * 7);
        let response = server
            .post("/api/v1/links")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let link = response.json::<LinkResponse>();
        let code = common::code_of(&link.short);
        assert!(code_format.is_match(code), "unexpected code {code}");
        assert_eq!(link.original, url);
    }
}

#[tokio::test]
async fn test_get_link_success() {
    let (server, store) = create_server();
    common::create_test_link(&store, "test", "http://example.com").await;

    let response = server.get("/api/v1/links/test").await;

    response.assert_status_ok();

    let link = response.json::<LinkResponse>();
    assert_eq!(link.original, "http://example.com");
    assert_eq!(common::code_of(&link.short), "test");
}

#[tokio::test]
async fn test_get_link_not_found() {
    let (server, _store) = create_server();

    let response = server.get("/api/v1/links/test2").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_get_link_malformed_code() {
    let (server, _store) = create_server();

    let response = server.get("/api/v1/links/not-a-code").await;

    response.assert_status_not_found();
}
