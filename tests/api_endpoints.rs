//! HTTP-level tests for every route
//!
//! Each test builds the real router over a fresh `AppState` whose upload
//! directory lives in a temporary directory.

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use serde_json::{Value, json};
use tempfile::TempDir;

use kata_server::{
    config::Config,
    web::{AppState, middleware::REQUEST_ID_HEADER, router},
};

fn test_server_with(configure: impl FnOnce(&mut Config)) -> (TestServer, TempDir) {
    let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
    let mut config = Config::default();
    config.storage.upload_path = upload_dir.path().join("uploads");
    configure(&mut config);

    let state = AppState::new(config).expect("Failed to create app state");
    let server = TestServer::new(router(state)).expect("Failed to start test server");
    (server, upload_dir)
}

fn test_server() -> (TestServer, TempDir) {
    test_server_with(|_| {})
}

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _dir) = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_substring_examples() {
    let (server, _dir) = test_server();

    for (body, expected) in [
        ("3,abcabcdefdefdef", "9"),
        ("2,abcba", "3"),
        ("2,abcbcba", "5"),
        ("0,abc", "0"),
        ("5,", "0"),
        ("7,abc", "3"),
    ] {
        let response = server.post("/substring").text(body).await;
        response.assert_status_ok();
        assert_eq!(response.text(), expected, "body {body:?}");
    }
}

#[tokio::test]
async fn test_substring_repeated_request_is_memoized() {
    let (server, _dir) = test_server();

    let first = server.post("/substring").text("3,abcabcdefdefdef").await;
    let second = server.post("/substring").text("3,abcabcdefdefdef").await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(first.text(), second.text());
}

#[tokio::test]
async fn test_substring_same_text_different_bound() {
    let (server, _dir) = test_server();

    let two = server.post("/substring").text("2,abcba").await;
    let three = server.post("/substring").text("3,abcba").await;

    assert_eq!(two.text(), "3");
    assert_eq!(three.text(), "5");
}

#[tokio::test]
async fn test_substring_rejects_malformed_bodies() {
    let (server, _dir) = test_server();

    for body in ["abc", "2,ab,c", "two,abc", "-1,abc", ""] {
        let response = server.post("/substring").text(body).await;
        response.assert_status_bad_request();
        let error: Value = response.json();
        assert_eq!(error["success"], false, "body {body:?}");
        assert!(error["error"].is_string());
    }
}

#[tokio::test]
async fn test_substring_bound_far_beyond_input() {
    let (server, _dir) = test_server();

    for (body, expected) in [("1000000000000,abc", "3"), ("9223372036854775807,abca", "4")] {
        let response = server.post("/substring").text(body).await;
        response.assert_status_ok();
        assert_eq!(response.text(), expected, "body {body:?}");
    }
}

#[tokio::test]
async fn test_substring_rejects_invalid_utf8() {
    let (server, _dir) = test_server();

    let response = server
        .post("/substring")
        .bytes(vec![b'2', b',', 0xff, 0xfe].into())
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_substring_body_limit() {
    let (server, _dir) = test_server_with(|config| config.web.max_request_size = 16);

    let response = server
        .post("/substring")
        .text(format!("2,{}", "ab".repeat(64)))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let error: Value = response.json();
    assert_eq!(error["success"], false);
}

#[tokio::test]
async fn test_autocomplete_example() {
    let (server, _dir) = test_server();

    let response = server
        .post("/autocomplete")
        .json(&json!({
            "string": "de",
            "dictionary": ["dog", "deer", "deal"]
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!(["deer", "deal"]));
}

#[tokio::test]
async fn test_autocomplete_cache_respects_dictionary() {
    let (server, _dir) = test_server();

    let first = server
        .post("/autocomplete")
        .json(&json!({ "string": "de", "dictionary": ["deer"] }))
        .await;
    let second = server
        .post("/autocomplete")
        .json(&json!({ "string": "de", "dictionary": ["deal", "dog"] }))
        .await;

    first.assert_json(&json!(["deer"]));
    second.assert_json(&json!(["deal"]));
}

#[tokio::test]
async fn test_autocomplete_rejects_bad_json() {
    let (server, _dir) = test_server();

    let response = server
        .post("/autocomplete")
        .json(&json!({ "dictionary": ["dog"] }))
        .await;

    response.assert_status_bad_request();
    let error: Value = response.json();
    assert!(
        error["error"]
            .as_str()
            .unwrap()
            .starts_with("Couldn't decode request body")
    );
}

#[tokio::test]
async fn test_upload_stores_file() {
    let (server, dir) = test_server();

    let form = MultipartForm::new()
        .add_text("comment", "ignored")
        .add_part(
            "file",
            Part::bytes(b"hello upload".as_slice()).file_name("hello.txt"),
        );
    let response = server.post("/upload").multipart(form).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "file_name": "hello.txt", "size": 12 }));
    let stored = std::fs::read(dir.path().join("uploads").join("hello.txt")).unwrap();
    assert_eq!(stored, b"hello upload");
}

#[tokio::test]
async fn test_upload_strips_directories_from_file_name() {
    let (server, dir) = test_server();

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"secret".as_slice()).file_name("../../escape.txt"),
    );
    let response = server.post("/upload").multipart(form).await;

    response.assert_status_ok();
    assert!(dir.path().join("uploads").join("escape.txt").exists());
    assert!(!dir.path().join("escape.txt").exists());
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let (server, _dir) = test_server();

    let form = MultipartForm::new().add_text("comment", "no file here");
    let response = server.post("/upload").multipart(form).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_upload_rejects_unusable_file_name() {
    let (server, _dir) = test_server();

    let form = MultipartForm::new().add_part("file", Part::bytes(b"x".as_slice()).file_name(".."));
    let response = server.post("/upload").multipart(form).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_upload_rejects_non_multipart_body() {
    let (server, _dir) = test_server();

    let response = server.post("/upload").text("not multipart").await;

    response.assert_status_bad_request();
    let error: Value = response.json();
    assert_eq!(error["success"], false);
    assert!(error["error"].as_str().is_some_and(|message| !message.is_empty()));
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (server, _dir) = test_server();

    let first = server.post("/substring").text("2,abcba").await;
    let second = server.post("/substring").text("not a query").await;

    let id_of = |response: &axum_test::TestResponse| {
        let value = response.headers().get(REQUEST_ID_HEADER).cloned();
        value.and_then(|value| value.to_str().ok().map(str::to_owned))
    };
    let first_id = id_of(&first).expect("missing request id");
    let second_id = id_of(&second).expect("missing request id on error");
    assert!(uuid::Uuid::parse_str(&first_id).is_ok());
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn test_unknown_route() {
    let (server, _dir) = test_server();

    server.get("/nope").await.assert_status_not_found();
}
