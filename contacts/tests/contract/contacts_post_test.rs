//! Contract Test: POST /contacts

use crate::support::app::{build_app, send, send_request};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use contacts_common::types::Record;
use serde_json::{json, Value};

/// POST /contacts - 正常系: 作成したレコードを返す
#[tokio::test]
async fn test_create_contact_success() {
    let app = build_app();
    let payload = json!({ "name": "A", "phone": "1", "email": "a@x" });

    let (status, body) = send(&app, "POST", "/contacts", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, payload);

    let (status, body) = send(&app, "GET", "/contacts/A", None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Record = serde_json::from_value(body).unwrap();
    assert_eq!(fetched, Record::new("A", "1", "a@x"));
}

/// POST /contacts - 欠落フィールドは空として扱う
#[tokio::test]
async fn test_create_contact_partial_fields() {
    let app = build_app();
    let (status, body) = send(&app, "POST", "/contacts", Some(json!({ "name": "A" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "name": "A" }));
}

/// POST /contacts - 同名は409
#[tokio::test]
async fn test_create_contact_duplicate_name() {
    let app = build_app();
    send(&app, "POST", "/contacts", Some(json!({ "name": "A", "phone": "1" }))).await;

    let (status, body) = send(&app, "POST", "/contacts", Some(json!({ "name": "A", "phone": "2" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_NAME");

    let (_, body) = send(&app, "GET", "/contacts", None).await;
    assert_eq!(body, json!([{ "name": "A", "phone": "1" }]));
}

/// POST /contacts - 名前なしは400
#[tokio::test]
async fn test_create_contact_missing_name() {
    let app = build_app();
    let (status, body) = send(&app, "POST", "/contacts", Some(json!({ "phone": "1" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CONTACT");
}

/// POST /contacts - 不正なJSONは400（黙って空レコードにしない）
#[tokio::test]
async fn test_create_contact_malformed_json() {
    let app = build_app();
    let request = Request::builder()
        .method("POST")
        .uri("/contacts")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DECODE_ERROR");

    let (_, list) = send(&app, "GET", "/contacts", None).await;
    assert_eq!(list, json!([]));
}

/// POST /contacts - 型不一致は400
#[tokio::test]
async fn test_create_contact_wrong_field_type() {
    let app = build_app();
    let (status, body) = send(&app, "POST", "/contacts", Some(json!({ "name": 42 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DECODE_ERROR");
}

/// POST /contacts - Content-Type なしは400
#[tokio::test]
async fn test_create_contact_missing_content_type() {
    let app = build_app();
    let request = Request::builder()
        .method("POST")
        .uri("/contacts")
        .body(Body::from(r#"{"name":"A"}"#))
        .unwrap();

    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DECODE_ERROR");
    assert_ne!(body["error"], Value::Null);
}
