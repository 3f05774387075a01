//! Contract Test: PUT /contacts/:name

use crate::support::app::{build_app_with, names, send, send_request};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use contacts_common::types::Record;
use serde_json::json;

fn seed() -> Vec<Record> {
    vec![
        Record::new("A", "1", "a@x"),
        Record::new("B", "2", "b@x"),
        Record::new("C", "3", "c@x"),
    ]
}

/// PUT /contacts/:name - 同じ位置で置き換える
#[tokio::test]
async fn test_update_contact_replaces_in_place() {
    let app = build_app_with(seed()).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/contacts/B",
        Some(json!({ "phone": "22" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "name": "B", "phone": "22" }));

    let (_, list) = send(&app, "GET", "/contacts", None).await;
    assert_eq!(names(&list), vec!["A", "B", "C"]);
    assert_eq!(list[1], json!({ "name": "B", "phone": "22" }));
}

/// PUT /contacts/:name - ボディの名前はパスのキーで上書きされる
#[tokio::test]
async fn test_update_contact_forces_path_key() {
    let app = build_app_with(seed()).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/contacts/A",
        Some(json!({ "name": "Renamed", "phone": "9", "email": "z@x" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "A");

    let (status, _) = send(&app, "GET", "/contacts/Renamed", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// PUT /contacts/:name - 存在しないキーは404で、何も追加しない
#[tokio::test]
async fn test_update_contact_not_found() {
    let app = build_app_with(seed()).await;

    let (status, body) = send(&app, "PUT", "/contacts/Z", Some(json!({ "phone": "0" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (_, list) = send(&app, "GET", "/contacts", None).await;
    assert_eq!(names(&list), vec!["A", "B", "C"]);
}

/// PUT /contacts/:name - 不正なJSONは400で、レコードは変わらない
#[tokio::test]
async fn test_update_contact_malformed_json() {
    let app = build_app_with(seed()).await;
    let request = Request::builder()
        .method("PUT")
        .uri("/contacts/B")
        .header("content-type", "application/json")
        .body(Body::from("{\"phone\": "))
        .unwrap();

    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DECODE_ERROR");

    let (_, list) = send(&app, "GET", "/contacts", None).await;
    assert_eq!(names(&list), vec!["A", "B", "C"]);
    assert_eq!(list[1], json!({ "name": "B", "phone": "2", "email": "b@x" }));
}

/// PUT /contacts/:name - 型不一致は400
#[tokio::test]
async fn test_update_contact_wrong_field_type() {
    let app = build_app_with(seed()).await;
    let (status, body) = send(&app, "PUT", "/contacts/A", Some(json!({ "phone": 123 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DECODE_ERROR");

    let (_, record) = send(&app, "GET", "/contacts/A", None).await;
    assert_eq!(record["phone"], "1");
}

/// PUT /contacts/:name - Content-Type なしは400
#[tokio::test]
async fn test_update_contact_missing_content_type() {
    let app = build_app_with(seed()).await;
    let request = Request::builder()
        .method("PUT")
        .uri("/contacts/C")
        .body(Body::from(r#"{"phone":"9"}"#))
        .unwrap();

    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DECODE_ERROR");

    let (_, record) = send(&app, "GET", "/contacts/C", None).await;
    assert_eq!(record["phone"], "3");
}
