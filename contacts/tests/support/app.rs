use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use contacts::{api, registry::ContactRegistry, AppState};
use contacts_common::types::Record;
use serde_json::Value;
use tower::ServiceExt;

/// 空のレジストリでルーターを構築
#[allow(dead_code)]
pub fn build_app() -> Router {
    api::create_app(AppState::new(ContactRegistry::in_memory()))
}

/// 初期レコード入りのレジストリでルーターを構築
#[allow(dead_code)]
pub async fn build_app_with(records: Vec<Record>) -> Router {
    let registry = ContactRegistry::in_memory();
    registry.seed(records).await.expect("seed registry");
    api::create_app(AppState::new(registry))
}

/// リクエストを1件送り、ステータスとJSONボディを返す
#[allow(dead_code)]
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

/// 任意のリクエストを送り、ステータスとJSONボディを返す
#[allow(dead_code)]
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

/// 一覧レスポンスから名前だけを取り出す
#[allow(dead_code)]
pub fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|record| record["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
