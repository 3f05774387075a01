//! Contract Test: GET /health

use crate::support::app::{build_app_with, send};
use axum::http::StatusCode;
use contacts::bootstrap::demo_records;

/// GET /health - ストア到達可能ならレコード数を返す
#[tokio::test]
async fn test_health_ok() {
    let app = build_app_with(demo_records()).await;
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["records"], 3);
    assert!(body["started_at"].is_string());
}

/// 未対応メソッドは405
#[tokio::test]
async fn test_unsupported_method() {
    let app = build_app_with(vec![]).await;
    let (status, _) = send(&app, "POST", "/contacts/A", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
