//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use contacts_common::error::{CommonError, RegistryError};
use contacts_common::protocol::ErrorResponse;

/// 再試行可能なエラーで返す `Retry-After` 秒数
const RETRY_AFTER_SECS: &str = "1";

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub RegistryError);

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        AppError(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(RegistryError::Decode(rejection.body_text()))
    }
}

impl AppError {
    /// エラーに対応するHTTPステータス
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            RegistryError::Common(CommonError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            RegistryError::Common(_) => StatusCode::BAD_REQUEST,
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::Decode(_) => StatusCode::BAD_REQUEST,
            RegistryError::Conflict(_) => StatusCode::CONFLICT,
            RegistryError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            RegistryError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            RegistryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        // 詳細はログのみに出力し、レスポンスには external_message() を使う
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self.0, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.0.external_message().to_string(),
            code: self.0.code().to_string(),
        };
        let mut response = (status, Json(body)).into_response();
        if self.0.is_retryable() {
            response.headers_mut().insert(
                header::RETRY_AFTER,
                HeaderValue::from_static(RETRY_AFTER_SECS),
            );
        }
        response
    }
}
