//! ヘルスチェックAPIハンドラー

use axum::{extract::State, Json};
use contacts_common::protocol::{HealthResponse, HealthStatus};

use super::error::AppError;
use crate::AppState;

/// GET /health - ストア疎通と登録件数
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    state.registry.ping().await?;
    let records = state.registry.len().await?;
    Ok(Json(HealthResponse {
        status: HealthStatus::Ok,
        records,
        started_at: state.started_at,
    }))
}
