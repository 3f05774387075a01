//! 連絡先APIハンドラー
//!
//! `/contacts` と `/contacts/:name` のCRUD

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use contacts_common::types::{Record, RecordPatch};

use super::error::AppError;
use crate::AppState;

/// GET /contacts - 全件一覧（挿入順）
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Record>>, AppError> {
    Ok(Json(state.registry.list().await?))
}

/// GET /contacts/:name - キーで取得
pub async fn get_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Record>, AppError> {
    Ok(Json(state.registry.get(&name).await?))
}

/// POST /contacts - 新規作成
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<Record>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let Json(record) = payload?;
    let created = state.registry.create(record).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /contacts/:name - 削除して残りの一覧を返す
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Record>>, AppError> {
    Ok(Json(state.registry.delete(&name).await?))
}

/// PUT /contacts/:name - 同じ位置で置き換え
pub async fn update_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<Record>, JsonRejection>,
) -> Result<Json<Record>, AppError> {
    let Json(record) = payload?;
    Ok(Json(state.registry.update(&name, record).await?))
}

/// PATCH /contacts/:name - 部分更新
pub async fn patch_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<RecordPatch>, JsonRejection>,
) -> Result<Json<Record>, AppError> {
    let Json(patch) = payload?;
    Ok(Json(state.registry.patch(&name, patch).await?))
}
