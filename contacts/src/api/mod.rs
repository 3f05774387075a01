//! REST APIハンドラー
//!
//! 連絡先CRUD、ヘルスチェック

pub mod contacts;
pub mod error;
pub mod health;

use crate::AppState;
use axum::{http::Uri, routing::get, Router};
use contacts_common::error::RegistryError;
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/contacts/:name",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .patch(contacts::patch_contact)
                .delete(contacts::delete_contact),
        )
        .route("/health", get(health::health_check))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 未定義のパスも共通のエラーボディで404を返す
async fn fallback(uri: Uri) -> error::AppError {
    RegistryError::NotFound(uri.path().to_string()).into()
}
