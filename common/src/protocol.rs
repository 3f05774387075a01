//! HTTPプロトコル定義
//!
//! クライアント↔サーバー間のレスポンスボディ

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// 外部向けエラーメッセージ
    pub error: String,
    /// エラーコード
    pub code: String,
}

/// ヘルスチェックのステータス
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// ストア到達可能
    Ok,
}

/// ヘルスチェックレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// ステータス
    pub status: HealthStatus,
    /// 登録済みレコード数
    pub records: usize,
    /// サーバー起動時刻
    pub started_at: DateTime<Utc>,
}
