//! Contacts Registry Server
//!
//! 連絡先レコードをメモリ内で管理するREST APIサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// 起動処理（ストア構築・初期データ投入）
pub mod bootstrap;

/// CLIインターフェース
pub mod cli;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 連絡先レジストリ
pub mod registry;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// レコードストア抽象化
pub mod store;

use chrono::{DateTime, Utc};

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 連絡先レジストリ
    pub registry: registry::ContactRegistry,
    /// サーバー起動時刻
    pub started_at: DateTime<Utc>,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// レジストリからアプリケーション状態を作成
    pub fn new(registry: registry::ContactRegistry) -> Self {
        Self {
            registry,
            started_at: Utc::now(),
            shutdown: shutdown::ShutdownController::default(),
        }
    }
}
