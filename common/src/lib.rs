//! Contacts Registry 共通ライブラリ
//!
//! サービス本体とテストで共有する型・プロトコル・設定・エラー定義

#![warn(missing_docs)]

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;

/// HTTPプロトコル定義（リクエスト/レスポンス）
pub mod protocol;

/// 連絡先レコード型定義
pub mod types;
