//! 設定管理
//!
//! ServerConfig（設定ファイル + `CONTACTS_` 環境変数）

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::CommonError;

/// 環境変数プレフィックス（例: `CONTACTS_PORT`）
pub const ENV_PREFIX: &str = "CONTACTS";

/// サーバー設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// ストア呼び出しのタイムアウト（秒）(デフォルト: 10)
    #[serde(default = "default_store_timeout")]
    pub store_timeout_secs: u64,

    /// 起動時に読み込むレコードのJSONファイル
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// デモ用の連絡先を起動時に登録する (デフォルト: false)
    #[serde(default)]
    pub demo_seed: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_store_timeout() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            store_timeout_secs: default_store_timeout(),
            seed_file: None,
            demo_seed: false,
        }
    }
}

impl ServerConfig {
    /// 設定を読み込む
    ///
    /// 優先順位: 環境変数 > 設定ファイル > デフォルト値。
    /// `path` を明示した場合、ファイルが存在しなければエラー。
    pub fn load(path: Option<&Path>) -> Result<Self, CommonError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config: Self = builder
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
            .map_err(|e| CommonError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 値の整合性を検証
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.store_timeout_secs == 0 {
            return Err(CommonError::Config(
                "store_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// バインドアドレス（"host:port"）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ストア呼び出しのタイムアウト
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }
}
