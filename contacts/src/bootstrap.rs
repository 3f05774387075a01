//! 起動処理
//!
//! ストアとレジストリを構築し、設定に応じて初期データを投入する。

use contacts_common::config::ServerConfig;
use contacts_common::error::{CommonError, RegistryResult};
use contacts_common::types::Record;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::registry::ContactRegistry;
use crate::store::MemoryStore;
use crate::AppState;

/// デモ用の連絡先
pub fn demo_records() -> Vec<Record> {
    vec![
        Record::new("Friend_1", "98xxx-xxxxx", "person1@mail.com"),
        Record::new("Friend_2", "96xxx-xxxxx", "person2@mail.com"),
        Record::new("Friend_3", "97xxx-xxxxx", "person3@mail.com"),
    ]
}

/// JSON配列形式のシードファイルを読み込む
pub async fn load_seed_file(path: &Path) -> Result<Vec<Record>, CommonError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        CommonError::Config(format!(
            "failed to read seed file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// アプリケーション状態を初期化
pub async fn initialize(config: &ServerConfig) -> RegistryResult<AppState> {
    let registry = ContactRegistry::new(Arc::new(MemoryStore::new()), config.store_timeout());

    if config.demo_seed {
        registry.seed(demo_records()).await?;
    }
    if let Some(path) = &config.seed_file {
        let records = load_seed_file(path).await?;
        info!(path = %path.display(), count = records.len(), "Loaded seed file");
        registry.seed(records).await?;
    }

    Ok(AppState::new(registry))
}
