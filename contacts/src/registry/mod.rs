//! 連絡先レジストリ
//!
//! 挿入順を保持するレコード集合への一覧・取得・作成・置換・部分更新・削除。
//! 保存は注入された [`ContactStore`] に委譲し、変更系の操作は
//! 単一ライターロックで直列化する。

use contacts_common::error::{RegistryError, RegistryResult};
use contacts_common::types::{Record, RecordFilter, RecordPatch};
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::store::{ContactStore, MemoryStore, StoreResult};

/// ストア呼び出しのデフォルトタイムアウト
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// 連絡先レジストリ
#[derive(Clone)]
pub struct ContactRegistry {
    store: Arc<dyn ContactStore>,
    /// check-then-act を不可分にするための単一ライターロック
    writer: Arc<Mutex<()>>,
    timeout: Duration,
}

impl ContactRegistry {
    /// ストアを注入してレジストリを作成
    pub fn new(store: Arc<dyn ContactStore>, timeout: Duration) -> Self {
        Self {
            store,
            writer: Arc::new(Mutex::new(())),
            timeout,
        }
    }

    /// インメモリストアで空のレジストリを作成
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), DEFAULT_STORE_TIMEOUT)
    }

    /// ストア呼び出しをタイムアウト付きで実行し、エラーをレジストリエラーに変換
    async fn call<T, F>(&self, operation: &'static str, fut: F) -> RegistryResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                warn!(operation, error = %err, "Store operation failed");
                Err(err.into())
            }
            Err(_) => {
                warn!(operation, timeout = ?self.timeout, "Store operation timed out");
                Err(RegistryError::Timeout(format!(
                    "{} exceeded {:?}",
                    operation, self.timeout
                )))
            }
        }
    }

    /// 全レコードを挿入順で取得
    pub async fn list(&self) -> RegistryResult<Vec<Record>> {
        self.call("find_many", self.store.find_many(&RecordFilter::all()))
            .await
    }

    /// キーでレコードを取得
    pub async fn get(&self, name: &str) -> RegistryResult<Record> {
        self.call("find_one", self.store.find_one(&RecordFilter::by_name(name)))
            .await?
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// レコードを末尾に追加
    ///
    /// 空の名前は検証エラー、同名レコードが既にあれば `Conflict`。
    pub async fn create(&self, record: Record) -> RegistryResult<Record> {
        record.validate()?;

        let _writer = self.writer.lock().await;
        self.insert_unique(record).await
    }

    /// ライターロック保持中に呼ぶこと
    async fn insert_unique(&self, record: Record) -> RegistryResult<Record> {
        let filter = RecordFilter::by_name(record.name.as_str());
        if self
            .call("find_one", self.store.find_one(&filter))
            .await?
            .is_some()
        {
            debug!(name = %record.name, "Rejected duplicate contact");
            return Err(RegistryError::Conflict(record.name));
        }

        let inserted_id = self
            .call("insert", self.store.insert(record.clone()))
            .await?;
        info!(name = %record.name, inserted_id = %inserted_id, "Contact created");
        Ok(record)
    }

    /// キーに一致する最初のレコードを削除し、更新後の全件を返す
    ///
    /// 一致しない場合は何もしない（エラーにならない）。
    /// 削除後にストアを読み直さないため、削除が確定した後にエラーを返すことはない。
    pub async fn delete(&self, name: &str) -> RegistryResult<Vec<Record>> {
        let _writer = self.writer.lock().await;
        let mut remaining = self
            .call("find_many", self.store.find_many(&RecordFilter::all()))
            .await?;
        let removed = self
            .call("delete_one", self.store.delete_one(&RecordFilter::by_name(name)))
            .await?;
        if removed == 0 {
            debug!(name = %name, "Delete matched no contact");
            return Ok(remaining);
        }

        if let Some(index) = remaining.iter().position(|r| r.name == name) {
            remaining.remove(index);
        }
        info!(name = %name, "Contact deleted");
        Ok(remaining)
    }

    /// キーに一致するレコードを同じ位置で置き換える
    ///
    /// 保存される名前はパスのキーで上書きされる。
    pub async fn update(&self, name: &str, mut record: Record) -> RegistryResult<Record> {
        record.name = name.to_string();
        record.validate()?;

        let _writer = self.writer.lock().await;
        let replaced = self
            .call(
                "replace_one",
                self.store
                    .replace_one(&RecordFilter::by_name(name), record.clone()),
            )
            .await?;
        if replaced == 0 {
            return Err(RegistryError::NotFound(name.to_string()));
        }

        info!(name = %name, "Contact replaced");
        Ok(record)
    }

    /// キーに一致するレコードへ部分更新を適用
    pub async fn patch(&self, name: &str, patch: RecordPatch) -> RegistryResult<Record> {
        let filter = RecordFilter::by_name(name);

        let _writer = self.writer.lock().await;
        let matched = self
            .call("update_many", self.store.update_many(&filter, &patch))
            .await?;
        if matched == 0 {
            return Err(RegistryError::NotFound(name.to_string()));
        }

        info!(name = %name, matched, "Contact patched");
        self.call("find_one", self.store.find_one(&filter))
            .await?
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// 起動時の初期データを登録
    ///
    /// 検証と重複チェックをバッチ全体に対して先に行い、
    /// 不正なレコードが1件でもあれば何も登録しない。
    pub async fn seed(&self, records: Vec<Record>) -> RegistryResult<usize> {
        let _writer = self.writer.lock().await;

        let mut seen = HashSet::new();
        for record in &records {
            record.validate()?;
            if !seen.insert(record.name.as_str()) {
                return Err(RegistryError::Conflict(record.name.clone()));
            }
            let filter = RecordFilter::by_name(record.name.as_str());
            if self
                .call("find_one", self.store.find_one(&filter))
                .await?
                .is_some()
            {
                return Err(RegistryError::Conflict(record.name.clone()));
            }
        }

        let count = records.len();
        for record in records {
            self.insert_unique(record).await?;
        }
        info!(count, "Seeded contacts");
        Ok(count)
    }

    /// ストアの疎通確認
    pub async fn ping(&self) -> RegistryResult<()> {
        self.call("ping", self.store.ping()).await
    }

    /// 登録済みレコード数
    pub async fn len(&self) -> RegistryResult<usize> {
        Ok(self.list().await?.len())
    }

    /// レコードが1件もないか
    pub async fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.len().await? == 0)
    }
}

impl Default for ContactRegistry {
    fn default() -> Self {
        Self::in_memory()
    }
}
