//! レコードストア抽象化
//!
//! レジストリが委譲する永続化コラボレーターの契約。
//! 実装はインメモリ（[`memory::MemoryStore`]）のみ同梱する。

pub mod memory;

use async_trait::async_trait;
use contacts_common::error::RegistryError;
use contacts_common::types::{Record, RecordFilter, RecordPatch};
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryStore;

/// ストアが払い出すレコードID
pub type RecordId = Uuid;

/// ストア操作のエラー型
#[derive(Debug, Error)]
pub enum StoreError {
    /// ストアに到達できない、または操作に失敗した
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// ストア側でタイムアウトした
    #[error("store timeout: {0}")]
    Timeout(String),
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => RegistryError::StoreUnavailable(msg),
            StoreError::Timeout(msg) => RegistryError::Timeout(msg),
        }
    }
}

/// ストア操作の結果型
pub type StoreResult<T> = Result<T, StoreError>;

/// レコードストアのRepository trait
///
/// すべての検索は挿入順で評価される。
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// 末尾にレコードを追加し、払い出したIDを返す
    async fn insert(&self, record: Record) -> StoreResult<RecordId>;
    /// 最初に一致したレコードを取得
    async fn find_one(&self, filter: &RecordFilter) -> StoreResult<Option<Record>>;
    /// 一致したすべてのレコードを挿入順で取得
    async fn find_many(&self, filter: &RecordFilter) -> StoreResult<Vec<Record>>;
    /// 最初に一致したレコードを同じ位置で置き換え、置換件数（0/1）を返す
    async fn replace_one(&self, filter: &RecordFilter, record: Record) -> StoreResult<u64>;
    /// 一致したすべてのレコードにパッチを適用し、一致件数を返す
    async fn update_many(&self, filter: &RecordFilter, patch: &RecordPatch) -> StoreResult<u64>;
    /// 最初に一致したレコードを削除し、削除件数（0/1）を返す
    async fn delete_one(&self, filter: &RecordFilter) -> StoreResult<u64>;
    /// 疎通確認
    async fn ping(&self) -> StoreResult<()>;
}
