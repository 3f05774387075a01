//! 連絡先レコード型定義
//!
//! Record（保存単位）、RecordPatch（部分更新）、RecordFilter（一致検索条件）

use serde::{Deserialize, Serialize};

use crate::error::CommonError;

/// 連絡先レコード
///
/// `name` がキー。空のフィールドはシリアライズ時に省略され、
/// 欠落したフィールドは空文字列としてデシリアライズされる。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// 名前（一意キー）
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// 電話番号
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    /// メールアドレス
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
}

impl Record {
    /// 新しいレコードを作成
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// キーとして使えるかを検証
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.name.trim().is_empty() {
            return Err(CommonError::Validation("name is required".to_string()));
        }
        Ok(())
    }

    /// 全フィールドが空かどうか
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }
}

/// 部分更新リクエスト
///
/// 指定されたフィールドのみ上書きする。`name` はキーのため変更不可
/// （未知フィールドとしてデコードエラーになる）。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RecordPatch {
    /// 新しい電話番号
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 新しいメールアドレス
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RecordPatch {
    /// パッチをレコードに適用
    pub fn apply(&self, record: &mut Record) {
        if let Some(phone) = &self.phone {
            record.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            record.email = email.clone();
        }
    }

    /// 変更を含まないパッチかどうか
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none()
    }
}

/// レコード検索条件（完全一致、指定フィールドのAND）
///
/// 空のフィルタは全レコードに一致する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// 名前
    pub name: Option<String>,
    /// 電話番号
    pub phone: Option<String>,
    /// メールアドレス
    pub email: Option<String>,
}

impl RecordFilter {
    /// 全件一致フィルタ
    pub fn all() -> Self {
        Self::default()
    }

    /// キー（name）一致フィルタ
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// レコードが条件に一致するか
    pub fn matches(&self, record: &Record) -> bool {
        fn field_matches(expected: &Option<String>, actual: &str) -> bool {
            expected.as_deref().map_or(true, |value| value == actual)
        }

        field_matches(&self.name, &record.name)
            && field_matches(&self.phone, &record.phone)
            && field_matches(&self.email, &record.email)
    }
}
