//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `RegistryError`は`external_message()`と`code()`を提供し、
//! 内部情報を含まないクライアント向けエラーレスポンスを生成できます。

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Registry service error type
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// No record with the given key
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Request body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// A record with the same key already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backing store is unreachable or failed
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Store call exceeded the configured timeout
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Returns a safe error message for external clients.
    ///
    /// Store addresses and raw decoder output stay in the server logs
    /// (`Display`), never in the response body.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(CommonError::Validation(_)) => "Invalid contact",
            Self::Common(_) => "Request error",
            Self::NotFound(_) => "Contact not found",
            Self::Decode(_) => "Malformed request body",
            Self::Conflict(_) => "Contact already exists",
            Self::StoreUnavailable(_) => "Storage temporarily unavailable",
            Self::Timeout(_) => "Storage timeout",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Common(CommonError::Validation(_)) => "INVALID_CONTACT",
            Self::Common(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Conflict(_) => "DUPLICATE_NAME",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Timeout(_) => "STORE_TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// クライアントが再試行すべきエラーかどうか
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::Timeout(_))
    }
}

/// Registry result type alias
pub type RegistryResult<T> = Result<T, RegistryError>;
