//! # エラーレスポンス
//!
//! フロントエンドに返すエラーレスポンスの形式 `{ "message": "..." }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - 500 系のメッセージは固定値とし、外部サービスのエラー詳細を含めない

use serde::{Deserialize, Serialize};

/// 内部エラー時にクライアントへ返す固定メッセージ
pub const INTERNAL_ERROR_MESSAGE: &str = "内部エラーが発生しました";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 500 Internal Server Error
    ///
    /// message は固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new(INTERNAL_ERROR_MESSAGE)
    }
}
