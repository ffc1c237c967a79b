//! # ページネーション付きレスポンス
//!
//! カーソル（Airtable の `offset`）ベースのページネーションに対応した API レスポンス型。

use serde::{Deserialize, Serialize};

/// ページネーション付きレスポンス
///
/// ## JSON 形式
///
/// ```json
/// {
///   "items": [...],
///   "offset": "opaque-cursor-string"
/// }
/// ```
///
/// `offset` が `null` の場合は最後のページを意味する。
/// クライアントは受け取った `offset` を次のリクエストの `offset` にそのまま渡す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginatedResponse<T> {
    pub items:  Vec<T>,
    pub offset: Option<String>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, offset: Option<String>) -> Self {
        Self { items, offset }
    }
}
