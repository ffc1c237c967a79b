//! # 表示用アイテム
//!
//! Airtable のレコード 1 件から導出される、フロントエンド表示用の簡略表現。
//! 永続化はされず、1 回のレスポンスの間だけ存在する。

use serde::{Deserialize, Serialize};

/// ギャラリーに表示するアイテム
///
/// `id` 以外のフィールドはレコード側に値がなくてもよく、その場合は `null` として
/// シリアライズされる（フィールド自体は省略しない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Item {
    /// レコード ID（Airtable の `rec...`）
    pub id:       String,
    /// 画像タイトル
    pub title:    Option<String>,
    /// 画像 URL（添付ファイルの先頭）
    pub image:    Option<String>,
    /// カテゴリ
    pub category: Option<String>,
}
