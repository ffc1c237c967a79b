//! # Airtable クライアント
//!
//! BFF から Airtable REST API への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `GET /v0/{base_id}/{table_name}` - レコード一覧（1 ページ分）
//!
//! ## ページネーション
//!
//! Airtable はレスポンスに `offset` を含めることで続きのページを示す。
//! クライアントはこの値を次のリクエストの `offset` パラメータにそのまま渡す。
//! 1 リクエストにつき外部呼び出しは常に 1 回である。

mod client_impl;
mod error;
mod records;
mod response;

use async_trait::async_trait;
pub use client_impl::{AirtableClientImpl, PAGE_SIZE};
pub use error::AirtableError;
use galleria_domain::{CategoryFilter, Item, PageRequest, PageToken};
pub use records::parse_page;

/// アイテム一覧の取得条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItemsQuery {
    /// カテゴリによる絞り込み（`None` なら全件）
    pub category: Option<CategoryFilter>,
    /// 取得するページ
    pub page:     PageRequest,
}

/// 調査用の外部通信情報
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamDiagnostics {
    /// 送信したリクエスト URL（認証情報はヘッダーで送るため含まない）
    pub request_url: String,
    /// Airtable のレスポンスボディ
    pub raw:         serde_json::Value,
}

/// 1 ページ分のアイテム
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsPage {
    /// Airtable のレコード順を保ったアイテム
    pub items:       Vec<Item>,
    /// 次ページのトークン（最終ページでは `None`）
    pub offset:      Option<PageToken>,
    pub diagnostics: Option<UpstreamDiagnostics>,
}

/// Airtable クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait AirtableClient: Send + Sync {
    /// アイテムを 1 ページ分取得する
    ///
    /// Airtable の `GET /v0/{base_id}/{table_name}` を呼び出す。
    ///
    /// # 引数
    ///
    /// - `query`: 絞り込み条件とページ指定
    ///
    /// # 戻り値
    ///
    /// 変換済みのアイテムと次ページのトークン
    async fn list_items(&self, query: &ListItemsQuery) -> Result<ItemsPage, AirtableError>;
}
