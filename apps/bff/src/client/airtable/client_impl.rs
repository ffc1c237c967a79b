//! Airtable クライアント実装

use std::time::Duration;

use async_trait::async_trait;

use super::{
    AirtableClient,
    ItemsPage,
    ListItemsQuery,
    UpstreamDiagnostics,
    error::AirtableError,
    records::parse_page,
    response::handle_response,
};
use crate::config::AirtableConfig;

/// 1 リクエストで取得するレコード数（Airtable の上限）
pub const PAGE_SIZE: u32 = 100;

/// Airtable クライアント実装
#[derive(Clone)]
pub struct AirtableClientImpl {
    records_url:         String,
    view:                String,
    api_key:             String,
    client:              reqwest::Client,
    /// 送信 URL と生レスポンスを [`ItemsPage::diagnostics`] に残すか
    capture_diagnostics: bool,
}

impl AirtableClientImpl {
    /// 新しい AirtableClient を作成する
    ///
    /// # 引数
    ///
    /// - `config`: Airtable 接続設定
    /// - `timeout`: 1 回の呼び出し全体（接続からボディ受信まで）のタイムアウト
    pub fn new(config: &AirtableConfig, timeout: Duration) -> Result<Self, AirtableError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            records_url: format!(
                "{}/{}/{}",
                config.api_url.trim_end_matches('/'),
                urlencoding::encode(&config.base_id),
                urlencoding::encode(&config.table_name)
            ),
            view: config.view.clone(),
            api_key: config.api_key.clone(),
            client,
            capture_diagnostics: false,
        })
    }

    /// 調査用に送信 URL と生レスポンスを保持するかを設定する
    ///
    /// `debug=1` を受け付ける場合にのみ有効にする。
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.capture_diagnostics = enabled;
        self
    }

    /// レコード一覧取得のリクエストを組み立てる
    fn build_request(&self, query: &ListItemsQuery) -> Result<reqwest::Request, AirtableError> {
        let mut params = vec![
            ("pageSize", PAGE_SIZE.to_string()),
            ("view", self.view.clone()),
        ];
        if let Some(category) = &query.category {
            params.push(("filterByFormula", category.to_formula()));
        }
        if let Some(token) = query.page.token() {
            params.push(("offset", token.as_str().to_string()));
        }

        let request = self
            .client
            .get(&self.records_url)
            .bearer_auth(&self.api_key)
            .query(&params)
            .build()?;

        Ok(request)
    }
}

#[async_trait]
impl AirtableClient for AirtableClientImpl {
    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(
            category = query.category.as_ref().map(|c| c.as_str()),
            has_offset = query.page.token().is_some()
        )
    )]
    async fn list_items(&self, query: &ListItemsQuery) -> Result<ItemsPage, AirtableError> {
        let request = self.build_request(query)?;
        let request_url = self
            .capture_diagnostics
            .then(|| request.url().to_string());

        let response = self.client.execute(request).await?;
        let raw = handle_response(response).await?;
        let (items, offset) = parse_page(&raw)?;

        tracing::debug!(
            count = items.len(),
            has_more = offset.is_some(),
            "Airtable からアイテムを取得しました"
        );

        let diagnostics = request_url.map(|request_url| UpstreamDiagnostics { request_url, raw });

        Ok(ItemsPage {
            items,
            offset,
            diagnostics,
        })
    }
}
