//! # アイテム一覧 API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/items` - ギャラリー表示用アイテムの一覧（1 ページ分）
//!
//! ## クエリパラメータ
//!
//! | 名前 | 説明 |
//! |------|------|
//! | `category` | カテゴリで絞り込む。未指定または `all` で全件 |
//! | `offset` | 前回レスポンスの `offset`。続きのページを取得する |
//! | `page` | `1` のみ受け付ける（先頭ページ）。続きは `offset` で指定する |
//! | `debug` | `1` で Airtable の生レスポンスを含める（`ITEMS_DEBUG_ENABLED=true` 時のみ） |

use std::sync::Arc;

use axum::{
    Json,
    extract::{OriginalUri, State},
    http::HeaderMap,
};
use galleria_domain::{CategoryFilter, Item, PageRequest, PageToken};
use galleria_shared::{ErrorResponse, PaginatedResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    client::{AirtableClient, ListItemsQuery},
    error::BffError,
    query::{QuerySource, extract_query},
};

/// アイテム一覧 API の共有状態
pub struct ItemsState {
    pub airtable_client:        Arc<dyn AirtableClient>,
    /// ヘッダーからのクエリ復元を行うか
    pub query_recovery_enabled: bool,
    /// `debug=1` を受け付けるか
    pub debug_enabled:          bool,
}

// --- レスポンス型 ---

/// 調査用情報
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemsDebug {
    /// Airtable に送信したリクエスト URL
    pub request_url: String,
    /// Airtable のレスポンスボディ
    pub raw:         serde_json::Value,
}

/// アイテム一覧レスポンス
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemsResponse {
    #[serde(flatten)]
    pub page:  PaginatedResponse<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<ItemsDebug>,
}

// --- ハンドラ ---

/// GET /api/items
///
/// Airtable のレコードを 1 ページ分取得し、表示用アイテムに変換して返す。
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "items",
    params(
        ("category" = Option<String>, Query, description = "カテゴリ（未指定または all で全件）"),
        ("offset" = Option<String>, Query, description = "前回レスポンスの offset"),
        ("page" = Option<u32>, Query, description = "1 のみ指定可能"),
        ("debug" = Option<String>, Query, description = "1 で Airtable の生レスポンスを含める。ITEMS_DEBUG_ENABLED=true のデバッグビルドでのみ有効")
    ),
    responses(
        (status = 200, description = "アイテム一覧", body = ItemsResponse),
        (status = 400, description = "ページ指定が不正", body = ErrorResponse),
        (status = 500, description = "Airtable からの取得に失敗", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_items(
    State(state): State<Arc<ItemsState>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<Json<ItemsResponse>, BffError> {
    let extracted = extract_query(&uri, &headers, state.query_recovery_enabled);
    if let QuerySource::Header(name) = extracted.source {
        tracing::warn!(
            header = name,
            "リクエスト URL にクエリがないため、ヘッダーから復元しました"
        );
    }
    let params = extracted.params;

    let query = ListItemsQuery {
        category: CategoryFilter::parse(params.category.as_deref()),
        page:     PageRequest::resolve(params.offset.as_deref(), params.page.as_deref())?,
    };

    let page = state.airtable_client.list_items(&query).await?;

    let debug = if state.debug_enabled && params.debug_requested() {
        page.diagnostics.map(|d| ItemsDebug {
            request_url: d.request_url,
            raw:         d.raw,
        })
    } else {
        None
    };

    Ok(Json(ItemsResponse {
        page: PaginatedResponse::new(page.items, page.offset.map(PageToken::into_string)),
        debug,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        response::IntoResponse,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::client::{AirtableError, ItemsPage, UpstreamDiagnostics};

    /// 受け取ったクエリを記録するスタブ
    struct RecordingClient {
        received: Mutex<Vec<ListItemsQuery>>,
    }

    #[async_trait]
    impl AirtableClient for RecordingClient {
        async fn list_items(&self, query: &ListItemsQuery) -> Result<ItemsPage, AirtableError> {
            self.received.lock().unwrap().push(query.clone());
            Ok(ItemsPage {
                items:       vec![],
                offset:      None,
                diagnostics: Some(UpstreamDiagnostics {
                    request_url: "https://api.airtable.com/v0/app/t?pageSize=100".to_string(),
                    raw:         serde_json::json!({ "records": [] }),
                }),
            })
        }
    }

    fn state(client: Arc<RecordingClient>, debug_enabled: bool) -> Arc<ItemsState> {
        Arc::new(ItemsState {
            airtable_client: client,
            query_recovery_enabled: false,
            debug_enabled,
        })
    }

    async fn call(state: Arc<ItemsState>, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (mut parts, _) = request.into_parts();
        let original_uri = OriginalUri(parts.uri.clone());
        let headers = std::mem::take(&mut parts.headers);

        let response = list_items(State(state), original_uri, headers)
            .await
            .into_response();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_クエリをクライアントの取得条件に変換する() {
        let client = Arc::new(RecordingClient {
            received: Mutex::new(vec![]),
        });

        let (status, _) = call(
            state(client.clone(), false),
            "/api/items?category=Nature&offset=itr1%2Frec1",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            client.received.lock().unwrap().as_slice(),
            &[ListItemsQuery {
                category: CategoryFilter::parse(Some("Nature")),
                page:     PageRequest::After(PageToken::new("itr1/rec1")),
            }]
        );
    }

    #[tokio::test]
    async fn test_debug無効時はdebugを含めない() {
        let client = Arc::new(RecordingClient {
            received: Mutex::new(vec![]),
        });

        let (_, body) = call(state(client, false), "/api/items?debug=1").await;

        assert!(body.get("debug").is_none());
        assert_eq!(body, serde_json::json!({ "items": [], "offset": null }));
    }

    #[tokio::test]
    async fn test_debug有効かつdebug指定時は生レスポンスを含める() {
        let client = Arc::new(RecordingClient {
            received: Mutex::new(vec![]),
        });

        let (_, body) = call(state(client, true), "/api/items?debug=1").await;

        assert_eq!(body["debug"]["raw"], serde_json::json!({ "records": [] }));
        assert!(
            body["debug"]["request_url"]
                .as_str()
                .unwrap()
                .contains("pageSize=100")
        );
    }

    #[tokio::test]
    async fn test_page2以降の指定はクライアントを呼ばずに400を返す() {
        let client = Arc::new(RecordingClient {
            received: Mutex::new(vec![]),
        });

        let (status, body) = call(state(client.clone(), false), "/api/items?page=2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
        assert!(client.received.lock().unwrap().is_empty());
    }
}
