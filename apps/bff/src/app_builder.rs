//! # BFF アプリケーション構築
//!
//! DI（クライアント・State）の初期化とルーター構築を担当する。
//! `main.rs` はトレーシング初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::get};
use galleria_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::{AirtableClient, AirtableClientImpl, AirtableError},
    config::BffConfig,
    handler::{ItemsState, health_check, list_items},
    middleware::no_cache,
};

/// 設定から依存を組み立て、ルーターを構築する
pub fn build_app(config: &BffConfig) -> Result<Router, AirtableError> {
    let airtable_client: Arc<dyn AirtableClient> = Arc::new(
        AirtableClientImpl::new(&config.airtable, config.upstream_timeout)?
            .with_diagnostics(config.debug_enabled),
    );

    let items_state = Arc::new(ItemsState {
        airtable_client,
        query_recovery_enabled: config.query_recovery_enabled,
        debug_enabled: config.debug_enabled,
    });

    Ok(build_router(items_state))
}

/// State を受け取ってルーターを構築する
///
/// テストではスタブクライアントを持つ State を渡す。
pub fn build_router(items_state: Arc<ItemsState>) -> Router {
    // レイヤー順序が重要: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
    // 2. TraceLayer: スパンに request_id を含め、全ログに自動注入
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    Router::new()
        .route("/health", get(health_check))
        .route("/api/items", get(list_items))
        .with_state(items_state)
        .layer(from_fn(no_cache))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
