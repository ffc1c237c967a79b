//! # OpenAPI 仕様定義
//!
//! utoipa を使用して BFF の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{health, items};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Galleria API",
        version = "0.1.0",
        description = "ギャラリー表示用アイテムを Airtable から取得する BFF API"
    ),
    paths(
        health::health_check,
        items::list_items,
    ),
    components(schemas(
        galleria_shared::ErrorResponse,
        galleria_shared::HealthResponse,
        galleria_domain::Item,
        items::ItemsResponse,
        items::ItemsDebug,
    )),
    tags(
        (name = "health", description = "ヘルスチェック"),
        (name = "items", description = "アイテム一覧"),
    )
)]
pub struct ApiDoc;
