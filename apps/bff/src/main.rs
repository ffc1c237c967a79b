//! # Galleria BFF (Backend for Frontend) サーバー
//!
//! ギャラリーのフロントエンド専用の API サーバー。
//!
//! ## 役割
//!
//! BFF はフロントエンドと Airtable の間に位置し、以下の責務を担う:
//!
//! - **認証情報の秘匿**: Airtable の API キーをブラウザに渡さない
//! - **クエリ変換**: カテゴリ・ページ指定を Airtable のフィルタ式・`offset` に変換する
//! - **レスポンス最適化**: レコードを表示用アイテム（タイトル・画像・カテゴリ）に変換する
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Browser    │────▶│     BFF      │────▶│   Airtable   │
//! │  (Gallery)   │     │  port: 13000 │     │   REST API   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `BFF_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `BFF_PORT` | **Yes** | ポート番号 |
//! | `AIRTABLE_API_KEY` | **Yes** | Airtable の Personal Access Token |
//! | `AIRTABLE_BASE_ID` | **Yes** | ベース ID |
//! | `AIRTABLE_TABLE_NAME` | **Yes** | テーブル名 |
//! | `AIRTABLE_VIEW` | No | ビュー名（デフォルト: `links 2`） |
//! | `AIRTABLE_API_URL` | No | API の URL（デフォルト: `https://api.airtable.com/v0`） |
//! | `UPSTREAM_TIMEOUT_SECS` | No | Airtable 呼び出しのタイムアウト秒数（デフォルト: `10`） |
//! | `QUERY_RECOVERY_ENABLED` | No | ヘッダーからのクエリ復元（`true` で有効） |
//! | `ITEMS_DEBUG_ENABLED` | No | `debug=1` の有効化（`true` で有効、デバッグビルドのみ） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p galleria-bff
//!
//! # 本番環境（環境変数を直接指定）
//! BFF_PORT=3000 AIRTABLE_API_KEY=pat... LOG_FORMAT=json cargo run -p galleria-bff --release
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use galleria_bff::{app_builder::build_app, config::BffConfig};
use galleria_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// BFF サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("bff");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing_config.app_span().entered();

    let config = BffConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "BFF サーバーを起動します: {}:{} (airtable base={}, table={}, view={})",
        config.host,
        config.port,
        config.airtable.base_id,
        config.airtable.table_name,
        config.airtable.view
    );

    if config.debug_enabled {
        tracing::warn!("ITEMS_DEBUG_ENABLED が有効です。debug=1 で Airtable の生レスポンスを返します");
    }
    if config.query_recovery_enabled {
        tracing::info!("QUERY_RECOVERY_ENABLED が有効です");
    }

    let app = build_app(&config).context("Airtable クライアントの初期化に失敗しました")?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("BFF サーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
