//! # Galleria BFF ライブラリ
//!
//! ギャラリーのフロントエンドに、Airtable のレコードを表示用アイテムとして提供する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: DI とルーター構築
//! - `client`: 外部 API クライアント（Airtable）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: HTTP エラーレスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（キャッシュ制御）
//! - `openapi`: OpenAPI 仕様定義
//! - `query`: クエリパラメータの抽出

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
pub mod query;
