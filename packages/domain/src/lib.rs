//! # Galleria ドメインモデル
//!
//! ギャラリー表示用アイテムと、その一覧取得に関わる値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - HTTP・Airtable などの外部依存を持たない純粋な型のみを配置する
//! - 外部サービス固有の表現（フィルタ式の構文など）は値オブジェクトの責務として閉じ込める
//!
//! ## モジュール構成
//!
//! - [`item`]: 表示用アイテム
//! - [`category`]: カテゴリフィルタとフィルタ式のエスケープ
//! - [`page`]: ページトークンとページ指定

pub mod category;
pub mod item;
pub mod page;

pub use category::CategoryFilter;
pub use item::Item;
pub use page::{PageRequest, PageRequestError, PageToken};
