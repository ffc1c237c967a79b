//! # Galleria 共有ユーティリティ
//!
//! BFF とドメイン以外の関心事（レスポンス形式、ヘルスチェック、Observability）を
//! まとめたクレート。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は BFF 側の責務）
//! - tracing 系の依存は `observability` feature でのみ有効にする

pub mod error_response;
pub mod health;
pub mod observability;
pub mod paginated_response;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
pub use paginated_response::PaginatedResponse;
