//! # HTTP ハンドラ
//!
//! BFF の各エンドポイントを提供する。

pub mod health;
pub mod items;

pub use health::health_check;
pub use items::{ItemsDebug, ItemsResponse, ItemsState, list_items};
