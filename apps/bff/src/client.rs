//! # 外部 API クライアント
//!
//! Airtable との通信を担当する。

pub mod airtable;

pub use airtable::{
    AirtableClient,
    AirtableClientImpl,
    AirtableError,
    ItemsPage,
    ListItemsQuery,
    PAGE_SIZE,
    UpstreamDiagnostics,
    parse_page,
};
