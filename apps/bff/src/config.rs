//! # BFF 設定
//!
//! 環境変数から BFF サーバーの設定を読み込む。
//!
//! 設定はプロセス起動時に一度だけ構築し、各 State に注入する。
//! モジュールレベルのグローバル定数として参照しないこと。

use std::{env, time::Duration};

use thiserror::Error;

/// Airtable API のデフォルト URL
pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";
/// デフォルトで参照するビュー名
pub const DEFAULT_AIRTABLE_VIEW: &str = "links 2";
/// Airtable 呼び出しのデフォルトタイムアウト（秒）
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} が設定されていません（.env を確認してください）")]
    Missing(&'static str),

    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("ITEMS_DEBUG_ENABLED=true はリリースビルドでは使用できません")]
    DebugInRelease,
}

/// Airtable 接続設定
#[derive(Clone)]
pub struct AirtableConfig {
    /// API のベース URL（末尾スラッシュなし）
    pub api_url:    String,
    /// ベース ID（`app...`）
    pub base_id:    String,
    /// テーブル名
    pub table_name: String,
    /// ビュー名
    pub view:       String,
    /// Personal Access Token
    pub api_key:    String,
}

// api_key をログに出さない
impl std::fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("api_url", &self.api_url)
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .field("view", &self.view)
            .field("api_key", &"***")
            .finish()
    }
}

/// BFF サーバーの設定
#[derive(Debug, Clone)]
pub struct BffConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// Airtable 接続設定
    pub airtable: AirtableConfig,
    /// Airtable 呼び出しのタイムアウト
    pub upstream_timeout: Duration,
    /// リクエスト URL のクエリが失われた場合に、ヘッダーから復元を試みるか
    ///
    /// URL を書き換えるプロキシの背後に置く場合のみ有効にする。
    pub query_recovery_enabled: bool,
    /// `debug=1` で Airtable の生レスポンスを返すか
    ///
    /// 開発時の調査用。リリースビルドでは有効にできない。
    pub debug_enabled: bool,
}

impl BffConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストで環境変数を汚さずに検証するために分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let debug_enabled = parse_flag(lookup("ITEMS_DEBUG_ENABLED").as_deref());

        // 本番環境への誤デプロイを防ぐ
        if cfg!(not(debug_assertions)) && debug_enabled {
            return Err(ConfigError::DebugInRelease);
        }

        let port = required("BFF_PORT")?;
        let port = port.trim().parse().map_err(|_| ConfigError::Invalid {
            name:  "BFF_PORT",
            value: port,
        })?;

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "UPSTREAM_TIMEOUT_SECS",
                        value,
                    });
                }
            },
        };

        Ok(Self {
            host: lookup("BFF_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            airtable: AirtableConfig {
                api_url:    lookup("AIRTABLE_API_URL")
                    .unwrap_or_else(|| DEFAULT_AIRTABLE_API_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                base_id:    required("AIRTABLE_BASE_ID")?,
                table_name: required("AIRTABLE_TABLE_NAME")?,
                view:       lookup("AIRTABLE_VIEW")
                    .unwrap_or_else(|| DEFAULT_AIRTABLE_VIEW.to_string()),
                api_key:    required("AIRTABLE_API_KEY")?,
            },
            upstream_timeout,
            query_recovery_enabled: parse_flag(lookup("QUERY_RECOVERY_ENABLED").as_deref()),
            debug_enabled,
        })
    }
}

/// `true`（大文字小文字を区別しない）のときのみ有効とみなす
fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}
