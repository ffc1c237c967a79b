//! Airtable クライアントのエラー型

use thiserror::Error;

/// Airtable クライアントエラー
///
/// いずれのバリアントも呼び出し元には内容を返さず、ログにのみ出力する。
#[derive(Debug, Clone, Error)]
pub enum AirtableError {
    /// 接続失敗などのネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// タイムアウト
    #[error("Airtable の応答がタイムアウトしました")]
    Timeout,

    /// 2xx 以外のステータス
    #[error("予期しないステータス {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// レスポンスボディが想定外の形式
    #[error("レスポンスの形式が不正です: {0}")]
    MalformedBody(String),
}

impl From<reqwest::Error> for AirtableError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return AirtableError::Timeout;
        }
        AirtableError::Network(err.to_string())
    }
}
