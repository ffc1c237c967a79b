//! # BFF エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! Airtable 由来のエラーはここで一度だけログに出力し、クライアントには
//! 固定メッセージの 500 のみを返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use galleria_domain::PageRequestError;
use galleria_shared::ErrorResponse;
use thiserror::Error;

use crate::client::AirtableError;

/// BFF 層で発生するエラー
///
/// `IntoResponse` を実装しているため、axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum BffError {
    /// バリデーションエラー（400 Bad Request）
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// Airtable への通信エラー（500 Internal Server Error）
    #[error("Airtable への通信に失敗しました: {0}")]
    Upstream(#[from] AirtableError),
}

impl From<PageRequestError> for BffError {
    fn from(err: PageRequestError) -> Self {
        BffError::Validation(err.to_string())
    }
}

impl IntoResponse for BffError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            BffError::Validation(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message))
            }
            BffError::Upstream(err) => {
                // セキュリティ: 外部サービスのエラー詳細はログのみ
                tracing::error!(
                    error.category = "external_service",
                    error.kind = upstream_error_kind(&err),
                    "Airtable からの取得に失敗しました: {}",
                    err
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

fn upstream_error_kind(err: &AirtableError) -> &'static str {
    match err {
        AirtableError::Network(_) => "network",
        AirtableError::Timeout => "timeout",
        AirtableError::UnexpectedStatus { .. } => "unexpected_status",
        AirtableError::MalformedBody(_) => "malformed_body",
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use galleria_shared::error_response::INTERNAL_ERROR_MESSAGE;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    async fn response_status_and_body(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error)
    }

    #[rstest]
    #[case::network(AirtableError::Network("connection refused".to_string()))]
    #[case::timeout(AirtableError::Timeout)]
    #[case::unexpected_status(AirtableError::UnexpectedStatus {
        status: 403,
        body:   r#"{"error":"INVALID_PERMISSIONS_OR_MODEL_NOT_FOUND"}"#.to_string(),
    })]
    #[case::malformed_body(AirtableError::MalformedBody("records 配列がありません".to_string()))]
    #[tokio::test]
    async fn test_upstreamエラーは固定メッセージの500になる(#[case] err: AirtableError) {
        let (status, body) =
            response_status_and_body(BffError::Upstream(err).into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, ErrorResponse::new(INTERNAL_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_page指定エラーは400になる() {
        let err: BffError = PageRequestError::PageNumberUnsupported("3".to_string()).into();

        let (status, body) = response_status_and_body(err.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.message.contains("offset"), "{}", body.message);
    }
}
