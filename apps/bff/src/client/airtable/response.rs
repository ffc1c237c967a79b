//! Airtable レスポンスの共通ハンドリング

use super::error::AirtableError;

/// Airtable レスポンスの共通ハンドリング
///
/// 成功時はレスポンスボディを JSON としてパースして返し、
/// エラー時はステータスコードとボディを `AirtableError` に詰めて返す。
/// ボディはログ出力用であり、クライアントには返さない。
pub(super) async fn handle_response(
    response: reqwest::Response,
) -> Result<serde_json::Value, AirtableError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AirtableError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| AirtableError::MalformedBody(e.to_string()))
}
