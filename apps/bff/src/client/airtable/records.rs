//! Airtable レコードから表示用アイテムへの変換
//!
//! レコード単位のフィールドは欠損・型違いを許容し、該当フィールドを `None` にする。
//! `id` を持たないレコードは警告ログを出して読み飛ばし、残りのレコードは返す。
//! レスポンス全体の骨格（`records` 配列）が崩れている場合のみエラーとする。

use galleria_domain::{Item, PageToken};
use serde_json::Value;

use super::error::AirtableError;

/// タイトルを保持するフィールド
const TITLE_FIELD: &str = "NomeImmagine";
/// 画像（添付ファイル配列）を保持するフィールド
const IMAGE_FIELD: &str = "immagine";
/// カテゴリを保持するフィールド
const CATEGORY_FIELD: &str = galleria_domain::category::CATEGORY_FIELD;

/// レスポンスボディをアイテム列と次ページのトークンに変換する
///
/// アイテムは Airtable のレコード順を保つ。
pub fn parse_page(body: &Value) -> Result<(Vec<Item>, Option<PageToken>), AirtableError> {
    let records = body
        .get("records")
        .and_then(Value::as_array)
        .ok_or_else(|| AirtableError::MalformedBody("records 配列がありません".to_string()))?;

    let items = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| to_item(index, record))
        .collect();

    let offset = PageToken::parse(body.get("offset").and_then(Value::as_str));

    Ok((items, offset))
}

fn to_item(index: usize, record: &Value) -> Option<Item> {
    let Some(id) = record.get("id").and_then(Value::as_str) else {
        tracing::warn!(index, "id のないレコードを読み飛ばしました");
        return None;
    };

    let fields = record.get("fields");
    let text = |name: &str| {
        fields
            .and_then(|f| f.get(name))
            .and_then(Value::as_str)
            .map(str::to_owned)
    };

    // 添付ファイルは配列で、先頭の url を画像として使う
    let image = fields
        .and_then(|f| f.get(IMAGE_FIELD))
        .and_then(|attachments| attachments.get(0))
        .and_then(|attachment| attachment.get("url"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    Some(Item {
        id: id.to_string(),
        title: text(TITLE_FIELD),
        image,
        category: text(CATEGORY_FIELD),
    })
}
