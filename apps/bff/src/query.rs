//! # クエリパラメータの抽出
//!
//! `GET /api/items` のクエリパラメータを取り出す。
//!
//! ## パラメータの取得元
//!
//! 通常はリクエスト URI（axum の `OriginalUri`）のみを参照する。
//!
//! URL を書き換えるプロキシの背後ではクエリ文字列が失われることがあるため、
//! `QUERY_RECOVERY_ENABLED=true` のときに限り、リクエスト URI にクエリがなければ
//! 以下のヘッダーを優先順に調べ、クエリを持つ最初の URL を採用する。
//!
//! 1. `X-Original-URL`
//! 2. `X-Forwarded-URL`
//! 3. `X-Rewrite-URL`
//! 4. `Referer`
//!
//! どれも該当しなければリクエスト URI（= パラメータなし）を使う。

use axum::http::{HeaderMap, Uri};
use url::form_urlencoded;

/// クエリ復元で参照するヘッダー（優先順）
pub const RECOVERY_HEADERS: [&str; 4] = [
    "x-original-url",
    "x-forwarded-url",
    "x-rewrite-url",
    "referer",
];

/// `GET /api/items` のクエリパラメータ
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemsQueryParams {
    pub category: Option<String>,
    pub offset:   Option<String>,
    pub page:     Option<String>,
    pub debug:    Option<String>,
}

impl ItemsQueryParams {
    /// クエリ文字列（`?` を除いた部分）をパースする
    ///
    /// 同じキーが複数回現れた場合は最初の値を採用する。
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "category" => &mut params.category,
                "offset" => &mut params.offset,
                "page" => &mut params.page,
                "debug" => &mut params.debug,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// `debug=1` が指定されているか
    pub fn debug_requested(&self) -> bool {
        self.debug.as_deref() == Some("1")
    }
}

/// パラメータの取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    /// リクエスト URI
    RequestUri,
    /// 復元に使ったヘッダー
    Header(&'static str),
}

/// 抽出結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedQuery {
    pub params: ItemsQueryParams,
    pub source: QuerySource,
}

/// リクエストからクエリパラメータを抽出する
///
/// `recovery_enabled` が `false` の場合はリクエスト URI のみを参照する。
pub fn extract_query(uri: &Uri, headers: &HeaderMap, recovery_enabled: bool) -> ExtractedQuery {
    let request_query = uri.query().filter(|q| !q.is_empty());

    if let Some(query) = request_query {
        return ExtractedQuery {
            params: ItemsQueryParams::from_query(query),
            source: QuerySource::RequestUri,
        };
    }

    if recovery_enabled {
        let recovered = RECOVERY_HEADERS.iter().find_map(|&name| {
            let value = headers.get(name)?.to_str().ok()?;
            query_of(value).map(|query| (name, query))
        });

        if let Some((name, query)) = recovered {
            return ExtractedQuery {
                params: ItemsQueryParams::from_query(query),
                source: QuerySource::Header(name),
            };
        }
    }

    ExtractedQuery {
        params: ItemsQueryParams::default(),
        source: QuerySource::RequestUri,
    }
}

/// URL（絶対・相対どちらも可）からクエリ文字列を取り出す
///
/// フラグメントは除外する。クエリが空の場合は `None`。
fn query_of(url: &str) -> Option<&str> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let (_, query) = without_fragment.split_once('?')?;
    Some(query).filter(|q| !q.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_クエリをパースしてデコードする() {
        let params =
            ItemsQueryParams::from_query("category=Street%20Art&offset=itr1%2Frec2&page=1&x=y");

        assert_eq!(
            params,
            ItemsQueryParams {
                category: Some("Street Art".to_string()),
                offset:   Some("itr1/rec2".to_string()),
                page:     Some("1".to_string()),
                debug:    None,
            }
        );
    }

    #[test]
    fn test_重複キーは最初の値を採用する() {
        let params = ItemsQueryParams::from_query("category=Nature&category=City");

        assert_eq!(params.category.as_deref(), Some("Nature"));
    }

    #[rstest]
    #[case(Some("1"), true)]
    #[case(Some("true"), false)]
    #[case(Some("0"), false)]
    #[case(None, false)]
    fn test_debug_requested(#[case] debug: Option<&str>, #[case] expected: bool) {
        let params = ItemsQueryParams {
            debug: debug.map(str::to_string),
            ..Default::default()
        };

        assert_eq!(params.debug_requested(), expected);
    }

    #[test]
    fn test_リクエストuriのクエリを優先する() {
        let uri: Uri = "/api/items?category=Nature".parse().unwrap();
        let headers = headers(&[("x-original-url", "/api/items?category=City")]);

        let extracted = extract_query(&uri, &headers, true);

        assert_eq!(extracted.source, QuerySource::RequestUri);
        assert_eq!(extracted.params.category.as_deref(), Some("Nature"));
    }

    #[test]
    fn test_復元無効時はヘッダーを参照しない() {
        let uri: Uri = "/api/items".parse().unwrap();
        let headers = headers(&[("x-original-url", "/api/items?category=City")]);

        let extracted = extract_query(&uri, &headers, false);

        assert_eq!(extracted.source, QuerySource::RequestUri);
        assert_eq!(extracted.params, ItemsQueryParams::default());
    }

    #[test]
    fn test_クエリを持つ最初のヘッダーを採用する() {
        let uri: Uri = "/api/items".parse().unwrap();
        let headers = headers(&[
            // クエリを持たないものは飛ばす
            ("x-original-url", "/api/items"),
            ("x-forwarded-url", "https://gallery.example.com/api/items?"),
            ("x-rewrite-url", "/api/items?category=Nature&offset=itr1"),
            ("referer", "https://gallery.example.com/?category=City"),
        ]);

        let extracted = extract_query(&uri, &headers, true);

        assert_eq!(extracted.source, QuerySource::Header("x-rewrite-url"));
        assert_eq!(extracted.params.category.as_deref(), Some("Nature"));
        assert_eq!(extracted.params.offset.as_deref(), Some("itr1"));
    }

    #[test]
    fn test_refererは最後に参照する() {
        let uri: Uri = "/api/items".parse().unwrap();
        let headers = headers(&[(
            "referer",
            "https://gallery.example.com/galleria?category=City#top",
        )]);

        let extracted = extract_query(&uri, &headers, true);

        assert_eq!(extracted.source, QuerySource::Header("referer"));
        assert_eq!(extracted.params.category.as_deref(), Some("City"));
    }

    #[test]
    fn test_どのヘッダーも該当しなければリクエストuriを使う() {
        let uri: Uri = "/api/items".parse().unwrap();
        let headers = headers(&[("referer", "https://gallery.example.com/#?category=City")]);

        let extracted = extract_query(&uri, &headers, true);

        assert_eq!(extracted.source, QuerySource::RequestUri);
        assert_eq!(extracted.params, ItemsQueryParams::default());
    }

    #[rstest]
    #[case("/api/items?a=1", Some("a=1"))]
    #[case("https://example.com/p?a=1#frag", Some("a=1"))]
    #[case("https://example.com/p?", None)]
    #[case("https://example.com/p#?a=1", None)]
    #[case("/api/items", None)]
    fn test_query_of(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(query_of(url), expected);
    }
}
