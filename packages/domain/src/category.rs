//! # カテゴリフィルタ
//!
//! クライアントから渡されたカテゴリ文字列を、Airtable の `filterByFormula` に
//! 埋め込めるフィルタ式へ変換する。
//!
//! ## フィルタ式
//!
//! `Categoria` フィールドとの大文字小文字を区別しない等値比較を生成する:
//!
//! ```text
//! LOWER({Categoria}) = LOWER('Nature')
//! ```
//!
//! 値は単一引用符の文字列リテラルとして埋め込むため、`\` `'` `"` を
//! バックスラッシュでエスケープしてから組み立てる。

/// フィルタ対象の Airtable フィールド名
pub const CATEGORY_FIELD: &str = "Categoria";

/// 「全カテゴリ」を表すクライアント側の予約値
pub const ALL_CATEGORIES: &str = "all";

/// カテゴリによる絞り込み条件
///
/// 値は前後の空白を除去済みで、空文字列や [`ALL_CATEGORIES`] にはならない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter(String);

impl CategoryFilter {
    /// クエリパラメータからフィルタを作る
    ///
    /// 未指定・空白のみ・`"all"` の場合は絞り込みなしとして `None` を返す。
    ///
    /// ```
    /// use galleria_domain::CategoryFilter;
    ///
    /// assert!(CategoryFilter::parse(None).is_none());
    /// assert!(CategoryFilter::parse(Some("all")).is_none());
    /// assert_eq!(
    ///     CategoryFilter::parse(Some(" Nature ")).unwrap().as_str(),
    ///     "Nature"
    /// );
    /// ```
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let value = raw?.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `filterByFormula` に渡すフィルタ式を生成する
    pub fn to_formula(&self) -> String {
        format!(
            "LOWER({{{CATEGORY_FIELD}}}) = LOWER('{}')",
            escape_formula_string(&self.0)
        )
    }
}

/// フィルタ式の文字列リテラル用にエスケープする
pub fn escape_formula_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '\'' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
