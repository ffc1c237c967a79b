//! # ページネーション
//!
//! Airtable のページネーションはトークン方式のみを扱う。
//!
//! - [`PageToken`]: Airtable が返す不透明なカーソル（`offset`）
//! - [`PageRequest`]: 取得したいページの指定
//!
//! 1 始まりのページ番号（`page`）は互換性のため受け付けるが、先頭ページ
//! （`page=1`）以外は拒否する。N ページ目に到達するために先頭から順に
//! 読み飛ばす方式は、1 リクエストあたり N 回の外部呼び出しになるため採用しない。

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Airtable のページトークン
///
/// 形式について何も仮定しない。受け取った値をそのまま次のリクエストに渡す。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageToken(String);

impl PageToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// クエリパラメータからトークンを作る
    ///
    /// 未指定・空白のみの場合は `None`。値そのものは加工しない。
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.filter(|value| !value.trim().is_empty()).map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ページ指定の解釈エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// `page` が正の整数ではない
    #[error("page は 1 以上の整数で指定してください: {0:?}")]
    InvalidPage(String),

    /// 先頭以外のページ番号が指定された
    ///
    /// 整数型に収まらない桁数の番号もここに含める。
    #[error("page={0} は指定できません。前回レスポンスの offset を指定してください")]
    PageNumberUnsupported(String),
}

/// 取得するページ
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageRequest {
    /// 先頭ページ
    #[default]
    First,
    /// トークンが指す位置から続くページ
    After(PageToken),
}

impl PageRequest {
    /// `offset` と `page` のクエリパラメータからページ指定を決定する
    ///
    /// `offset` が指定されていればそれを優先し、`page` は無視する。
    ///
    /// ```
    /// use galleria_domain::{PageRequest, PageToken};
    ///
    /// assert_eq!(PageRequest::resolve(None, None), Ok(PageRequest::First));
    /// assert_eq!(PageRequest::resolve(None, Some("1")), Ok(PageRequest::First));
    /// assert_eq!(
    ///     PageRequest::resolve(Some("itrABC/rec123"), Some("3")),
    ///     Ok(PageRequest::After(PageToken::new("itrABC/rec123")))
    /// );
    /// assert!(PageRequest::resolve(None, Some("2")).is_err());
    /// ```
    pub fn resolve(offset: Option<&str>, page: Option<&str>) -> Result<Self, PageRequestError> {
        if let Some(token) = PageToken::parse(offset) {
            return Ok(Self::After(token));
        }

        let Some(raw) = page.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(Self::First);
        };

        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PageRequestError::InvalidPage(raw.to_string()));
        }

        match raw.trim_start_matches('0') {
            "" => Err(PageRequestError::InvalidPage(raw.to_string())),
            "1" => Ok(Self::First),
            _ => Err(PageRequestError::PageNumberUnsupported(raw.to_string())),
        }
    }

    /// 外部リクエストに付与するトークン
    pub fn token(&self) -> Option<&PageToken> {
        match self {
            Self::First => None,
            Self::After(token) => Some(token),
        }
    }
}
