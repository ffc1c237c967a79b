//! # キャッシュ制御ミドルウェア
//!
//! アイテム一覧は Airtable 側の編集がすぐに反映される必要があるため、
//! `Cache-Control: no-store` を全レスポンスに設定する。
//! ブラウザ・中間プロキシのどちらにもキャッシュさせない。

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// レスポンスに `Cache-Control: no-store` を付与する
///
/// ハンドラが独自に `Cache-Control` を設定していても上書きする。
pub async fn no_cache(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, http::StatusCode, middleware::from_fn, routing::get};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_ハンドラのcache_controlをno_storeで上書きする() {
        let app = Router::new()
            .route(
                "/cached",
                get(|| async { ([(header::CACHE_CONTROL, "max-age=3600")], "ok") }),
            )
            .layer(from_fn(no_cache));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/cached")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    }
}
