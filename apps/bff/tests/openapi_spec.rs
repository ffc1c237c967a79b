//! # OpenAPI 仕様テスト
//!
//! utoipa から生成される OpenAPI 仕様の整合性を検証する。

use galleria_bff::openapi::ApiDoc;
use utoipa::OpenApi;

#[test]
fn test_openapi仕様がパニックせず生成される() {
    let doc = ApiDoc::openapi();
    // パニックしなければ成功
    let _yaml = doc.to_yaml().unwrap();
}

#[test]
fn test_全パスが含まれている() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&str> = doc.paths.paths.keys().map(|k| k.as_str()).collect();

    assert_eq!(paths.len(), 2, "パス数が 2 であること: {paths:?}");
    assert!(paths.contains(&"/health"));
    assert!(paths.contains(&"/api/items"));
}

#[test]
fn test_全タグが含まれている() {
    let doc = ApiDoc::openapi();
    let tags: Vec<&str> = doc
        .tags
        .as_ref()
        .expect("tags が存在すること")
        .iter()
        .map(|t| t.name.as_str())
        .collect();

    assert!(tags.contains(&"health"));
    assert!(tags.contains(&"items"));
}

#[test]
fn test_レスポンススキーマが登録されている() {
    let doc = ApiDoc::openapi();
    let components = doc.components.as_ref().expect("components が存在すること");

    for name in ["ErrorResponse", "ItemsResponse", "Item", "HealthResponse"] {
        assert!(
            components.schemas.contains_key(name),
            "{name} スキーマが存在すること"
        );
    }
}

#[test]
fn test_アイテム一覧のクエリパラメータが文書化されている() {
    let doc = ApiDoc::openapi();
    let operation = doc.paths.paths["/api/items"]
        .get
        .as_ref()
        .expect("GET /api/items が存在すること");
    let names: Vec<&str> = operation
        .parameters
        .as_ref()
        .expect("parameters が存在すること")
        .iter()
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(names, vec!["category", "offset", "page", "debug"]);
}
