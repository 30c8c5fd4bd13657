//! Tests for engine module

use super::*;
use crate::http::StaticSource;
use serde_json::json;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn test_config(dir: &TempDir, apis: Vec<Endpoint>) -> Config {
    Config {
        type_path: dir.path().join("types"),
        cache_path: dir.path().join("cache").join("hashes.json"),
        apis,
        ..Config::default()
    }
}

fn sample_source() -> StaticSource {
    StaticSource::new()
        .with_sample("/users", json!([{"id": 1, "name": "cc"}]))
        .with_sample("/posts/1", json!({"title": "hello", "tags": []}))
}

// ============================================================================
// Naming Tests
// ============================================================================

#[test]
fn test_resolve_name_from_path() {
    let mut anonymous = 0;
    assert_eq!(
        resolve_name(&Endpoint::from("/users/1/posts"), &mut anonymous),
        "UsersPosts"
    );
    assert_eq!(anonymous, 0);
}

#[test]
fn test_resolve_name_override_is_capitalized() {
    let mut anonymous = 0;
    let endpoint = Endpoint::Named {
        name: "currentUser".to_string(),
        api: "/users/me".to_string(),
    };
    assert_eq!(resolve_name(&endpoint, &mut anonymous), "CurrentUser");
}

#[test]
fn test_resolve_name_anonymous_counts_up() {
    let mut anonymous = 0;
    assert_eq!(resolve_name(&Endpoint::from("/1"), &mut anonymous), "Anonymous1");
    assert_eq!(resolve_name(&Endpoint::from("/"), &mut anonymous), "Anonymous2");
    assert_eq!(anonymous, 2);
}

#[test]
fn test_declaration_path() {
    assert_eq!(
        declaration_path(Path::new("/out"), "user"),
        Path::new("/out/User.d.ts")
    );
}

// ============================================================================
// Run Tests
// ============================================================================

#[tokio::test]
async fn test_run_writes_declarations() {
    let dir = tempdir().unwrap();
    let config = test_config(
        &dir,
        vec![
            Endpoint::from("/users"),
            Endpoint::from("/posts/1"),
            Endpoint::from("/missing"),
        ],
    );

    let mut generator = Generator::new(config, sample_source());
    let report = generator.run().await.unwrap();

    assert_eq!(report.endpoints.len(), 3);
    assert_eq!(report.written(), 2);
    assert_eq!(report.unchanged(), 0);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.endpoints[2].api(), "/missing");
    assert!(report.endpoints[2].is_failed());

    let users = std::fs::read_to_string(dir.path().join("types/Users.d.ts")).unwrap();
    assert_eq!(
        users,
        "export type UsersType = Array<Users>;\n\nexport interface Users {\n  id: number,\n  name: string\n}\n"
    );

    let posts = std::fs::read_to_string(dir.path().join("types/Posts.d.ts")).unwrap();
    assert_eq!(
        posts,
        "export interface PostsType {\n  title: string,\n  tags: Array<any>\n}\n"
    );

    assert!(dir.path().join("cache/hashes.json").exists());
    assert!(!dir.path().join("types/Missing.d.ts").exists());
}

#[tokio::test]
async fn test_second_run_is_unchanged() {
    let dir = tempdir().unwrap();
    let apis = vec![Endpoint::from("/users"), Endpoint::from("/posts/1")];

    let mut first = Generator::new(test_config(&dir, apis.clone()), sample_source());
    first.run().await.unwrap();
    let cache_before = std::fs::read_to_string(dir.path().join("cache/hashes.json")).unwrap();
    let users_before = std::fs::read_to_string(dir.path().join("types/Users.d.ts")).unwrap();

    let mut second = Generator::new(test_config(&dir, apis), sample_source());
    let report = second.run().await.unwrap();

    assert_eq!(report.unchanged(), 2);
    assert_eq!(report.written(), 0);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("cache/hashes.json")).unwrap(),
        cache_before
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("types/Users.d.ts")).unwrap(),
        users_before
    );
}

#[tokio::test]
async fn test_deleted_file_is_regenerated() {
    let dir = tempdir().unwrap();
    let apis = vec![Endpoint::from("/users")];

    Generator::new(test_config(&dir, apis.clone()), sample_source())
        .run()
        .await
        .unwrap();
    std::fs::remove_file(dir.path().join("types/Users.d.ts")).unwrap();

    let report = Generator::new(test_config(&dir, apis), sample_source())
        .run()
        .await
        .unwrap();

    assert_eq!(report.written(), 1);
    assert!(dir.path().join("types/Users.d.ts").exists());
}

#[tokio::test]
async fn test_emptied_file_is_regenerated() {
    let dir = tempdir().unwrap();
    let apis = vec![Endpoint::from("/users")];
    let users_path = dir.path().join("types/Users.d.ts");

    Generator::new(test_config(&dir, apis.clone()), sample_source())
        .run()
        .await
        .unwrap();
    let users_before = std::fs::read_to_string(&users_path).unwrap();
    std::fs::write(&users_path, "").unwrap();

    let report = Generator::new(test_config(&dir, apis), sample_source())
        .run()
        .await
        .unwrap();

    assert_eq!(report.written(), 1);
    assert_eq!(report.unchanged(), 0);
    assert_eq!(std::fs::read_to_string(&users_path).unwrap(), users_before);
}

#[tokio::test]
async fn test_changed_sample_is_rewritten() {
    let dir = tempdir().unwrap();
    let apis = vec![Endpoint::from("/users")];

    Generator::new(test_config(&dir, apis.clone()), sample_source())
        .run()
        .await
        .unwrap();

    let source = StaticSource::new().with_sample("/users", json!([{"id": 1, "email": null}]));
    let report = Generator::new(test_config(&dir, apis), source)
        .run()
        .await
        .unwrap();

    assert_eq!(report.written(), 1);
    let users = std::fs::read_to_string(dir.path().join("types/Users.d.ts")).unwrap();
    assert!(users.contains("email?: unknown"));
}

#[tokio::test]
async fn test_named_endpoint_uses_override() {
    let dir = tempdir().unwrap();
    let apis = vec![Endpoint::Named {
        name: "author".to_string(),
        api: "/posts/1".to_string(),
    }];

    let report = Generator::new(test_config(&dir, apis), sample_source())
        .run()
        .await
        .unwrap();

    assert_eq!(report.paths(), vec![&dir.path().join("types/Author.d.ts")]);
    let author = std::fs::read_to_string(dir.path().join("types/Author.d.ts")).unwrap();
    assert!(author.starts_with("export interface AuthorType {"));
}

#[tokio::test]
async fn test_in_memory_cache_writes_no_cache_file() {
    let dir = tempdir().unwrap();
    let config = test_config(&dir, vec![Endpoint::from("/users")]);

    let mut generator =
        Generator::new(config, sample_source()).with_cache(HashCache::in_memory());
    let report = generator.run().await.unwrap();

    assert_eq!(report.written(), 1);
    assert_eq!(generator.cache().len(), 1);
    assert!(!dir.path().join("cache/hashes.json").exists());
}

#[tokio::test]
async fn test_all_failures_still_persist_cache() {
    let dir = tempdir().unwrap();
    let config = test_config(&dir, vec![Endpoint::from("/nope")]);

    let report = Generator::new(config, StaticSource::new())
        .run()
        .await
        .unwrap();

    assert_eq!(report.failed(), 1);
    assert!(report.paths().is_empty());
    assert!(dir.path().join("cache/hashes.json").exists());
}
