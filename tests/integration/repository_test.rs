//! PostgreSQL repository tests.
//!
//! These need a live database and are ignored by default. Run with
//! `DATABASE_URL=postgres://... cargo test --test repository_test -- --ignored`.

use sqlx::PgPool;

use explorer_core::error::ErrorKind;
use explorer_core::types::{FileId, FolderId, SortField, SortOption};
use explorer_database::migration::run_migrations;
use explorer_database::{FileRepository, FileStore, FolderRepository, FolderStore};
use explorer_entity::file::{CreateFile, UpdateFile};
use explorer_entity::folder::{CreateFolder, UpdateFolder};

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPool::connect(&url).await.expect("Failed to connect");
    run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

fn folder(name: &str, parent_id: Option<FolderId>) -> CreateFolder {
    CreateFolder {
        owner_id: "repo-test".to_string(),
        name: name.to_string(),
        parent_id,
    }
}

fn file(name: &str, folder_id: FolderId, tags: &[&str]) -> CreateFile {
    CreateFile {
        owner_id: "repo-test".to_string(),
        name: name.to_string(),
        folder_id,
        object_path: format!("objects/{name}"),
        size: 1,
        file_type: "text/plain".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[tokio::test]
#[ignore]
async fn test_folder_round_trip_and_not_found() {
    let repo = FolderRepository::new(pool().await);

    let created = repo.create(&folder("root", None)).await.expect("create");
    let fetched = repo.find_by_id(created.id).await.expect("find");
    assert_eq!(fetched, created);

    repo.delete(created.id).await.expect("delete");
    let err = repo.find_by_id(created.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
#[ignore]
async fn test_folder_parent_filter() {
    let repo = FolderRepository::new(pool().await);

    let a = repo.create(&folder("A", None)).await.expect("A");
    let b = repo.create(&folder("B", Some(a.id))).await.expect("B");
    let c = repo.create(&folder("C", Some(a.id))).await.expect("C");
    let d = repo.create(&folder("D", Some(b.id))).await.expect("D");

    let mut under_a: Vec<_> = repo
        .find_by_parent(Some(a.id))
        .await
        .expect("children of A")
        .into_iter()
        .map(|f| f.id)
        .collect();
    under_a.sort();
    assert_eq!(under_a, vec![b.id, c.id]);

    let under_b = repo.find_by_parent(Some(b.id)).await.expect("children of B");
    assert_eq!(under_b.len(), 1);
    assert_eq!(under_b[0].id, d.id);

    let roots = repo.find_by_parent(None).await.expect("roots");
    assert!(roots.iter().any(|f| f.id == a.id));
    assert!(roots.iter().all(|f| f.parent_id.is_none()));

    let err = repo.delete(a.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Storage);

    for id in [d.id, c.id, b.id, a.id] {
        repo.delete(id).await.expect("cleanup");
    }
}

#[tokio::test]
#[ignore]
async fn test_folder_update_and_idempotent_delete() {
    let repo = FolderRepository::new(pool().await);

    let created = repo.create(&folder("before", None)).await.expect("create");
    let mut changes = UpdateFolder::from(&created);
    changes.name = "after".to_string();
    repo.update(&changes).await.expect("update");

    let updated = repo.find_by_id(created.id).await.expect("find");
    assert_eq!(updated.name, "after");
    assert!(updated.updated_at >= created.updated_at);

    assert!(repo.delete(created.id).await.expect("first delete"));
    assert!(!repo.delete(created.id).await.expect("second delete"));

    let err = repo.update(&changes).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
#[ignore]
async fn test_file_tags_and_sorting() {
    let pool = pool().await;
    let folders = FolderRepository::new(pool.clone());
    let files = FileRepository::new(pool);

    let parent = folders.create(&folder("files", None)).await.expect("folder");

    let tagged = files
        .create(&file("c", parent.id, &["a", "b"]))
        .await
        .expect("c");
    let bare = files.create(&file("a", parent.id, &[])).await.expect("a");
    files.create(&file("b", parent.id, &[])).await.expect("b");

    assert_eq!(
        files.find_by_id(tagged.id).await.expect("find").tags,
        vec!["a", "b"]
    );
    assert!(files.find_by_id(bare.id).await.expect("find").tags.is_empty());

    let asc = files
        .find_by_folder_sorted(parent.id, &SortOption::asc(SortField::Name))
        .await
        .expect("asc");
    let names: Vec<_> = asc.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    let desc = files
        .find_by_folder_sorted(parent.id, &SortOption::desc(SortField::Name))
        .await
        .expect("desc");
    let names: Vec<_> = desc.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["c", "b", "a"]);

    assert_eq!(files.find_by_folder(parent.id).await.expect("list").len(), 3);

    for f in asc {
        files.delete(f.id).await.expect("cleanup file");
    }
    folders.delete(parent.id).await.expect("cleanup folder");
}

#[tokio::test]
#[ignore]
async fn test_file_foreign_key_and_missing_rows() {
    let pool = pool().await;
    let folders = FolderRepository::new(pool.clone());
    let files = FileRepository::new(pool);

    let parent = folders.create(&folder("fk", None)).await.expect("folder");
    folders.delete(parent.id).await.expect("delete folder");

    let err = files.create(&file("lost", parent.id, &[])).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Storage);
    assert!(err.message.contains("23503"));
    assert!(files.find_by_folder(parent.id).await.expect("list").is_empty());

    let err = files
        .update(&UpdateFile {
            id: FileId(i64::MAX),
            name: "ghost".to_string(),
            folder_id: parent.id,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    assert!(!files.delete(FileId(i64::MAX)).await.expect("delete missing"));
}
