use linkboard_core::db::open_db_in_memory;
use linkboard_core::repo::bookmark_repo::BOOKMARKS_KEY;
use linkboard_core::{
    Bookmark, BookmarkDraft, BookmarkService, MemoryBookmarkRepository, ServiceError,
    SqliteBookmarkRepository,
};

#[test]
fn add_inserts_at_front_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookmarkRepository::try_new(&conn).unwrap();
    let mut service = BookmarkService::new(repo).unwrap();
    let initial_len = service.len();

    let id = service
        .add_bookmark("GitHub", "https://github.com", None)
        .unwrap();

    assert_eq!(service.len(), initial_len + 1);
    assert_eq!(service.bookmarks()[0].id, id);
    assert_eq!(service.bookmarks()[0].title, "GitHub");

    // A second service over the same connection sees the persisted store.
    let repo = SqliteBookmarkRepository::try_new(&conn).unwrap();
    let reloaded = BookmarkService::new(repo).unwrap();
    assert_eq!(reloaded.len(), initial_len + 1);
    assert_eq!(reloaded.bookmarks()[0].id, id);
}

#[test]
fn add_rejects_blank_fields_with_no_state_change() {
    let mut service = BookmarkService::new(MemoryBookmarkRepository::new()).unwrap();

    let err = service.add_bookmark("   ", "https://a.com", None).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = service.add_bookmark("A", "", None).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    assert!(service.is_empty());
}

#[test]
fn delete_removes_exactly_one_and_is_idempotent() {
    // Fixed ids: creation-timestamp ids can collide within a millisecond.
    let repo = MemoryBookmarkRepository::with_bookmarks(vec![
        Bookmark::with_id(1, "A", "https://a.com"),
        Bookmark::with_id(2, "B", "https://b.com"),
    ]);
    let mut service = BookmarkService::new(repo).unwrap();

    assert!(service.delete_bookmark(1).unwrap());
    assert_eq!(service.len(), 1);
    assert_eq!(service.bookmarks()[0].id, 2);

    // Repeating the same deletion is a no-op.
    assert!(!service.delete_bookmark(1).unwrap());
    assert_eq!(service.len(), 1);
}

#[test]
fn visible_is_exactly_the_matching_subset() {
    let mut service = BookmarkService::new(MemoryBookmarkRepository::new()).unwrap();
    service.add_bookmark("GitHub", "https://github.com", None).unwrap();

    service.set_query("git");
    let visible = service.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "GitHub");

    service.set_query("xyz");
    assert!(service.visible().is_empty());

    service.set_query("");
    assert_eq!(service.visible().len(), service.len());
}

#[test]
fn deleted_record_leaves_the_visible_set() {
    let mut service = BookmarkService::new(MemoryBookmarkRepository::new()).unwrap();
    let id = service.add_bookmark("GitHub", "https://github.com", None).unwrap();
    service.set_query("git");
    assert_eq!(service.visible().len(), 1);

    service.delete_bookmark(id).unwrap();
    assert!(service.visible().is_empty());
}

#[test]
fn fresh_db_loads_the_builtin_default_set() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookmarkRepository::try_new(&conn).unwrap();
    let service = BookmarkService::new(repo).unwrap();

    let titles: Vec<_> = service.bookmarks().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Tailwind CSS", "Google Fonts", "MDN Web Docs"]);
}

#[test]
fn malformed_persisted_state_falls_back_to_defaults() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2);",
        rusqlite::params![BOOKMARKS_KEY, "{not valid json"],
    )
    .unwrap();

    let repo = SqliteBookmarkRepository::try_new(&conn).unwrap();
    let service = BookmarkService::new(repo).unwrap();
    assert_eq!(service.len(), 3);
    assert_eq!(service.bookmarks()[0].title, "Tailwind CSS");
}

#[test]
fn import_batch_appends_with_fresh_ids() {
    let mut service = BookmarkService::new(MemoryBookmarkRepository::new()).unwrap();
    service.add_bookmark("Existing", "https://existing.com", None).unwrap();

    let drafts = vec![
        BookmarkDraft::new("A", "https://a.com"),
        BookmarkDraft::new("B", "https://b.com"),
    ];
    let merged = service.import_batch(drafts).unwrap();

    assert_eq!(merged, 2);
    assert_eq!(service.len(), 3);
    assert_eq!(service.bookmarks()[1].title, "A");
    assert_eq!(service.bookmarks()[2].title, "B");
    // Batch ids come from one base instant plus the candidate index.
    assert_eq!(
        service.bookmarks()[2].id,
        service.bookmarks()[1].id + 1
    );
}

#[test]
fn category_counts_groups_only_categorized_records() {
    let mut service = BookmarkService::new(MemoryBookmarkRepository::new()).unwrap();
    service.add_bookmark("A", "https://a.com", Some("dev")).unwrap();
    service.add_bookmark("B", "https://b.com", Some("dev")).unwrap();
    service.add_bookmark("C", "https://c.com", Some("news")).unwrap();
    service.add_bookmark("D", "https://d.com", None).unwrap();

    let counts = service.category_counts();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["dev"], 2);
    assert_eq!(counts["news"], 1);
}
