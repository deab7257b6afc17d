use portfolio_core::model::blog::BlogPostPatch;
use portfolio_core::model::project::ProjectPatch;
use portfolio_core::{
    BlogPost, Project, Record, RecordStore, RecordValidationError, SimulatedFetch, StoreError,
};

fn project(id: &str, slug: &str) -> Project {
    Project::with_id(id, format!("Project {id}"), slug, "2025-01-01")
}

fn store_with(projects: Vec<Project>) -> RecordStore<Project> {
    RecordStore::from_records(projects, SimulatedFetch::immediate()).unwrap()
}

#[test]
fn add_then_get_returns_equal_record() {
    let mut store = store_with(vec![project("a", "alpha")]);
    let added = project("b", "beta");

    store.add(added.clone()).unwrap();

    assert_eq!(store.get_by_id("b"), Some(&added));
    assert_eq!(store.get_by_slug("beta"), Some(&added));
    assert_eq!(store.total_count(), 2);
    assert!(store.error().is_none());
}

#[test]
fn new_records_get_generated_ids() {
    let first = Project::new("First", "first", "2025-01-01");
    let second = Project::new("Second", "second", "2025-01-01");
    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);

    let mut store = store_with(Vec::new());
    store.add(first.clone()).unwrap();
    assert_eq!(store.get_by_id(&first.id), Some(&first));
}

#[test]
fn add_with_existing_id_leaves_store_unchanged() {
    let mut store = store_with(vec![project("a", "alpha")]);
    let before = store.list().to_vec();

    let err = store.add(project("a", "other-slug")).unwrap_err();

    assert_eq!(err, StoreError::DuplicateId("a".to_string()));
    assert_eq!(store.error(), Some(&err));
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn add_with_existing_slug_is_rejected() {
    let mut store = store_with(vec![project("a", "alpha")]);

    let err = store.add(project("b", "alpha")).unwrap_err();

    assert_eq!(err, StoreError::DuplicateSlug("alpha".to_string()));
    assert_eq!(store.total_count(), 1);
}

#[test]
fn add_with_blank_title_is_a_validation_error() {
    let mut store = store_with(Vec::new());
    let mut blank = project("a", "alpha");
    blank.title = "   ".to_string();

    let err = store.add(blank).unwrap_err();

    assert_eq!(
        err,
        StoreError::Validation(RecordValidationError::BlankName { field: "title" })
    );
    assert_eq!(store.total_count(), 0);
}

#[test]
fn successful_write_clears_recorded_error() {
    let mut store = store_with(vec![project("a", "alpha")]);
    store.add(project("a", "alpha")).unwrap_err();
    assert!(store.error().is_some());

    store.add(project("b", "beta")).unwrap();

    assert!(store.error().is_none());
}

#[test]
fn clear_error_resets_error_field() {
    let mut store = store_with(Vec::new());
    store.remove("missing").unwrap_err();
    assert!(store.error().is_some());

    store.clear_error();

    assert!(store.error().is_none());
}

#[test]
fn update_on_absent_id_sets_not_found() {
    let mut store = store_with(vec![project("a", "alpha")]);
    let before = store.list().to_vec();

    let patch = ProjectPatch {
        title: Some("Renamed".to_string()),
        ..ProjectPatch::default()
    };
    let err = store.update("missing", patch).unwrap_err();

    assert_eq!(err, StoreError::NotFound("missing".to_string()));
    assert_eq!(store.error(), Some(&err));
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn update_merges_fields_and_keeps_id() {
    let mut store = store_with(vec![project("a", "alpha")]);

    let patch = ProjectPatch {
        title: Some("Renamed".to_string()),
        end_date: Some(Some("2025-06-01".to_string())),
        tags: Some(vec!["rust".to_string()]),
        ..ProjectPatch::default()
    };
    let updated = store.update("a", patch).unwrap().clone();

    assert_eq!(updated.id, "a");
    assert_eq!(updated.slug, "alpha");
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.end_date.as_deref(), Some("2025-06-01"));
    assert_eq!(updated.tags, vec!["rust".to_string()]);
    assert_eq!(store.get_by_id("a"), Some(&updated));
}

#[test]
fn update_that_blanks_title_is_rejected() {
    let mut store = store_with(vec![project("a", "alpha")]);

    let patch = ProjectPatch {
        title: Some(String::new()),
        ..ProjectPatch::default()
    };
    let err = store.update("a", patch).unwrap_err();

    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.get_by_id("a").unwrap().title, "Project a");
}

#[test]
fn remove_then_get_returns_none() {
    let mut store = store_with(vec![project("a", "alpha"), project("b", "beta")]);

    let removed = store.remove("a").unwrap();

    assert_eq!(removed.id, "a");
    assert_eq!(store.get_by_id("a"), None);
    assert_eq!(store.total_count(), 1);
}

#[test]
fn remove_absent_id_sets_not_found() {
    let mut store = store_with(vec![project("a", "alpha")]);

    let err = store.remove("zzz").unwrap_err();

    assert_eq!(err, StoreError::NotFound("zzz".to_string()));
    assert_eq!(store.total_count(), 1);
}

#[test]
fn blog_store_shares_the_same_contract() {
    let mut store: RecordStore<BlogPost> =
        RecordStore::from_records(Vec::new(), SimulatedFetch::immediate()).unwrap();
    let post = BlogPost::with_id("p1", "Hello", "hello", "2025-10-15");
    assert_eq!(BlogPost::KIND, "blog_post");

    store.add(post).unwrap();
    let patch = BlogPostPatch {
        excerpt: Some("Short".to_string()),
        ..BlogPostPatch::default()
    };
    let updated = store.update("p1", patch).unwrap();

    assert_eq!(updated.excerpt, "Short");
    assert_eq!(store.get_by_slug("hello").map(|post| post.id.as_str()), Some("p1"));
}
