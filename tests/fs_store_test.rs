use blogstore::model::Post;
use blogstore::store::fs::JsonFileStore;
use blogstore::store::PostStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("storage.json"));
    (dir, store)
}

fn post(id: u64, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: "Body".to_string(),
        author: Some("Ada".to_string()),
        date: Some("2024-06-01".to_string()),
    }
}

#[test]
fn test_missing_file_loads_empty() {
    let (_dir, store) = setup();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load_roundtrip() {
    let (_dir, store) = setup();
    let posts = vec![post(1, "First"), post(2, "Second")];

    store.save(&posts).unwrap();
    assert_eq!(store.load().unwrap(), posts);
}

#[test]
fn test_persisted_save_of_load_is_idempotent() {
    let (_dir, store) = setup();
    let posts = vec![post(1, "First")];
    store.save(&posts).unwrap();

    let loaded = store.load().unwrap();
    store.save(&loaded).unwrap();

    assert_eq!(store.load().unwrap(), posts);
}

#[test]
fn test_malformed_file_loads_empty() {
    let (dir, store) = setup();
    fs::write(dir.path().join("storage.json"), "{not json at all").unwrap();

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_non_array_json_loads_empty() {
    let (dir, store) = setup();
    fs::write(dir.path().join("storage.json"), r#"{"id": 1}"#).unwrap();

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_file_is_pretty_printed_json_array() {
    let (dir, store) = setup();
    store.save(&[post(1, "First")]).unwrap();

    let on_disk = fs::read_to_string(dir.path().join("storage.json")).unwrap();
    assert!(on_disk.starts_with('['));
    assert!(on_disk.contains('\n'), "expected pretty-printed output");
    assert!(on_disk.contains(r#""title": "First""#));
}

#[test]
fn test_non_ascii_preserved_literally() {
    let (dir, store) = setup();
    store.save(&[post(1, "Grüße aus Köln")]).unwrap();

    let on_disk = fs::read_to_string(dir.path().join("storage.json")).unwrap();
    assert!(on_disk.contains("Grüße aus Köln"));
    assert!(!on_disk.contains("\\u"));
}

#[test]
fn test_minimal_posts_serialize_as_two_field_objects() {
    let (dir, store) = setup();
    let minimal = Post {
        id: 1,
        title: "Plain".to_string(),
        content: "Body".to_string(),
        author: None,
        date: None,
    };
    store.save(&[minimal]).unwrap();

    let on_disk = fs::read_to_string(dir.path().join("storage.json")).unwrap();
    assert!(!on_disk.contains("author"));
    assert!(!on_disk.contains("date"));
}

#[test]
fn test_atomic_write_leaves_no_tmp_artifacts() {
    let (dir, store) = setup();
    store.save(&[post(1, "First")]).unwrap();
    store.save(&[post(1, "First"), post(2, "Second")]).unwrap();

    let entries = fs::read_dir(dir.path()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_save_creates_missing_parent_dir() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("storage.json"));

    store.save(&[post(1, "First")]).unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn test_save_overwrites_prior_state_in_full() {
    let (_dir, store) = setup();
    store.save(&[post(1, "First"), post(2, "Second")]).unwrap();
    store.save(&[post(2, "Second")]).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 2);
}
