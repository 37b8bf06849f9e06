//! On-disk key-value store behaviour.

use advanced_counter::persistence::load_initial_count;
use advanced_counter::storage::{FileStore, KeyValueStore, StorageError};
use std::fs;
use tempfile::TempDir;

const KEY: &str = "advanced-counter-value";

#[test]
fn missing_file_is_an_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().join("storage.json"));
    assert_eq!(store.get(KEY).unwrap(), None);
    assert_eq!(load_initial_count(&store, KEY), 0);
}

#[test]
fn value_survives_a_new_instance() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");

    FileStore::new(&path).set(KEY, "42").unwrap();

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get(KEY).unwrap().as_deref(), Some("42"));
    assert_eq!(load_initial_count(&reopened, KEY), 42);
}

#[test]
fn set_creates_missing_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("storage.json");
    let store = FileStore::new(&path);

    store.set(KEY, "1").unwrap();
    assert!(path.exists());
}

#[test]
fn set_preserves_other_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    fs::write(&path, r#"{"theme": "dark", "advanced-counter-value": "3"}"#).unwrap();

    let store = FileStore::new(&path);
    store.set(KEY, "4").unwrap();

    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("4"));
}

#[test]
fn stored_document_is_a_json_object_of_strings() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    FileStore::new(&path).set(KEY, "-7").unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[KEY], serde_json::Value::String("-7".to_string()));
}

#[test]
fn corrupt_file_reports_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    fs::write(&path, "not json at all").unwrap();

    let store = FileStore::new(&path);
    assert!(matches!(store.get(KEY), Err(StorageError::Parse { .. })));
    // The persistence layer normalizes this to the default count.
    assert_eq!(load_initial_count(&store, KEY), 0);
}

#[test]
fn non_numeric_stored_value_loads_as_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    fs::write(&path, r#"{"advanced-counter-value": "NaN"}"#).unwrap();

    assert_eq!(load_initial_count(&FileStore::new(&path), KEY), 0);
}

#[test]
fn no_temp_or_stray_files_after_write() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    FileStore::new(&path).set(KEY, "1").unwrap();

    let mut names: Vec<String> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["storage.json", "storage.json.lock"]);
}
