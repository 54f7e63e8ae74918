//! Unit tests for key-value persistence

use super::*;
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod cache_tests {
    use super::*;

    #[test]
    fn test_try_read_to_string_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_file.txt");
        fs::write(&file_path, "Hello, World!").unwrap();

        assert_eq!(
            try_read_to_string(&file_path).as_deref(),
            Some("Hello, World!")
        );
    }

    #[test]
    fn test_try_read_to_string_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nonexistent.txt");

        assert!(try_read_to_string(&file_path).is_none());
    }

    #[test]
    fn test_write_string_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("deeper").join("file.json");

        write_string(&file_path, "[]").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[]");
    }

    #[test]
    fn test_write_string_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("file.json");

        write_string(&file_path, "first, and longer").unwrap();
        write_string(&file_path, "second").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "second");
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        assert!(store.get("league_history").is_none());
        store.set("league_history", r#"[{"id":1}]"#).unwrap();
        assert_eq!(
            store.get("league_history").as_deref(),
            Some(r#"[{"id":1}]"#)
        );
        assert!(store.path_for("league_history").ends_with("league_history.json"));

        store.remove("league_history").unwrap();
        assert!(store.get("league_history").is_none());
    }

    #[test]
    fn test_file_store_remove_missing_key_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        assert!(store.remove("never_written").is_ok());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert!(store.get("k").is_none());
        assert!(store.remove("k").is_ok());
    }

    #[test]
    fn test_data_dir_defaults_under_fpl_league() {
        if std::env::var_os(DATA_DIR_ENV_VAR).is_none() {
            assert!(data_dir().ends_with("fpl-league"));
        }
    }
}
