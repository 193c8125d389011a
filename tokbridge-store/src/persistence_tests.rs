//! Persistence round-trip and edge case tests.

use std::path::PathBuf;
use tempfile::TempDir;

use crate::persistence::{ensure_dir, load_json, save_json};
use crate::settings::{DEFAULT_TOKEN_DURATION_SECS, Settings, TokBoxSettings};

// ============================================================================
// JSON Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested_path = temp_dir.path().join("a").join("b").join("settings.json");

    let data = serde_json::json!({"key": "value"});

    save_json(&nested_path, &data).await.unwrap();
    assert!(nested_path.exists());
}

#[tokio::test]
async fn test_load_nonexistent_file() {
    let file_path = PathBuf::from("/nonexistent/path/settings.json");

    let result: Result<Settings, _> = load_json(&file_path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_ensure_dir_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let dir_path = temp_dir.path().join("config");

    ensure_dir(&dir_path).await.unwrap();
    ensure_dir(&dir_path).await.unwrap();

    assert!(dir_path.is_dir());
}

#[tokio::test]
async fn test_atomic_write_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("settings.json");

    save_json(&file_path, &Settings::default()).await.unwrap();

    assert!(!file_path.with_extension("json.tmp").exists());
    assert!(file_path.exists());
}

// ============================================================================
// Settings Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_settings_full_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("settings.json");

    let settings = Settings {
        fake_tokbox: true,
        fake_tokbox_url: Some("http://localhost:5000/fake".to_string()),
        tokbox: Some(TokBoxSettings {
            server_ip: "10.0.0.1".to_string(),
            api_key: "44669102".to_string(),
            api_secret: None,
            token_duration: 600,
        }),
    };

    save_json(&file_path, &settings).await.unwrap();
    let loaded: Settings = load_json(&file_path).await.unwrap();

    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn test_secret_is_not_written_when_absent() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("settings.json");

    let settings = Settings {
        tokbox: Some(TokBoxSettings {
            server_ip: "10.0.0.1".to_string(),
            api_key: "k".to_string(),
            api_secret: None,
            token_duration: 600,
        }),
        ..Default::default()
    };

    save_json(&file_path, &settings).await.unwrap();
    let raw = tokio::fs::read_to_string(&file_path).await.unwrap();

    assert!(!raw.contains("api_secret"));
}

// ============================================================================
// Backward Compatibility Tests
// ============================================================================

#[tokio::test]
async fn test_load_minimal_json_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("minimal.json");

    tokio::fs::write(&file_path, "{}").await.unwrap();

    let loaded: Settings = load_json(&file_path).await.unwrap();
    assert_eq!(loaded, Settings::default());
}

#[tokio::test]
async fn test_load_json_with_unknown_fields() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("extra_fields.json");

    let json = r#"{
        "fake_tokbox_url": "http://localhost:5000/",
        "callUrl": "http://localhost:5000/calls",
        "nested_unknown": {"key": "value"},
        "tokbox": {"server_ip": "1.2.3.4", "api_key": "k", "legacy": 1}
    }"#;
    tokio::fs::write(&file_path, json).await.unwrap();

    let loaded: Settings = load_json(&file_path).await.unwrap();
    let tokbox = loaded.tokbox.unwrap();
    assert_eq!(tokbox.token_duration, DEFAULT_TOKEN_DURATION_SECS);
    assert_eq!(loaded.fake_tokbox_url.as_deref(), Some("http://localhost:5000/"));
}
