//! Tests for OutputWriter against the real filesystem

mod support;

use std::fs;
use std::sync::Arc;

use serde_json::json;
use sfwrap::application::services::{OutputTarget, OutputWriter};
use sfwrap::domain::ErrorCode;
use sfwrap::infrastructure::traits::RealFileSystem;
use support::ReadOnlyFileSystem;
use tempfile::TempDir;

fn writer() -> OutputWriter {
    OutputWriter::new(Arc::new(RealFileSystem))
}

#[test]
fn given_missing_parent_when_write_then_directories_created() {
    // Arrange
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out").join("nested").join("org.json");
    let document = json!({"status": 0, "result": {"username": "a@b.c"}});

    // Act
    let target = writer().write(&document, Some(&path)).unwrap();

    // Assert
    assert_eq!(target, OutputTarget::File(path.clone()));
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "{\"status\":0,\"result\":{\"username\":\"a@b.c\"}}\n");
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn given_existing_file_when_write_then_overwritten() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("org.json");
    fs::write(&path, "old content that is much longer than the new one\n\n").unwrap();

    writer().write(&json!({"a": 1}), Some(&path)).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n");
}

#[test]
fn given_pretty_input_when_write_then_single_line_with_original_key_order() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("org.json");
    let document: serde_json::Value =
        serde_json::from_str("{\n  \"zeta\": 1,\n  \"alpha\": [\n    true\n  ]\n}").unwrap();

    writer().write(&document, Some(&path)).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"zeta\":1,\"alpha\":[true]}\n");
}

#[test]
fn given_unwritable_destination_when_write_then_output_write_failed() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("org.json");
    let writer = OutputWriter::new(Arc::new(ReadOnlyFileSystem));

    let err = writer.write(&json!({}), Some(&path)).unwrap_err();

    assert_eq!(err.code(), ErrorCode::OutputWriteFailed);
    assert!(err.to_string().contains("org.json"));
    assert!(!path.exists());
}
