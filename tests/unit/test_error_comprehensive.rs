use insta::assert_json_snapshot;
use std::error::Error;
use strmod::cli::output::TransformReport;
use strmod::core::error::{AppError, ValidationError};
use strmod::core::transform::TransformResult;
use strmod::core::types::{ErrorCategory, Field};

#[test]
fn test_error_creation_all_categories() {
    let categories = vec![
        (ErrorCategory::ConfigError, "CONFIG_ERROR"),
        (ErrorCategory::IoError, "IO_ERROR"),
        (ErrorCategory::ClipboardError, "CLIPBOARD_ERROR"),
    ];

    for (category, code) in categories {
        let error = AppError::new(category, "test message");
        assert_eq!(error.category, category);
        assert_eq!(error.code, code);
        assert_eq!(error.message, "test message");
        assert!(error.source.is_none());
    }
}

#[test]
fn test_error_display() {
    let error = AppError::new(ErrorCategory::ConfigError, "invalid level");
    assert_eq!(
        error.to_string(),
        "[CONFIG_ERROR] ConfigError: invalid level"
    );
}

#[test]
fn test_error_with_source_display() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = AppError::with_source(ErrorCategory::IoError, "read failed", Box::new(io));

    assert!(error.source.is_some());
    assert!(error.to_string().contains("Caused by: missing"));
}

#[test]
fn test_reason_carries_underlying_cause() {
    let cause = std::io::Error::other("X11 server connection timed out");
    let error = AppError::with_source(
        ErrorCategory::ClipboardError,
        "Clipboard unavailable",
        Box::new(cause),
    );
    assert_eq!(
        error.reason(),
        "Clipboard unavailable: X11 server connection timed out"
    );
}

#[test]
fn test_validation_error_is_std_error() {
    let error = ValidationError::MissingSource;
    let dyn_error: &dyn Error = &error;
    assert_eq!(dyn_error.to_string(), "Please enter a value");
    assert!(dyn_error.source().is_none());
}

#[test]
fn test_validation_error_flag_hints() {
    assert_eq!(ValidationError::MissingSource.flag_hint(), "TEXT");
    assert_eq!(
        ValidationError::NoModifications.flag_hint(),
        "--find, --replace, --convert-slashes, --cut, --trim"
    );
}

#[test]
fn test_field_display_matches_serialized_name() {
    for field in [
        Field::Source,
        Field::Find,
        Field::Replace,
        Field::CutEnabled,
        Field::CutMarker,
        Field::ConvertSlashes,
        Field::TrimLines,
    ] {
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, format!("\"{}\"", field));
    }
}

#[test]
fn test_invalid_report_serialization() {
    let result: TransformResult = Err(ValidationError::UnpairedReplacement);
    assert_json_snapshot!(TransformReport::from(&result), @r###"
    {
      "status": "invalid",
      "message": "Both find and replace values are required for replacement",
      "fields": [
        "find",
        "replace"
      ]
    }
    "###);
}
