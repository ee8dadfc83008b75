/*!
 * Tests for the error types
 */

use std::io;
use subfix::errors::{AppError, FixError, FormatError, TimeCodeError};

/// Test that error messages carry their details
#[test]
fn test_display_shouldIncludeDetails() {
    assert_eq!(FixError::UnknownRule("foo".to_string()).to_string(), "Unknown fix rule: foo");
    assert_eq!(
        FormatError::Parse { line: 7, message: "bad".to_string() }.to_string(),
        "Parse error at line 7: bad"
    );
    assert_eq!(FixError::ParagraphOutOfRange(3).to_string(), "Paragraph index out of range: 3");
}

/// Test that lower level errors convert into AppError
#[test]
fn test_from_shouldWrapLowerLevelErrors() {
    let error: AppError = FormatError::from(TimeCodeError::FieldCount("1:2".to_string())).into();
    assert!(matches!(error, AppError::Format(FormatError::TimeCode(_))));

    let error: AppError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(error, AppError::File(ref message) if message == "gone"));

    let error: AppError = anyhow::anyhow!("boom").into();
    assert_eq!(error.to_string(), "Unknown error: boom");
}

/// Test that library errors work with anyhow context
#[test]
fn test_anyhow_context_shouldKeepSource() {
    use anyhow::Context;

    let result: Result<(), FixError> = Err(FixError::InvalidSelection("line 4".to_string()));
    let error = result.context("Selecting fix").unwrap_err();
    assert_eq!(format!("{:#}", error), "Selecting fix: Invalid fix selection: line 4");
}
