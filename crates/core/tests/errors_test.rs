use std::error::Error;

use fieldbook_core::errors::{FieldbookError, FieldbookResult};

#[test]
fn test_fieldbook_error_display() {
    let not_found = FieldbookError::NotFound("field 42 not found".to_string());
    let validation = FieldbookError::Validation("field name must not be empty".to_string());
    let unexpected = FieldbookError::UnexpectedShape("field types: expected a sequence".to_string());
    let transport = FieldbookError::Transport(eyre::eyre!("connection refused"));
    let internal = FieldbookError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: field 42 not found"
    );
    assert_eq!(
        validation.to_string(),
        "Validation error: field name must not be empty"
    );
    assert_eq!(
        unexpected.to_string(),
        "Unrecognized response shape: field types: expected a sequence"
    );
    assert!(transport.to_string().contains("Transport error:"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let fieldbook_error = FieldbookError::Internal(Box::new(io_error));

    assert!(fieldbook_error.source().is_some());
}

#[test]
fn test_fieldbook_result() {
    let result: FieldbookResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: FieldbookResult<i32> = Err(FieldbookError::NotFound("not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_trait_implementation() {
    let report = eyre::eyre!("socket closed early");
    let fieldbook_error: FieldbookError = report.into();

    assert!(matches!(fieldbook_error, FieldbookError::Transport(_)));
    assert!(fieldbook_error.to_string().contains("socket closed early"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let fieldbook_error = FieldbookError::Internal(boxed_error);

    assert!(fieldbook_error.to_string().contains("IO error"));
}
