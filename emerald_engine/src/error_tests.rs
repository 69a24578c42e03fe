//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Display context creation failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("Display context creation failed"));
}

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig("camera.near must be > 0".to_string());
    let display = format!("{}", err);
    assert_eq!(display, "Invalid configuration: camera.near must be > 0");
}

#[test]
fn test_io_display() {
    let err = Error::Io("file not found".to_string());
    assert_eq!(format!("{}", err), "I/O error: file not found");
}

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("swap failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("swap failed"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::Io("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug = format!("{:?}", Error::InvalidConfig("bad".to_string()));
    assert!(debug.contains("InvalidConfig"));

    let debug = format!("{:?}", Error::BackendError("bad".to_string()));
    assert!(debug.contains("BackendError"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::InitializationFailed("init".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

#[test]
fn test_from_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.ron");
    let err: Error = io.into();
    match err {
        Error::Io(msg) => assert!(msg.contains("missing.ron")),
        other => panic!("expected Io, got {:?}", other),
    }
}

// ============================================================================
// ERROR PROPAGATION TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::BackendError("present".to_string()))
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    assert!(outer().is_err());
}
