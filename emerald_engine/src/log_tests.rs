//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "emerald::Test".to_string(),
        message: "frame message".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_ron_names() {
    let parsed: LogSeverity = ron::from_str("Warn").unwrap();
    assert_eq!(parsed, LogSeverity::Warn);
    assert_eq!(ron::to_string(&LogSeverity::Debug).unwrap(), "Debug");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_without_location() {
    let e = entry(LogSeverity::Info, None, None);
    assert_eq!(e.severity, LogSeverity::Info);
    assert_eq!(e.source, "emerald::Test");
    assert!(e.file.is_none());
    assert!(e.line.is_none());
}

#[test]
fn test_log_entry_clone_keeps_location() {
    let e1 = entry(LogSeverity::Error, Some("culler.rs"), Some(42));
    let e2 = e1.clone();
    assert_eq!(e2.file, Some("culler.rs"));
    assert_eq!(e2.line, Some(42));
    assert_eq!(e1.message, e2.message);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
    ] {
        logger.log(&entry(severity, None, None));
    }
}

#[test]
fn test_default_logger_error_with_location() {
    let logger = DefaultLogger;
    logger.log(&entry(LogSeverity::Error, Some("orchestrator.rs"), Some(7)));
}

#[test]
fn test_default_logger_format() {
    let plain = DefaultLogger::format(&entry(LogSeverity::Info, None, None));
    assert!(plain.contains("frame message"));
    assert!(!plain.contains("orchestrator.rs"));

    let detailed = DefaultLogger::format(&entry(LogSeverity::Error, Some("orchestrator.rs"), Some(7)));
    assert!(detailed.ends_with("(orchestrator.rs:7)"));
}
