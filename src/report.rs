//! Report Serialization
//!
//! Serializes a finished report to pretty-printed JSON (2-space indent,
//! overwrite) and stamps reports with ISO-8601 timestamps. Reports are
//! write-once: created, persisted, and discarded, never re-read.

use chrono::Utc;
use serde::Serialize;
use std::path::Path;

/// ISO-8601 timestamp for report headers.
pub fn report_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Write `value` as pretty JSON to `path`, overwriting any previous report.
///
/// Returns `false` on serialization or write failure; the cause goes to the
/// error log, never to the caller.
pub fn save_results<T: Serialize>(value: &T, path: &Path) -> bool {
    let json = match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!("failed to serialize report for {}: {err}", path.display());
            return false;
        }
    };

    match std::fs::write(path, json) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("failed to write {}: {err}", path.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_save_results_pretty_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        assert!(save_results(&json!({"task": "demo", "count": 2}), &path));
        let contents = fs::read_to_string(&path).unwrap();
        // 2-space indent
        assert!(contents.contains("\n  \"task\""));

        assert!(save_results(&json!({"task": "demo2"}), &path));
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("demo2"));
        assert!(!contents.contains("count"));
    }

    #[test]
    fn test_save_results_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("results.json");
        assert!(!save_results(&json!({}), &path));
    }

    #[test]
    fn test_report_timestamp_is_iso8601() {
        let ts = report_timestamp();
        assert_eq!(&ts[4..5], "-");
        assert!(ts.contains('T'));
    }
}
