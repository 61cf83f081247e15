//! Protocol Log
//!
//! Shared append-only activity log (`protocol.txt`), one timestamped line
//! per operation. Distinct from error diagnostics, which go through
//! `tracing`. The handle is opened in append mode per call and released
//! immediately; each append is a single buffered write of one line, so
//! concurrent invocations may interleave lines but never corrupt them.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub const PROTOCOL_FILE: &str = "protocol.txt";

/// Append one `[timestamp] message` line to `protocol.txt` in the working
/// directory. A failed append is logged and swallowed.
pub fn log_protocol(message: &str) {
    log_protocol_at(Path::new(PROTOCOL_FILE), message);
}

pub fn log_protocol_at(path: &Path, message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let line = format!("[{timestamp}] {message}\n");

    let result = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(line.as_bytes()));

    if let Err(err) = result {
        tracing::error!("failed to append to {}: {err}", path.display());
    }
}
