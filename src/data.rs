//! Dataset Loading
//!
//! Reads `plants.json` — either a bare record array or a `{"data": [...]}`
//! envelope — into typed records. Records are loaded fresh on every routine
//! invocation; there is no caching across calls.
//!
//! Load failures never reach the caller as errors: they are reported through
//! the error log and surface as an empty record list.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::record::PlantRecord;

/// Load plant records from `path`.
///
/// If `path` does not exist but the same path exists one directory up, that
/// file is loaded instead (the tool is often invoked from a subdirectory of
/// the dataset checkout).
pub fn load_plants(path: &Path) -> Vec<PlantRecord> {
    let resolved = match resolve_dataset_path(path) {
        Some(p) => p,
        None => {
            tracing::error!("dataset not found: {}", path.display());
            return Vec::new();
        }
    };

    match read_records(&resolved) {
        Ok(records) => records,
        Err(err) => {
            tracing::error!("failed to load {}: {err:#}", resolved.display());
            Vec::new()
        }
    }
}

fn resolve_dataset_path(path: &Path) -> Option<PathBuf> {
    if path.exists() {
        return Some(path.to_path_buf());
    }
    let parent_file = Path::new("..").join(path);
    parent_file.exists().then_some(parent_file)
}

fn read_records(path: &Path) -> Result<Vec<PlantRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;

    let decoded: Value =
        serde_json::from_str(&contents).with_context(|| "Failed to parse dataset JSON")?;

    // Either a bare array of records or an envelope with a `data` key
    let records = match decoded {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(records).with_context(|| "Dataset is not an array of plant records")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_bare_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plants.json");
        fs::write(&path, r#"[{"name": "Ricinus communis"}]"#).unwrap();

        let plants = load_plants(&path);
        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].name.as_deref(), Some("Ricinus communis"));
    }

    #[test]
    fn test_load_data_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plants.json");
        fs::write(
            &path,
            r#"{"data": [{"name": "Nerium oleander"}, {"name": "Aloe vera"}]}"#,
        )
        .unwrap();

        let plants = load_plants(&path);
        assert_eq!(plants.len(), 2);
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let plants = load_plants(Path::new("no_such_dataset_anywhere.json"));
        assert!(plants.is_empty());
    }

    #[test]
    fn test_malformed_json_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plants.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load_plants(&path).is_empty());
    }

    #[test]
    fn test_wrong_shape_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plants.json");
        fs::write(&path, r#"{"records": []}"#).unwrap();

        assert!(load_plants(&path).is_empty());
    }
}
