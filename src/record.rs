//! Plant Record Schema and Normalization
//!
//! The upstream dataset encodes several fields in more than one shape:
//! severity as a `{label, level}` object or a bare scalar, animals as plain
//! strings or single-key objects, symptoms as plain strings or `{name}`
//! objects. Everything is decoded ONCE into this typed schema; the query
//! routines only ever see the normalized accessors and never re-probe JSON
//! shapes.

use serde::Deserialize;
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::BTreeMap;

use crate::utils::text::contains_ci;

/// One plant's toxicity entry as decoded from `plants.json`.
///
/// No field is guaranteed present; records are immutable after load.
#[derive(Debug, Clone, Deserialize)]
pub struct PlantRecord {
    /// Scientific name (Latin binomial)
    #[serde(default)]
    pub name: Option<String>,

    /// Common-name entries, plain strings or `{"name": ...}` objects
    #[serde(default)]
    pub common: Vec<CommonName>,

    /// Taxonomic family
    #[serde(default)]
    pub family: Option<String>,

    /// Danger rating, detail object or bare scalar
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Affected animal species
    #[serde(default)]
    pub animals: Vec<AnimalEntry>,

    /// Poisoning symptoms
    #[serde(default)]
    pub symptoms: Vec<SymptomEntry>,
}

/// A common-name entry: `"Castor Bean"` or `{"name": "Castor Bean"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CommonName {
    Plain(String),
    Named {
        #[serde(default)]
        name: String,
    },
    Other(Value),
}

impl CommonName {
    pub fn name(&self) -> String {
        match self {
            CommonName::Plain(s) => s.clone(),
            CommonName::Named { name } => name.clone(),
            CommonName::Other(v) => scalar_to_string(v),
        }
    }
}

/// Severity field: a detail object (`label` plus optional numeric `level`
/// rank and legacy fallback keys) or a bare scalar.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Severity {
    Detail(SeverityDetail),
    Scalar(Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeverityDetail {
    #[serde(default)]
    pub label: Option<String>,
    /// Legacy key carried by some exports
    #[serde(default)]
    pub name: Option<String>,
    /// Numeric danger rank parallel to the label
    #[serde(default)]
    pub level: Option<i64>,
    /// Legacy key carried by some exports
    #[serde(default)]
    pub severity: Option<Value>,
}

impl Severity {
    /// Human-readable danger label.
    ///
    /// Detail objects prefer `label`, then the first of `name`, `level`,
    /// `severity` present, stringified. Scalars are stringified when truthy.
    /// Everything else is "Unknown".
    pub fn label(&self) -> String {
        match self {
            Severity::Detail(d) => {
                if let Some(label) = d.label.as_deref().filter(|s| !s.is_empty()) {
                    return label.to_string();
                }
                if let Some(name) = d.name.as_deref() {
                    return name.to_string();
                }
                if let Some(level) = d.level {
                    return level.to_string();
                }
                if let Some(severity) = &d.severity {
                    return scalar_to_string(severity);
                }
                "Unknown".to_string()
            }
            Severity::Scalar(v) if is_truthy(v) => scalar_to_string(v),
            Severity::Scalar(_) => "Unknown".to_string(),
        }
    }

    /// Numeric danger rank. Scalar severities carry no rank and count as 2.
    pub fn level(&self) -> i64 {
        match self {
            Severity::Detail(d) => d.level.unwrap_or(0),
            Severity::Scalar(_) => 2,
        }
    }
}

/// An affected-animal entry: `"cats"` or a single-key object whose sole
/// value is the species name (e.g. `{"species": "cats"}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnimalEntry {
    Plain(String),
    // BTreeMap keeps "first key" deterministic for multi-key objects
    Keyed(BTreeMap<String, Value>),
    Other(Value),
}

impl AnimalEntry {
    pub fn name(&self) -> String {
        match self {
            AnimalEntry::Plain(s) => s.clone(),
            AnimalEntry::Keyed(map) => {
                map.values().next().map(scalar_to_string).unwrap_or_default()
            }
            AnimalEntry::Other(v) => scalar_to_string(v),
        }
    }
}

/// A symptom entry: `"Vomiting"` or `{"name": "Vomiting"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SymptomEntry {
    Plain(String),
    Named {
        #[serde(default)]
        name: String,
    },
    Other(Value),
}

impl SymptomEntry {
    pub fn name(&self) -> String {
        match self {
            SymptomEntry::Plain(s) => s.clone(),
            SymptomEntry::Named { name } => name.clone(),
            SymptomEntry::Other(v) => scalar_to_string(v),
        }
    }
}

impl PlantRecord {
    /// Normalized severity label; "Unknown" when the field is absent.
    pub fn severity_label(&self) -> String {
        self.severity
            .as_ref()
            .map(Severity::label)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Numeric danger rank; 0 when the field is absent.
    pub fn severity_level(&self) -> i64 {
        self.severity.as_ref().map_or(0, Severity::level)
    }

    /// Normalized affected-animal names, in dataset order.
    pub fn animal_names(&self) -> SmallVec<[String; 8]> {
        self.animals.iter().map(AnimalEntry::name).collect()
    }

    /// Normalized symptom names, in dataset order.
    pub fn symptom_names(&self) -> SmallVec<[String; 8]> {
        self.symptoms.iter().map(SymptomEntry::name).collect()
    }

    /// First common name, or empty string when none is listed.
    pub fn primary_common_name(&self) -> String {
        self.common.first().map(CommonName::name).unwrap_or_default()
    }
}

/// First record whose scientific name or any common name contains `query`
/// (case-insensitive substring).
///
/// Input order decides among duplicate matches: the first occurrence wins,
/// not the best match.
pub fn find_by_name<'a>(plants: &'a [PlantRecord], query: &str) -> Option<&'a PlantRecord> {
    let query = query.trim();
    plants.iter().find(|plant| {
        plant
            .name
            .as_deref()
            .is_some_and(|name| contains_ci(name, query))
            || plant
                .common
                .iter()
                .any(|common| contains_ci(&common.name(), query))
    })
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> PlantRecord {
        serde_json::from_value(value).expect("record should decode")
    }

    #[test]
    fn test_severity_label_variants() {
        let detail = record(json!({"severity": {"label": "Severe", "level": 4}}));
        assert_eq!(detail.severity_label(), "Severe");
        assert_eq!(detail.severity_level(), 4);

        let fallback_name = record(json!({"severity": {"name": "High"}}));
        assert_eq!(fallback_name.severity_label(), "High");

        let fallback_level = record(json!({"severity": {"level": 3}}));
        assert_eq!(fallback_level.severity_label(), "3");
        assert_eq!(fallback_level.severity_level(), 3);

        let empty_detail = record(json!({"severity": {}}));
        assert_eq!(empty_detail.severity_label(), "Unknown");
        assert_eq!(empty_detail.severity_level(), 0);

        let scalar = record(json!({"severity": "Moderate"}));
        assert_eq!(scalar.severity_label(), "Moderate");
        assert_eq!(scalar.severity_level(), 2);

        let empty_scalar = record(json!({"severity": ""}));
        assert_eq!(empty_scalar.severity_label(), "Unknown");

        let absent = record(json!({}));
        assert_eq!(absent.severity_label(), "Unknown");
        assert_eq!(absent.severity_level(), 0);
    }

    #[test]
    fn test_animal_entry_shapes() {
        let mixed = record(json!({
            "animals": ["dogs", {"species": "cats"}, {"b_key": "horses", "a_key": "birds"}]
        }));
        let names = mixed.animal_names();
        assert_eq!(names[0], "dogs");
        assert_eq!(names[1], "cats");
        // multi-key objects take the first key in sorted order
        assert_eq!(names[2], "birds");
    }

    #[test]
    fn test_symptom_entry_shapes() {
        let mixed = record(json!({
            "symptoms": ["Vomiting", {"name": "Diarrhea"}, {"code": 7}]
        }));
        let names = mixed.symptom_names();
        assert_eq!(names[0], "Vomiting");
        assert_eq!(names[1], "Diarrhea");
        // an object without a name field normalizes to empty
        let unnamed = record(json!({"symptoms": [{"name": ""}]}));
        assert_eq!(unnamed.symptom_names()[0], "");
    }

    #[test]
    fn test_common_name_shapes() {
        let plant = record(json!({
            "common": [{"name": "Castor Bean"}, "Palma Christi"]
        }));
        assert_eq!(plant.primary_common_name(), "Castor Bean");

        let none = record(json!({}));
        assert_eq!(none.primary_common_name(), "");
    }

    #[test]
    fn test_find_by_name() {
        let plants: Vec<PlantRecord> = serde_json::from_value(json!([
            {"name": "Nerium oleander", "common": ["Oleander"]},
            {"name": "Lilium longiflorum", "common": [{"name": "Easter Lily"}]},
            {"name": "Lilium tigrinum", "common": [{"name": "Tiger Lily"}]}
        ]))
        .unwrap();

        // scientific-name match
        let hit = find_by_name(&plants, "nerium").unwrap();
        assert_eq!(hit.name.as_deref(), Some("Nerium oleander"));

        // common-name match, first occurrence wins among duplicates
        let lily = find_by_name(&plants, "lily").unwrap();
        assert_eq!(lily.name.as_deref(), Some("Lilium longiflorum"));

        assert!(find_by_name(&plants, "cactus").is_none());
    }
}
