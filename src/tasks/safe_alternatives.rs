//! Safe Alternatives
//!
//! Suggests replacements for a dangerous plant: dataset records rated
//! "Mild" that do not affect any of the caller's animals, plus a fixed list
//! of houseplants widely documented as non-toxic.

use serde::Serialize;
use smallvec::SmallVec;

use crate::record::{find_by_name, PlantRecord};
use crate::report::report_timestamp;
use crate::tasks::TaskError;
use crate::utils::overlaps_ci;

pub const MAX_ALTERNATIVES: usize = 10;
pub const DEFAULT_ANIMALS: &str = "dogs, cats";

#[derive(Debug, Clone, Serialize)]
pub struct SafePlant {
    pub name: &'static str,
    pub family: &'static str,
    pub note: &'static str,
}

/// Houseplants widely listed as non-toxic to household animals.
pub const KNOWN_SAFE_PLANTS: &[SafePlant] = &[
    SafePlant { name: "Spider Plant", family: "Asparagaceae", note: "Safe for cats and dogs" },
    SafePlant { name: "Boston Fern", family: "Nephrolepidaceae", note: "Safe, cleans the air" },
    SafePlant { name: "African Violet", family: "Gesneriaceae", note: "Safe, flowers beautifully" },
    SafePlant { name: "Bamboo Palm", family: "Arecaceae", note: "Safe, tropical look" },
    SafePlant { name: "Peperomia", family: "Piperaceae", note: "Safe, many varieties" },
    SafePlant { name: "Calathea", family: "Marantaceae", note: "Safe, decorative foliage" },
    SafePlant { name: "Polka Dot Plant", family: "Acanthaceae", note: "Safe, vivid foliage" },
    SafePlant { name: "Haworthia", family: "Asphodelaceae", note: "Safe alternative to aloe" },
    SafePlant { name: "Christmas Cactus", family: "Cactaceae", note: "Safe, blooms in winter" },
    SafePlant { name: "Areca Palm", family: "Arecaceae", note: "Safe, cleans the air" },
    SafePlant { name: "Parlor Palm", family: "Arecaceae", note: "Safe for all animals" },
    SafePlant { name: "Swedish Ivy", family: "Lamiaceae", note: "Safe, easy to care for" },
];

#[derive(Debug, Serialize)]
pub struct AlternativesReport {
    pub task: &'static str,
    pub timestamp: String,
    pub query_plant: String,
    pub user_animals: Vec<String>,
    /// None when the queried plant is not in the dataset; that alone is not
    /// an error, alternatives are still reported
    pub dangerous_plant_info: Option<DangerousPlantInfo>,
    pub alternatives_from_db: Vec<Alternative>,
    pub known_safe_plants: &'static [SafePlant],
}

#[derive(Debug, Serialize)]
pub struct DangerousPlantInfo {
    pub scientific_name: String,
    pub family: String,
    pub severity: String,
}

#[derive(Debug, Serialize)]
pub struct Alternative {
    pub scientific_name: String,
    pub common_name: String,
    pub family: String,
    pub severity: String,
}

pub fn find_safe_alternatives(
    plants: &[PlantRecord],
    dangerous_plant: &str,
    user_animals: &[String],
) -> Result<AlternativesReport, TaskError> {
    if plants.is_empty() {
        return Err(TaskError::EmptyDataset);
    }

    let found = find_by_name(plants, dangerous_plant);

    let user_animals_trimmed: Vec<&str> = user_animals
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();

    let mut alternatives = Vec::new();
    for plant in plants {
        if !plant.severity_label().eq_ignore_ascii_case("mild") {
            continue;
        }

        let names: SmallVec<[String; 8]> = plant.animal_names();
        let affects_user_animal = user_animals_trimmed
            .iter()
            .any(|user| names.iter().any(|listed| overlaps_ci(listed, user)));
        if affects_user_animal {
            continue;
        }

        alternatives.push(Alternative {
            scientific_name: plant.name.clone().unwrap_or_default(),
            common_name: plant.primary_common_name(),
            family: plant.family.clone().unwrap_or_default(),
            severity: "Mild".to_string(),
        });
    }
    alternatives.truncate(MAX_ALTERNATIVES);

    Ok(AlternativesReport {
        task: "safe_alternatives",
        timestamp: report_timestamp(),
        query_plant: dangerous_plant.to_string(),
        user_animals: user_animals.to_vec(),
        dangerous_plant_info: found.map(|plant| DangerousPlantInfo {
            scientific_name: plant.name.clone().unwrap_or_default(),
            family: plant.family.clone().unwrap_or_default(),
            severity: plant.severity_label(),
        }),
        alternatives_from_db: alternatives,
        known_safe_plants: KNOWN_SAFE_PLANTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plants(value: serde_json::Value) -> Vec<PlantRecord> {
        serde_json::from_value(value).unwrap()
    }

    fn animals(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mild_and_animal_disjoint_filter() {
        let plants = plants(json!([
            {"name": "Lilium sp.", "family": "Liliaceae",
             "severity": {"label": "Severe", "level": 4}, "animals": ["cats"]},
            {"name": "Mild for cats", "severity": {"label": "Mild"}, "animals": ["cats"]},
            {"name": "Mild for birds", "family": "Piperaceae",
             "severity": {"label": "Mild"}, "animals": ["birds"]}
        ]));

        let report = find_safe_alternatives(&plants, "lilium", &animals(&["cats", "dogs"])).unwrap();

        assert_eq!(report.dangerous_plant_info.as_ref().unwrap().severity, "Severe");
        assert_eq!(report.alternatives_from_db.len(), 1);
        assert_eq!(report.alternatives_from_db[0].scientific_name, "Mild for birds");
        assert_eq!(report.known_safe_plants.len(), 12);
    }

    #[test]
    fn test_substring_overlap_excludes() {
        // "cat" vs listed "cats" overlaps in either direction
        let plants = plants(json!([
            {"name": "x", "severity": {"label": "Mild"}, "animals": ["cats"]}
        ]));
        let report = find_safe_alternatives(&plants, "none", &animals(&["cat"])).unwrap();
        assert!(report.alternatives_from_db.is_empty());
    }

    #[test]
    fn test_unknown_query_plant_still_reports() {
        let plants = plants(json!([
            {"name": "x", "severity": {"label": "Mild"}, "animals": []}
        ]));
        let report = find_safe_alternatives(&plants, "ghost orchid", &animals(&["dogs"])).unwrap();
        assert!(report.dangerous_plant_info.is_none());
        assert_eq!(report.alternatives_from_db.len(), 1);
    }

    #[test]
    fn test_alternatives_capped() {
        let many: Vec<serde_json::Value> = (0..15)
            .map(|i| json!({"name": format!("m{i}"), "severity": {"label": "Mild"}}))
            .collect();
        let plants = plants(serde_json::Value::Array(many));

        let report = find_safe_alternatives(&plants, "none", &animals(&["dogs"])).unwrap();
        assert_eq!(report.alternatives_from_db.len(), MAX_ALTERNATIVES);
    }
}
