//! Search by Animal
//!
//! Finds plants dangerous to a given animal. Animal matching is
//! bidirectional substring containment ("cat" finds "cats" and "cats" finds
//! "cat"), so plural and singular queries behave the same.

use serde::Serialize;
use smallvec::SmallVec;

use crate::record::PlantRecord;
use crate::report::report_timestamp;
use crate::tasks::TaskError;
use crate::utils::overlaps_ci;

#[derive(Debug, Serialize)]
pub struct AnimalSearchReport {
    pub task: &'static str,
    pub timestamp: String,
    pub search_animal: String,
    pub total_plants_checked: usize,
    pub dangerous_plants_found: usize,
    pub dangerous_plants: Vec<DangerousPlant>,
}

#[derive(Debug, Serialize)]
pub struct DangerousPlant {
    pub scientific_name: String,
    pub common_name: String,
    pub family: String,
    pub severity: String,
    pub animals_affected: Vec<String>,
    pub symptoms: Vec<String>,
}

pub fn search_dangerous_plants_for_animal(
    plants: &[PlantRecord],
    animal: &str,
) -> Result<AnimalSearchReport, TaskError> {
    if plants.is_empty() {
        return Err(TaskError::EmptyDataset);
    }

    let mut dangerous_plants = Vec::new();
    for plant in plants {
        let names: SmallVec<[String; 8]> = plant.animal_names();
        if !names.iter().any(|name| overlaps_ci(name, animal)) {
            continue;
        }

        dangerous_plants.push(DangerousPlant {
            scientific_name: plant.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            common_name: plant.primary_common_name(),
            family: plant.family.clone().unwrap_or_else(|| "Unknown".to_string()),
            severity: plant.severity_label(),
            animals_affected: names.to_vec(),
            symptoms: plant.symptom_names().to_vec(),
        });
    }

    Ok(AnimalSearchReport {
        task: "search_animals",
        timestamp: report_timestamp(),
        search_animal: animal.to_string(),
        total_plants_checked: plants.len(),
        dangerous_plants_found: dangerous_plants.len(),
        dangerous_plants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plants(value: serde_json::Value) -> Vec<PlantRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_single_record_match() {
        let plants = plants(json!([{
            "name": "Ricinus communis",
            "family": "Euphorbiaceae",
            "severity": {"label": "Severe", "level": 4},
            "animals": ["dogs", "cats"],
            "symptoms": [{"name": "Vomiting"}]
        }]));

        let report = search_dangerous_plants_for_animal(&plants, "dog").unwrap();
        assert_eq!(report.dangerous_plants_found, 1);
        let hit = &report.dangerous_plants[0];
        assert_eq!(hit.scientific_name, "Ricinus communis");
        assert_eq!(hit.severity, "Severe");
        assert_eq!(hit.symptoms, vec!["Vomiting"]);
    }

    #[test]
    fn test_bidirectional_containment() {
        let listing_plural = plants(json!([{"name": "a", "animals": ["cats"]}]));
        let listing_singular = plants(json!([{"name": "b", "animals": ["cat"]}]));

        let hits = search_dangerous_plants_for_animal(&listing_plural, "cat").unwrap();
        assert_eq!(hits.dangerous_plants_found, 1);

        let hits = search_dangerous_plants_for_animal(&listing_singular, "cats").unwrap();
        assert_eq!(hits.dangerous_plants_found, 1);
    }

    #[test]
    fn test_keyed_animal_entries_match() {
        let plants = plants(json!([
            {"name": "a", "animals": [{"species": "horses"}]},
            {"name": "b", "animals": ["birds"]}
        ]));

        let report = search_dangerous_plants_for_animal(&plants, "horse").unwrap();
        assert_eq!(report.dangerous_plants_found, 1);
        assert_eq!(report.dangerous_plants[0].animals_affected, vec!["horses"]);
        assert_eq!(report.total_plants_checked, 2);
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        let plants = plants(json!([{"name": "a", "animals": ["cats"]}]));
        let report = search_dangerous_plants_for_animal(&plants, "iguana").unwrap();
        assert_eq!(report.dangerous_plants_found, 0);
    }
}
