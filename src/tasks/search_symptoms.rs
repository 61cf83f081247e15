//! Search by Symptom
//!
//! Finds plants that cause a given poisoning symptom. Matches are ordered by
//! how many of a plant's symptoms contain the query; the report also lists
//! which of the dataset's globally frequent symptoms match the query.

use serde::Serialize;

use crate::record::PlantRecord;
use crate::report::report_timestamp;
use crate::tasks::TaskError;
use crate::utils::{contains_ci, FrequencyCounter};

/// Matches reported per query
pub const MAX_MATCHES: usize = 20;
/// Frequency-ranked symptom names considered for the related list
pub const MAX_RELATED: usize = 10;

#[derive(Debug, Serialize)]
pub struct SymptomSearchReport {
    pub task: &'static str,
    pub timestamp: String,
    pub search_query: String,
    pub total_plants_checked: usize,
    pub plants_with_symptom: usize,
    pub related_symptoms: Vec<RelatedSymptom>,
    pub matching_plants: Vec<SymptomMatch>,
}

#[derive(Debug, Serialize)]
pub struct RelatedSymptom {
    pub symptom: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SymptomMatch {
    pub scientific_name: String,
    pub common_name: String,
    pub family: String,
    pub severity: String,
    pub matched_symptoms: Vec<String>,
    pub all_symptoms: Vec<String>,
}

pub fn search_plants_by_symptom(
    plants: &[PlantRecord],
    query: &str,
) -> Result<SymptomSearchReport, TaskError> {
    if plants.is_empty() {
        return Err(TaskError::EmptyDataset);
    }

    let mut matches: Vec<SymptomMatch> = Vec::new();
    let mut symptom_counts = FrequencyCounter::new();

    for plant in plants {
        let names = plant.symptom_names();
        for name in &names {
            symptom_counts.add(name);
        }

        let matched: Vec<String> = names
            .iter()
            .filter(|name| contains_ci(name, query))
            .cloned()
            .collect();
        if matched.is_empty() {
            continue;
        }

        matches.push(SymptomMatch {
            scientific_name: plant.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            common_name: plant.primary_common_name(),
            family: plant.family.clone().unwrap_or_else(|| "Unknown".to_string()),
            severity: plant.severity_label(),
            matched_symptoms: matched,
            all_symptoms: names.to_vec(),
        });
    }

    // Stable sort keeps dataset order among equal match counts
    matches.sort_by(|a, b| b.matched_symptoms.len().cmp(&a.matched_symptoms.len()));
    let plants_with_symptom = matches.len();
    matches.truncate(MAX_MATCHES);

    // The globally most frequent symptoms, narrowed to those matching the
    // query. Narrowing happens AFTER the frequency cut, so fewer than
    // MAX_RELATED entries may appear even when more matching symptoms exist.
    let related_symptoms = symptom_counts
        .most_common(MAX_RELATED)
        .into_iter()
        .filter(|(name, _)| contains_ci(name, query))
        .map(|(symptom, count)| RelatedSymptom { symptom, count })
        .collect();

    Ok(SymptomSearchReport {
        task: "search_symptoms",
        timestamp: report_timestamp(),
        search_query: query.to_string(),
        total_plants_checked: plants.len(),
        plants_with_symptom,
        related_symptoms,
        matching_plants: matches,
    })
}
