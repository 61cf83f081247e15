//! First-Aid Lookup
//!
//! Resolves a plant by name, collects the first-aid tips whose trigger
//! keyword appears in any of the plant's symptoms, and classifies how
//! urgently a veterinarian is needed.

use serde::Serialize;

use crate::record::{find_by_name, PlantRecord};
use crate::report::report_timestamp;
use crate::tasks::TaskError;
use crate::utils::contains_ci;

/// Advice per symptom trigger keyword, matched case-insensitively against
/// each symptom name.
pub const FIRST_AID_TIPS: &[(&str, &str)] = &[
    ("vomiting", "Withhold food for 12-24 hours. Keep fresh water available."),
    ("diarrhea", "Prevent dehydration. Offer water in small portions."),
    ("tremors", "Keep the animal warm and calm. See a veterinarian urgently!"),
    (
        "seizures",
        "Do not restrain the animal. Clear away dangerous objects nearby. Get to a veterinarian IMMEDIATELY!",
    ),
    ("cardiac", "Keep the animal at rest. Call a veterinarian immediately!"),
    ("breathing", "Provide fresh air. See a veterinarian urgently!"),
    ("drooling", "Rinse the mouth with clean water. Watch the animal's condition."),
    ("skin", "Wash the affected area with soap and water."),
    ("depression", "Provide rest and warmth. Watch the animal's condition."),
    ("death", "CRITICAL DANGER! Seek emergency veterinary care immediately!"),
];

pub const EMERGENCY_INFO: &str = "\
EMERGENCY CONTACTS:
- Veterinary clinic (24/7): find the nearest one
- In case of poisoning: do NOT induce vomiting without veterinary advice
- Bring a sample of the plant to the clinic for identification";

#[derive(Debug, Serialize)]
pub struct FirstAidReport {
    pub task: &'static str,
    pub timestamp: String,
    pub plant_query: String,
    pub plant: PlantSummary,
    pub symptoms: Vec<String>,
    pub urgency: &'static str,
    pub first_aid_actions: Vec<String>,
    pub emergency_info: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlantSummary {
    pub scientific_name: String,
    pub family: String,
    pub severity: String,
    pub severity_level: i64,
    pub affected_animals: Vec<String>,
}

/// Severity rank 3+ or any symptom naming death is critical; rank 2 is
/// high; everything else is moderate. The death check is per symptom name,
/// not against a stringified list.
fn classify_urgency(level: i64, symptoms: &[String]) -> &'static str {
    if level >= 3 || symptoms.iter().any(|s| contains_ci(s, "death")) {
        "critical"
    } else if level >= 2 {
        "high"
    } else {
        "moderate"
    }
}

pub fn get_first_aid_info(
    plants: &[PlantRecord],
    plant_query: &str,
) -> Result<FirstAidReport, TaskError> {
    if plants.is_empty() {
        return Err(TaskError::EmptyDataset);
    }

    let plant = find_by_name(plants, plant_query)
        .ok_or_else(|| TaskError::PlantNotFound(plant_query.to_string()))?;

    let symptoms: Vec<String> = plant.symptom_names().to_vec();

    let mut first_aid_actions: Vec<String> = Vec::new();
    for symptom in &symptoms {
        for (keyword, tip) in FIRST_AID_TIPS {
            if contains_ci(symptom, keyword) && !first_aid_actions.iter().any(|t| t == tip) {
                first_aid_actions.push((*tip).to_string());
            }
        }
    }

    let level = plant.severity_level();
    let urgency = classify_urgency(level, &symptoms);

    Ok(FirstAidReport {
        task: "first_aid",
        timestamp: report_timestamp(),
        plant_query: plant_query.to_string(),
        plant: PlantSummary {
            scientific_name: plant.name.clone().unwrap_or_default(),
            family: plant.family.clone().unwrap_or_default(),
            severity: plant.severity_label(),
            severity_level: level,
            affected_animals: plant.animal_names().to_vec(),
        },
        symptoms,
        urgency,
        first_aid_actions,
        emergency_info: EMERGENCY_INFO,
    })
}
