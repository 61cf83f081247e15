//! Family Frequency Ranking
//!
//! Counts taxonomic families across the dataset and ranks the most frequent
//! ones. Records without a family are counted toward the total but not
//! toward any family.

use serde::Serialize;

use crate::record::PlantRecord;
use crate::report::report_timestamp;
use crate::tasks::TaskError;
use crate::utils::{percentage, FrequencyCounter};

pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
pub struct TopFamiliesReport {
    pub task: &'static str,
    pub timestamp: String,
    pub total_plants_processed: usize,
    pub unique_families_count: usize,
    pub top_families: Vec<FamilyRank>,
}

#[derive(Debug, Serialize)]
pub struct FamilyRank {
    pub rank: usize,
    pub family: String,
    pub count: usize,
    /// Share of ALL records, not just family-bearing ones
    pub percentage: f64,
}

/// Rank the `limit` most frequent families; ties keep dataset order.
pub fn analyze_top_families(
    plants: &[PlantRecord],
    limit: usize,
) -> Result<TopFamiliesReport, TaskError> {
    if plants.is_empty() {
        return Err(TaskError::EmptyDataset);
    }

    let mut families = FrequencyCounter::new();
    for plant in plants {
        if let Some(family) = plant.family.as_deref().filter(|f| !f.is_empty()) {
            families.add(family);
        }
    }

    let top_families = families
        .most_common(limit)
        .into_iter()
        .enumerate()
        .map(|(idx, (family, count))| FamilyRank {
            rank: idx + 1,
            family,
            count,
            percentage: percentage(count, plants.len()),
        })
        .collect();

    Ok(TopFamiliesReport {
        task: "top_families",
        timestamp: report_timestamp(),
        total_plants_processed: plants.len(),
        unique_families_count: families.unique(),
        top_families,
    })
}
