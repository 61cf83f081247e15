//! Severity Level Distribution
//!
//! Normalizes every record's severity to a label (missing/odd encodings
//! become "Unknown") and reports the frequency distribution plus a summary.
//! Every record contributes exactly one entry, so bucket counts always sum
//! to the record count.

use serde::Serialize;

use crate::record::PlantRecord;
use crate::report::report_timestamp;
use crate::tasks::TaskError;
use crate::utils::{percentage, FrequencyCounter};

#[derive(Debug, Serialize)]
pub struct SeverityStatsReport {
    pub task: &'static str,
    pub timestamp: String,
    pub total_plants_analyzed: usize,
    pub severity_distribution: Vec<SeverityBucket>,
    pub summary: SeveritySummary,
}

#[derive(Debug, Serialize)]
pub struct SeverityBucket {
    pub level: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct SeveritySummary {
    pub most_common_severity: String,
    pub most_common_count: usize,
    pub unique_severity_levels: usize,
    pub plants_without_severity: usize,
}

pub fn analyze_severity_statistics(
    plants: &[PlantRecord],
) -> Result<SeverityStatsReport, TaskError> {
    if plants.is_empty() {
        return Err(TaskError::EmptyDataset);
    }

    let mut levels = FrequencyCounter::new();
    for plant in plants {
        levels.add(&plant.severity_label());
    }

    let severity_distribution = levels
        .most_common(usize::MAX)
        .into_iter()
        .map(|(level, count)| SeverityBucket {
            level,
            count,
            percentage: percentage(count, plants.len()),
        })
        .collect();

    let (most_common_severity, most_common_count) = levels
        .most_common(1)
        .into_iter()
        .next()
        .unwrap_or_else(|| ("None".to_string(), 0));

    Ok(SeverityStatsReport {
        task: "severity_stats",
        timestamp: report_timestamp(),
        total_plants_analyzed: plants.len(),
        severity_distribution,
        summary: SeveritySummary {
            most_common_severity,
            most_common_count,
            unique_severity_levels: levels.unique(),
            plants_without_severity: levels.count("Unknown"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn plants(value: serde_json::Value) -> Vec<PlantRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_single_record_distribution() {
        let plants = plants(json!([{
            "name": "Ricinus communis",
            "family": "Euphorbiaceae",
            "severity": {"label": "Severe", "level": 4},
            "animals": ["dogs", "cats"],
            "symptoms": [{"name": "Vomiting"}]
        }]));

        let report = analyze_severity_statistics(&plants).unwrap();
        assert_eq!(report.severity_distribution.len(), 1);
        assert_eq!(report.severity_distribution[0].level, "Severe");
        assert_eq!(report.severity_distribution[0].count, 1);
        assert_relative_eq!(
            report.severity_distribution[0].percentage,
            100.0,
            epsilon = 1e-9
        );
        assert_eq!(report.summary.most_common_severity, "Severe");
    }

    #[test]
    fn test_counts_sum_to_record_count() {
        let plants = plants(json!([
            {"severity": {"label": "Severe"}},
            {"severity": "Mild"},
            {"severity": {}},
            {}
        ]));

        let report = analyze_severity_statistics(&plants).unwrap();
        let total: usize = report.severity_distribution.iter().map(|b| b.count).sum();
        assert_eq!(total, plants.len());
        // `{}` and absent severity both normalize to Unknown
        assert_eq!(report.summary.plants_without_severity, 2);
        assert_eq!(report.summary.unique_severity_levels, 3);
    }

    #[test]
    fn test_empty_dataset_is_error() {
        assert!(matches!(
            analyze_severity_statistics(&[]),
            Err(TaskError::EmptyDataset)
        ));
    }
}
