//! Query Routines
//!
//! Six stateless routines over the loaded record list. Each consumes the
//! records plus its query parameters and produces a serializable report;
//! none mutates shared state, none calls another, and none writes files
//! itself — the caller owns the result sink and the protocol log.

pub mod first_aid;
pub mod safe_alternatives;
pub mod search_animals;
pub mod search_symptoms;
pub mod severity_stats;
pub mod top_families;

use thiserror::Error;

/// Routine failure. Two tiers only: the dataset was unusable, or a
/// name-keyed lookup found nothing. No retries, no partial reports.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Dataset missing, malformed, or empty
    #[error("failed to load plant data")]
    EmptyDataset,

    /// Name lookup found no matching plant
    #[error("plant '{0}' not found in the database")]
    PlantNotFound(String),
}
