use crate::domain::entities::agreement::Agreement;
use crate::domain::entities::partner::Partner;
use crate::domain::entities::statistics::StatisticsSummary;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::Path;

const EMBEDDED_SEED: &str = include_str!("../../data/seed.json");

/// Everything the record store is built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    pub agreements: Vec<Agreement>,
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub statistics: StatisticsSummary,
}

impl SeedData {
    /// Seed data compiled into the crate.
    pub fn embedded() -> Result<Self, DomainError> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::Seed(format!("Malformed seed: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Seed(format!("Cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}
