use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four dimensions an agreement list can be narrowed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Types,
    Domains,
    Countries,
    Status,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::Types,
        FilterCategory::Domains,
        FilterCategory::Countries,
        FilterCategory::Status,
    ];
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Types => write!(f, "types"),
            Self::Domains => write!(f, "domains"),
            Self::Countries => write!(f, "countries"),
            Self::Status => write!(f, "status"),
        }
    }
}

impl FromStr for FilterCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "types" | "type" => Ok(Self::Types),
            "domains" | "domain" => Ok(Self::Domains),
            "countries" | "country" => Ok(Self::Countries),
            "status" => Ok(Self::Status),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}
