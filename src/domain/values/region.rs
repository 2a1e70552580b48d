use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Map regions partners are grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Europe,
    #[serde(rename = "Amérique")]
    Americas,
    #[serde(rename = "Asie")]
    Asia,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Europe, Region::Americas, Region::Asia];

    pub fn countries(&self) -> &'static [&'static str] {
        match self {
            Self::Europe => &["France", "Allemagne"],
            Self::Americas => &["États-Unis", "Canada"],
            Self::Asia => &["Japon"],
        }
    }

    pub fn contains(&self, country: &str) -> bool {
        self.countries().contains(&country)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Europe => write!(f, "Europe"),
            Self::Americas => write!(f, "Amérique"),
            Self::Asia => write!(f, "Asie"),
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "europe" => Ok(Self::Europe),
            "amérique" | "amerique" | "americas" => Ok(Self::Americas),
            "asie" | "asia" => Ok(Self::Asia),
            _ => Err(format!("Unknown region: {s}")),
        }
    }
}
