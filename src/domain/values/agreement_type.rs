use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgreementType {
    #[serde(rename = "Accord cadre")]
    FrameworkAgreement,
    #[serde(rename = "Convention")]
    Convention,
    #[serde(rename = "Coopération")]
    Cooperation,
}

impl AgreementType {
    pub const ALL: [AgreementType; 3] = [
        AgreementType::FrameworkAgreement,
        AgreementType::Convention,
        AgreementType::Cooperation,
    ];

    /// Label as it appears in seed data and in filter selections.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FrameworkAgreement => "Accord cadre",
            Self::Convention => "Convention",
            Self::Cooperation => "Coopération",
        }
    }
}

impl fmt::Display for AgreementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgreementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accord cadre" | "framework" | "framework-agreement" => Ok(Self::FrameworkAgreement),
            "convention" => Ok(Self::Convention),
            "coopération" | "cooperation" => Ok(Self::Cooperation),
            _ => Err(format!("Unknown agreement type: {s}")),
        }
    }
}
