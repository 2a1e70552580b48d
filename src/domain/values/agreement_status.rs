use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgreementStatus {
    #[serde(rename = "En cours")]
    Active,
    #[serde(rename = "Expiré")]
    Expired,
    #[serde(rename = "Reconduction tacite")]
    TacitRenewal,
}

impl AgreementStatus {
    pub const ALL: [AgreementStatus; 3] = [
        AgreementStatus::Active,
        AgreementStatus::Expired,
        AgreementStatus::TacitRenewal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "En cours",
            Self::Expired => "Expiré",
            Self::TacitRenewal => "Reconduction tacite",
        }
    }
}

impl fmt::Display for AgreementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgreementStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en cours" | "active" => Ok(Self::Active),
            "expiré" | "expire" | "expired" => Ok(Self::Expired),
            "reconduction tacite" | "tacit-renewal" | "renewal" => Ok(Self::TacitRenewal),
            _ => Err(format!(
                "Invalid status: '{s}'. Use 'active', 'expired' or 'tacit-renewal'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!("En cours".parse::<AgreementStatus>().unwrap(), AgreementStatus::Active);
        assert_eq!("expired".parse::<AgreementStatus>().unwrap(), AgreementStatus::Expired);
        assert_eq!(
            "reconduction tacite".parse::<AgreementStatus>().unwrap(),
            AgreementStatus::TacitRenewal
        );
        assert!("pending".parse::<AgreementStatus>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for status in AgreementStatus::ALL {
            assert_eq!(status.to_string().parse::<AgreementStatus>().unwrap(), status);
        }
    }
}
