use serde::{Deserialize, Serialize};

/// A partner country or institution shown on the map.
///
/// `agreements_count` comes from seed data and is not derived from the
/// agreement list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub country: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub agreements_count: u32,
    pub flag: String,
}
