use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub total_visits: u64,
    pub active_agreements: u64,
    pub active_partners: u64,
    pub recent_documents: u64,
}
