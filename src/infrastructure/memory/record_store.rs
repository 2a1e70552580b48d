use crate::domain::entities::agreement::Agreement;
use crate::domain::entities::partner::Partner;
use crate::domain::entities::statistics::StatisticsSummary;
use crate::domain::ports::record_store::RecordStore;
use crate::infrastructure::seed::SeedData;
use std::collections::HashMap;

pub struct InMemoryRecordStore {
    agreements: Vec<Agreement>,
    partners: Vec<Partner>,
    statistics: StatisticsSummary,
    by_id: HashMap<String, usize>,
}

impl InMemoryRecordStore {
    pub fn new(seed: SeedData) -> Self {
        let SeedData {
            agreements,
            partners,
            statistics,
        } = seed;

        let mut by_id = HashMap::with_capacity(agreements.len());
        for (idx, agreement) in agreements.iter().enumerate() {
            if !agreement.has_valid_period() {
                tracing::warn!(
                    id = %agreement.id,
                    start = %agreement.start_date,
                    end = %agreement.end_date,
                    "agreement ends before it starts"
                );
            }
            by_id.entry(agreement.id.clone()).or_insert(idx);
        }

        tracing::info!(
            agreements = agreements.len(),
            partners = partners.len(),
            "record store loaded"
        );

        Self {
            agreements,
            partners,
            statistics,
            by_id,
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn agreements(&self) -> &[Agreement] {
        &self.agreements
    }

    fn partners(&self) -> &[Partner] {
        &self.partners
    }

    fn statistics(&self) -> &StatisticsSummary {
        &self.statistics
    }

    fn get_by_id(&self, id: &str) -> Option<&Agreement> {
        self.by_id.get(id).map(|&idx| &self.agreements[idx])
    }
}
