use crate::domain::entities::partner::Partner;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::values::region::Region;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionStats {
    pub region: Region,
    pub partners: usize,
    pub agreements: u32,
}

/// Partners and region totals, for all regions or just one.
#[derive(Debug, Clone, Serialize)]
pub struct PartnerOverview<'a> {
    pub partners: Vec<&'a Partner>,
    pub regions: Vec<RegionStats>,
}

pub struct PartnerUseCase {
    store: Arc<dyn RecordStore>,
}

impl PartnerUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn partners(&self) -> &[Partner] {
        self.store.partners()
    }

    pub fn partners_in(&self, region: Region) -> Vec<&Partner> {
        self.store
            .partners()
            .iter()
            .filter(|p| region.contains(&p.country))
            .collect()
    }

    /// Partner count and summed seed `agreements_count` for a region.
    pub fn region_stats(&self, region: Region) -> RegionStats {
        let partners = self.partners_in(region);
        RegionStats {
            region,
            partners: partners.len(),
            agreements: partners.iter().map(|p| p.agreements_count).sum(),
        }
    }

    pub fn all_region_stats(&self) -> Vec<RegionStats> {
        Region::ALL.iter().map(|r| self.region_stats(*r)).collect()
    }

    pub fn overview(&self, region: Option<Region>) -> PartnerOverview<'_> {
        match region {
            Some(region) => PartnerOverview {
                partners: self.partners_in(region),
                regions: vec![self.region_stats(region)],
            },
            None => PartnerOverview {
                partners: self.store.partners().iter().collect(),
                regions: self.all_region_stats(),
            },
        }
    }

    /// Agreements in the store for the partner's country. Diagnostic only:
    /// `Partner::agreements_count` stays the figure shown to users.
    pub fn live_agreements_count(&self, partner: &Partner) -> usize {
        self.store
            .agreements()
            .iter()
            .filter(|a| a.country == partner.country)
            .count()
    }
}
