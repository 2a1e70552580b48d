pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::facets::{Facet, FacetUseCase};
use crate::application::lookup::LookupUseCase;
use crate::application::partners::PartnerUseCase;
use crate::application::session::FilterSession;
use crate::application::stats::{StatisticsReport, StatsUseCase};
use crate::domain::entities::agreement::Agreement;
use crate::domain::entities::statistics::StatisticsSummary;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::values::filter_selection::FilterSelection;
use crate::infrastructure::memory::record_store::InMemoryRecordStore;
use crate::infrastructure::seed::SeedData;
use std::path::Path;
use std::sync::Arc;

/// Application root: owns the record store and hands the same store to every
/// use case and session.
pub struct UacPortal {
    store: Arc<dyn RecordStore>,
    lookup_uc: LookupUseCase,
    stats_uc: StatsUseCase,
    partner_uc: PartnerUseCase,
    facet_uc: FacetUseCase,
}

impl UacPortal {
    /// Loads `seed_path` when given, the embedded seed otherwise.
    pub fn new(seed_path: Option<&Path>) -> Result<Self, DomainError> {
        let seed = match seed_path {
            Some(path) => SeedData::from_path(path)?,
            None => SeedData::embedded()?,
        };
        Ok(Self::from_seed(seed))
    }

    pub fn from_seed(seed: SeedData) -> Self {
        Self::with_store(Arc::new(InMemoryRecordStore::new(seed)))
    }

    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            lookup_uc: LookupUseCase::new(store.clone()),
            stats_uc: StatsUseCase::new(store.clone()),
            partner_uc: PartnerUseCase::new(store.clone()),
            facet_uc: FacetUseCase::new(store.clone()),
            store,
        }
    }

    /// Starts a browsing session with an empty selection.
    pub fn session(&self) -> FilterSession {
        FilterSession::new(self.store.clone())
    }

    pub fn agreements(&self) -> &[Agreement] {
        self.store.agreements()
    }

    pub fn partners(&self) -> &PartnerUseCase {
        &self.partner_uc
    }

    pub fn statistics(&self) -> &StatisticsSummary {
        self.store.statistics()
    }

    pub fn stats(&self) -> &StatsUseCase {
        &self.stats_uc
    }

    pub fn find_by_id(&self, id: &str) -> Result<Agreement, DomainError> {
        self.lookup_uc.find_by_id(id)
    }

    pub fn report(&self) -> StatisticsReport {
        self.stats_uc.report()
    }

    pub fn facets(&self, selection: &FilterSelection) -> Vec<Facet> {
        self.facet_uc.facets(selection)
    }
}
