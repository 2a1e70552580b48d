use crate::domain::entities::agreement::Agreement;
use crate::domain::entities::statistics::StatisticsSummary;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::values::agreement_status::AgreementStatus;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Domains shown in the domain bar chart.
pub const MAX_DOMAIN_BARS: usize = 6;
/// Start years covered by the recent-activity timeline.
pub const RECENT_YEARS: usize = 3;
/// Partner countries in the ranking.
pub const TOP_PARTNERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// One row of the partner ranking. `share` is the partner's agreement count
/// as a whole percentage of the largest count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerRank {
    pub rank: usize,
    pub country: String,
    pub flag: String,
    pub agreements: u32,
    pub share: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatisticsReport {
    pub summary: StatisticsSummary,
    pub total_agreements: usize,
    pub total_partners: usize,
    pub by_type: Vec<LabelCount>,
    pub by_status: Vec<LabelCount>,
    pub top_domains: Vec<LabelCount>,
    pub tacit_renewal_rate: u32,
    pub new_agreements: Vec<YearCount>,
    pub top_partners: Vec<PartnerRank>,
}

pub struct StatsUseCase {
    store: Arc<dyn RecordStore>,
}

impl StatsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn summary(&self) -> &StatisticsSummary {
        self.store.statistics()
    }

    pub fn by_type(&self) -> Vec<LabelCount> {
        tally(self.store.agreements().iter().map(|a| a.agreement_type.label()))
    }

    pub fn by_status(&self) -> Vec<LabelCount> {
        tally(self.store.agreements().iter().map(|a| a.status.label()))
    }

    pub fn by_domain(&self) -> Vec<LabelCount> {
        tally(self.store.agreements().iter().map(|a| a.domain.as_str()))
    }

    pub fn new_agreements_in(&self, year: i32) -> usize {
        self.store
            .agreements()
            .iter()
            .filter(|a| a.start_year() == year)
            .count()
    }

    /// Share of agreements under tacit renewal, as a whole percentage.
    pub fn tacit_renewal_rate(&self) -> u32 {
        let agreements = self.store.agreements();
        if agreements.is_empty() {
            return 0;
        }
        let renewed = agreements
            .iter()
            .filter(|a| a.status == AgreementStatus::TacitRenewal)
            .count();
        (renewed as f64 / agreements.len() as f64 * 100.0).round() as u32
    }

    /// Partners by seed `agreements_count`, largest first, ties in store order.
    pub fn top_partners(&self, n: usize) -> Vec<PartnerRank> {
        let partners = self.store.partners();
        let max = partners.iter().map(|p| p.agreements_count).max().unwrap_or(0);

        let mut ranked: Vec<_> = partners.iter().collect();
        ranked.sort_by(|a, b| b.agreements_count.cmp(&a.agreements_count));

        ranked
            .into_iter()
            .take(n)
            .enumerate()
            .map(|(idx, p)| PartnerRank {
                rank: idx + 1,
                country: p.country.clone(),
                flag: p.flag.clone(),
                agreements: p.agreements_count,
                share: if max == 0 {
                    0
                } else {
                    (f64::from(p.agreements_count) / f64::from(max) * 100.0).round() as u32
                },
            })
            .collect()
    }

    pub fn report(&self) -> StatisticsReport {
        let mut top_domains = self.by_domain();
        top_domains.truncate(MAX_DOMAIN_BARS);

        let new_agreements = recent_start_years(self.store.agreements())
            .into_iter()
            .map(|year| YearCount {
                year,
                count: self.new_agreements_in(year),
            })
            .collect();

        StatisticsReport {
            summary: self.summary().clone(),
            total_agreements: self.store.agreements().len(),
            total_partners: self.store.partners().len(),
            by_type: self.by_type(),
            by_status: self.by_status(),
            top_domains,
            tacit_renewal_rate: self.tacit_renewal_rate(),
            new_agreements,
            top_partners: self.top_partners(TOP_PARTNERS),
        }
    }
}

/// Counts labels, keeping the order in which each label first appears.
pub(crate) fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|c| c.label == label) {
            Some(c) => c.count += 1,
            None => counts.push(LabelCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

/// The most recent start years present, newest first.
fn recent_start_years(agreements: &[Agreement]) -> Vec<i32> {
    let years: BTreeSet<i32> = agreements.iter().map(|a| a.start_year()).collect();
    years.into_iter().rev().take(RECENT_YEARS).collect()
}
