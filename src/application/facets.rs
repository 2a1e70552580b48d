use crate::application::stats::{tally, LabelCount};
use crate::domain::ports::record_store::RecordStore;
use crate::domain::values::agreement_status::AgreementStatus;
use crate::domain::values::agreement_type::AgreementType;
use crate::domain::values::filter_category::FilterCategory;
use crate::domain::values::filter_selection::FilterSelection;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Facet {
    pub category: FilterCategory,
    pub options: Vec<FacetOption>,
}

/// Builds the option lists offered by the filters screen.
pub struct FacetUseCase {
    store: Arc<dyn RecordStore>,
}

impl FacetUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn facets(&self, selection: &FilterSelection) -> Vec<Facet> {
        FilterCategory::ALL
            .iter()
            .map(|&category| self.facet(category, selection))
            .collect()
    }

    /// Types and statuses list every known value, even with a zero count.
    /// Domains and countries list the values present, in first-seen order.
    pub fn facet(&self, category: FilterCategory, selection: &FilterSelection) -> Facet {
        let agreements = self.store.agreements().iter();
        let present = tally(agreements.map(|a| a.value_for(category)));
        let counts = match category {
            FilterCategory::Types => with_known(AgreementType::ALL.map(|t| t.label()), present),
            FilterCategory::Status => with_known(AgreementStatus::ALL.map(|s| s.label()), present),
            FilterCategory::Domains | FilterCategory::Countries => present,
        };
        let options = counts
            .into_iter()
            .map(|c| FacetOption {
                selected: selection.is_selected(category, &c.label),
                value: c.label,
                count: c.count,
            })
            .collect();
        Facet { category, options }
    }
}

/// Counts for each of `known` in that order, followed by any other label seen.
fn with_known<const N: usize>(known: [&str; N], present: Vec<LabelCount>) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = known
        .iter()
        .map(|label| LabelCount {
            label: label.to_string(),
            count: 0,
        })
        .collect();
    for c in present {
        match counts.iter_mut().find(|k| k.label == c.label) {
            Some(k) => k.count = c.count,
            None => counts.push(c),
        }
    }
    counts
}
