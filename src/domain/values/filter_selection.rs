use crate::domain::entities::agreement::Agreement;
use crate::domain::filter::record_matches;
use crate::domain::values::filter_category::FilterCategory;
use std::collections::BTreeSet;

/// Active filter values per category plus the free-text query.
///
/// The value sets are private: they only change through [`set_query`],
/// [`toggle`] and [`clear`], so a selection can never hold duplicates.
///
/// [`set_query`]: FilterSelection::set_query
/// [`toggle`]: FilterSelection::toggle
/// [`clear`]: FilterSelection::clear
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    types: BTreeSet<String>,
    domains: BTreeSet<String>,
    countries: BTreeSet<String>,
    status: BTreeSet<String>,
    query: String,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn values(&self, category: FilterCategory) -> &BTreeSet<String> {
        match category {
            FilterCategory::Types => &self.types,
            FilterCategory::Domains => &self.domains,
            FilterCategory::Countries => &self.countries,
            FilterCategory::Status => &self.status,
        }
    }

    fn values_mut(&mut self, category: FilterCategory) -> &mut BTreeSet<String> {
        match category {
            FilterCategory::Types => &mut self.types,
            FilterCategory::Domains => &mut self.domains,
            FilterCategory::Countries => &mut self.countries,
            FilterCategory::Status => &mut self.status,
        }
    }

    pub fn is_selected(&self, category: FilterCategory, value: &str) -> bool {
        self.values(category).contains(value)
    }

    /// Replaces the query as given. Whitespace is kept.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Removes `value` if selected, otherwise adds it. Returns whether the
    /// value is selected afterwards.
    pub fn toggle(&mut self, category: FilterCategory, value: &str) -> bool {
        let set = self.values_mut(category);
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of selected values across all categories. The query is not counted.
    pub fn active_count(&self) -> usize {
        FilterCategory::ALL
            .iter()
            .map(|c| self.values(*c).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.active_count() == 0
    }

    pub fn matches(&self, agreement: &Agreement) -> bool {
        record_matches(self, &self.query.to_lowercase(), agreement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut sel = FilterSelection::new();
        assert!(sel.toggle(FilterCategory::Countries, "Japon"));
        assert!(sel.is_selected(FilterCategory::Countries, "Japon"));
        assert!(!sel.toggle(FilterCategory::Countries, "Japon"));
        assert!(sel.values(FilterCategory::Countries).is_empty());
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let mut sel = FilterSelection::new();
        sel.toggle(FilterCategory::Types, "Convention");
        sel.set_query("mit");
        let before = sel.clone();

        sel.toggle(FilterCategory::Status, "Expiré");
        sel.toggle(FilterCategory::Status, "Expiré");
        assert_eq!(sel, before);

        sel.toggle(FilterCategory::Types, "Convention");
        sel.toggle(FilterCategory::Types, "Convention");
        assert_eq!(sel, before);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut sel = FilterSelection::new();
        sel.toggle(FilterCategory::Types, "Convention");
        sel.toggle(FilterCategory::Domains, "Informatique");
        sel.set_query("tokyo");
        assert_eq!(sel.active_count(), 2);
        assert!(!sel.is_empty());

        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel, FilterSelection::default());
    }

    #[test]
    fn test_set_query_keeps_whitespace() {
        let mut sel = FilterSelection::new();
        sel.set_query("  Japon ");
        assert_eq!(sel.query(), "  Japon ");
    }

    #[test]
    fn test_categories_are_independent() {
        let mut sel = FilterSelection::new();
        sel.toggle(FilterCategory::Countries, "France");
        assert!(!sel.is_selected(FilterCategory::Domains, "France"));
        assert_eq!(sel.values(FilterCategory::Countries).len(), 1);
    }
}
