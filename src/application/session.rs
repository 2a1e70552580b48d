use crate::domain::entities::agreement::Agreement;
use crate::domain::error::DomainError;
use crate::domain::filter::filter_agreements;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::values::filter_category::FilterCategory;
use crate::domain::values::filter_selection::FilterSelection;
use std::cell::OnceCell;
use std::sync::Arc;

/// Owns the current selection for one browsing session and serves the
/// matching agreements.
///
/// The filtered list is computed on the first read after a mutation and
/// reused until the next one.
pub struct FilterSession {
    store: Arc<dyn RecordStore>,
    selection: FilterSelection,
    filtered: OnceCell<Vec<Agreement>>,
}

impl FilterSession {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            selection: FilterSelection::default(),
            filtered: OnceCell::new(),
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.selection.set_query(text);
        tracing::debug!(query = %self.selection.query(), "query updated");
        self.invalidate();
    }

    /// Returns whether `value` is selected after the toggle.
    pub fn toggle_filter_value(&mut self, category: FilterCategory, value: &str) -> bool {
        let selected = self.selection.toggle(category, value);
        tracing::debug!(%category, value, selected, "filter toggled");
        self.invalidate();
        selected
    }

    /// Same as [`toggle_filter_value`](Self::toggle_filter_value) for a
    /// category given by name. Unknown names are rejected and leave the
    /// selection untouched.
    pub fn toggle_filter_value_by_name(
        &mut self,
        category: &str,
        value: &str,
    ) -> Result<bool, DomainError> {
        let category: FilterCategory = category.parse()?;
        Ok(self.toggle_filter_value(category, value))
    }

    pub fn clear_all(&mut self) {
        self.selection.clear();
        tracing::debug!("filters cleared");
        self.invalidate();
    }

    pub fn filtered(&self) -> &[Agreement] {
        self.filtered.get_or_init(|| {
            filter_agreements(self.store.agreements(), &self.selection)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    fn invalidate(&mut self) {
        self.filtered.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::record_store::InMemoryRecordStore;
    use crate::infrastructure::seed::SeedData;

    fn session() -> FilterSession {
        let store = InMemoryRecordStore::new(SeedData::embedded().unwrap());
        FilterSession::new(Arc::new(store))
    }

    #[test]
    fn test_fresh_session_shows_everything() {
        let s = session();
        assert_eq!(s.filtered().len(), s.store.agreements().len());
    }

    #[test]
    fn test_cache_is_dropped_on_mutation() {
        let mut s = session();
        let all = s.filtered().len();
        s.toggle_filter_value(FilterCategory::Countries, "Japon");
        let narrowed = s.filtered().len();
        assert!(narrowed < all);
        s.toggle_filter_value(FilterCategory::Countries, "Japon");
        assert_eq!(s.filtered().len(), all);
    }

    #[test]
    fn test_unknown_category_name_leaves_selection_untouched() {
        let mut s = session();
        let err = s.toggle_filter_value_by_name("partners", "MIT").unwrap_err();
        assert!(matches!(err, DomainError::InvalidCategory(_)));
        assert!(s.selection().is_empty());
    }
}
