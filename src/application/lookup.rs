use crate::domain::entities::agreement::Agreement;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;
use std::sync::Arc;

pub struct LookupUseCase {
    store: Arc<dyn RecordStore>,
}

impl LookupUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn find_by_id(&self, id: &str) -> Result<Agreement, DomainError> {
        self.store
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("agreement {id}")))
    }
}
