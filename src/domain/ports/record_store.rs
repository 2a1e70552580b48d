use crate::domain::entities::agreement::Agreement;
use crate::domain::entities::partner::Partner;
use crate::domain::entities::statistics::StatisticsSummary;

/// Read-only access to the agreements, partners and statistics loaded at startup.
pub trait RecordStore: Send + Sync {
    fn agreements(&self) -> &[Agreement];
    fn partners(&self) -> &[Partner];
    fn statistics(&self) -> &StatisticsSummary;

    fn get_by_id(&self, id: &str) -> Option<&Agreement> {
        self.agreements().iter().find(|a| a.id == id)
    }
}
