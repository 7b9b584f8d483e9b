// Repository trait for maintenance history lookups
use crate::domain::equipment::EquipmentType;
use async_trait::async_trait;
use serde::Serialize;

/// Past outcomes for one failure type on one equipment type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalContext {
    pub similar_events: u32,
    pub avg_resolution_hours: f64,
    pub success_rate: f64,
    pub common_cause: String,
}

#[async_trait]
pub trait MaintenanceHistoryRepository: Send + Sync {
    /// History for a failure type, or None when nothing has been recorded
    async fn find_history(
        &self,
        equipment_type: EquipmentType,
        failure_type: &str,
    ) -> anyhow::Result<Option<HistoricalContext>>;
}
