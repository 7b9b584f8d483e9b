// Diagnosis domain models - the output of one prediction run
use super::equipment::EquipmentType;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueKind {
    Low,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedFailure {
    pub sensor: String,
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub issue: IssueKind,
    pub normal_range: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Failure,
}

/// Ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceUrgency {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for MaintenanceUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaintenanceUrgency::Low => "low",
            MaintenanceUrgency::Medium => "medium",
            MaintenanceUrgency::High => "high",
            MaintenanceUrgency::Critical => "critical",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub labor_hours: f64,
    pub parts_cost: f64,
    pub total_cost: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub equipment_type: EquipmentType,
    pub status: HealthStatus,
    pub confidence: f64,
    pub failure_probability: f64,
    pub failure_type: String,
    pub time_to_failure: String,
    pub maintenance_urgency: MaintenanceUrgency,
    pub detected_failures: Vec<DetectedFailure>,
    pub impact: String,
    pub cost_estimate: Option<CostEstimate>,
}

impl PredictionResult {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}
