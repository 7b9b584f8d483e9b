// Diagnosis service - Use case for turning a sensor snapshot into a prediction
use crate::application::classifier::classify;
use crate::application::cost_estimator::estimate_cost;
use crate::application::detector::detect_failures;
use crate::application::narrator::narrate;
use crate::application::prognosis::time_to_failure;
use crate::application::registry::EquipmentRegistry;
use crate::application::urgency::score_urgency;
use crate::domain::diagnosis::{HealthStatus, MaintenanceUrgency, PredictionResult};
use crate::domain::equipment::EquipmentType;
use crate::domain::error::DiagnosisError;
use crate::domain::snapshot::SensorSnapshot;
use std::sync::Arc;

const HEALTHY_CONFIDENCE: f64 = 0.85;
const BASE_CONFIDENCE: f64 = 0.7;
const CONFIDENCE_PER_FAILURE: f64 = 0.05;
const MAX_CONFIDENCE: f64 = 0.95;
const BASELINE_FAILURE_PROBABILITY: f64 = 0.1;

#[derive(Clone)]
pub struct DiagnosisService {
    registry: Arc<EquipmentRegistry>,
}

impl DiagnosisService {
    pub fn new(registry: Arc<EquipmentRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &EquipmentRegistry {
        &self.registry
    }

    /// Parse the equipment type before running anything, so an unknown name
    /// never reaches the pipeline.
    pub fn run_prediction_named(
        &self,
        equipment_type: &str,
        snapshot: &SensorSnapshot,
    ) -> Result<PredictionResult, DiagnosisError> {
        let equipment_type: EquipmentType = equipment_type.parse()?;
        self.run_prediction(equipment_type, snapshot)
    }

    pub fn run_prediction(
        &self,
        equipment_type: EquipmentType,
        snapshot: &SensorSnapshot,
    ) -> Result<PredictionResult, DiagnosisError> {
        let profile = self.registry.profile(equipment_type)?;

        let failures = detect_failures(profile, snapshot);
        let failure_type = classify(&failures, equipment_type);
        let urgency = score_urgency(&failures, equipment_type);
        let status = health_status(failures.is_empty(), urgency);

        tracing::debug!(
            "Diagnosed {}: {} failures, type={}, urgency={}",
            equipment_type,
            failures.len(),
            failure_type,
            urgency
        );

        let confidence = confidence(failures.len());
        let failure_probability = if failures.is_empty() {
            BASELINE_FAILURE_PROBABILITY
        } else {
            confidence
        };
        let impact = narrate(&failures, equipment_type, status);
        let cost_estimate = (!failures.is_empty()).then(|| estimate_cost(equipment_type, failure_type));

        Ok(PredictionResult {
            equipment_type,
            status,
            confidence,
            failure_probability,
            failure_type: failure_type.to_string(),
            time_to_failure: time_to_failure(equipment_type, urgency).to_string(),
            maintenance_urgency: urgency,
            detected_failures: failures,
            impact,
            cost_estimate,
        })
    }
}

fn health_status(no_failures: bool, urgency: MaintenanceUrgency) -> HealthStatus {
    if no_failures {
        HealthStatus::Healthy
    } else if urgency >= MaintenanceUrgency::High {
        HealthStatus::Failure
    } else {
        HealthStatus::Warning
    }
}

/// Rounded to two decimals so repeated additions stay on exact steps
fn confidence(failure_count: usize) -> f64 {
    if failure_count == 0 {
        return HEALTHY_CONFIDENCE;
    }
    let raw = BASE_CONFIDENCE + CONFIDENCE_PER_FAILURE * failure_count as f64;
    (raw.min(MAX_CONFIDENCE) * 100.0).round() / 100.0
}
