// HTTP request handlers
use crate::application::advisory_service::{advise, MaintenanceAdvisory};
use crate::application::history_repository::HistoricalContext;
use crate::domain::diagnosis::PredictionResult;
use crate::domain::equipment::{EquipmentProfile, EquipmentType};
use crate::domain::snapshot::SensorSnapshot;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    pub equipment_type: String,
    #[serde(default)]
    pub sensor_data: SensorSnapshot,
}

#[derive(Debug, Serialize)]
pub struct DiagnosisReport {
    pub generated_at: DateTime<Utc>,
    pub prediction: PredictionResult,
    pub advisory: MaintenanceAdvisory,
    pub history: Option<HistoricalContext>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List equipment profiles with their sensors and thresholds
pub async fn list_equipment(State(state): State<Arc<AppState>>) -> Json<Vec<EquipmentProfile>> {
    let profiles = state
        .diagnosis_service
        .registry()
        .profiles()
        .into_iter()
        .cloned()
        .collect();
    Json(profiles)
}

/// Simulated readings for an equipment type, one per sensor
pub async fn equipment_defaults(
    Path(equipment_type): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SensorSnapshot>, ApiError> {
    let equipment_type: EquipmentType = equipment_type.parse()?;
    let profile = state.diagnosis_service.registry().profile(equipment_type)?;
    Ok(Json(profile.default_snapshot()))
}

/// Run the diagnostic pipeline on one snapshot
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResult>, ApiError> {
    let prediction = state
        .diagnosis_service
        .run_prediction_named(&request.equipment_type, &request.sensor_data)?;
    Ok(Json(prediction))
}

/// Prediction plus maintenance advisory and, for failures, repair history
pub async fn diagnose(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<DiagnosisReport>, ApiError> {
    let prediction = state
        .diagnosis_service
        .run_prediction_named(&request.equipment_type, &request.sensor_data)?;

    let history = if prediction.is_healthy() {
        None
    } else {
        match state
            .history_cache
            .get(prediction.equipment_type, &prediction.failure_type)
            .await
        {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(
                    "History lookup failed for {}/{}: {}",
                    prediction.equipment_type,
                    prediction.failure_type,
                    e
                );
                None
            }
        }
    };

    let generated_at = Utc::now();
    let advisory = advise(&prediction, generated_at);
    Ok(Json(DiagnosisReport {
        generated_at,
        prediction,
        advisory,
        history,
    }))
}

/// Drop one cached history entry
pub async fn invalidate_history(
    Path((equipment_type, failure_type)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    let equipment_type: EquipmentType = equipment_type.parse()?;
    state.history_cache.invalidate(equipment_type, &failure_type).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Drop every cached history entry
pub async fn clear_history(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let cleared = state.history_cache.len().await;
    state.history_cache.invalidate_all().await;
    tracing::info!("Cleared {} cached history entries", cleared);
    Json(serde_json::json!({ "cleared": cleared }))
}
