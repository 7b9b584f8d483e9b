// Diagnosis error types
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosisError {
    #[error("Unknown equipment type: {0}")]
    UnknownEquipmentType(String),

    #[error("Invalid threshold for {equipment}/{sensor}: low {low} is above high {high}")]
    InvalidThreshold {
        equipment: String,
        sensor: String,
        low: f64,
        high: f64,
    },

    #[error("Threshold rule for {equipment} references unknown sensor {sensor}")]
    UnknownSensor { equipment: String, sensor: String },

    #[error("Duplicate sensor {sensor} in {equipment} profile")]
    DuplicateSensor { equipment: String, sensor: String },
}

impl DiagnosisError {
    /// True when the error comes from caller input rather than registry configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(self, DiagnosisError::UnknownEquipmentType(_))
    }
}
