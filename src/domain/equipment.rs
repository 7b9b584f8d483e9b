// Equipment domain model - types, sensors and threshold rules
use super::error::DiagnosisError;
use super::snapshot::SensorSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    SolarWaterPump,
    IrrigationSystem,
    TractorEngine,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 3] = [
        EquipmentType::SolarWaterPump,
        EquipmentType::IrrigationSystem,
        EquipmentType::TractorEngine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::SolarWaterPump => "solar_water_pump",
            EquipmentType::IrrigationSystem => "irrigation_system",
            EquipmentType::TractorEngine => "tractor_engine",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EquipmentType::SolarWaterPump => "Solar Water Pump",
            EquipmentType::IrrigationSystem => "Irrigation System",
            EquipmentType::TractorEngine => "Tractor Engine",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentType {
    type Err = DiagnosisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DiagnosisError::UnknownEquipmentType(s.to_string()))
    }
}

/// A sensor exposed by an equipment type. `min`/`max`/`step` describe valid input,
/// not safe operation; see [`ThresholdRule`] for that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ThresholdRule {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ThresholdRule {
    pub const fn low(low: f64) -> Self {
        Self { low: Some(low), high: None }
    }

    pub const fn high(high: f64) -> Self {
        Self { low: None, high: Some(high) }
    }

    pub const fn between(low: f64, high: f64) -> Self {
        Self { low: Some(low), high: Some(high) }
    }

    /// Render the safe range for display, e.g. "2-6 bar" or ">= 50 L/min".
    pub fn normal_range(&self, unit: &str) -> String {
        match (self.low, self.high) {
            (Some(low), Some(high)) => format!("{}-{} {}", low, high, unit),
            (Some(low), None) => format!(">= {} {}", low, unit),
            (None, Some(high)) => format!("<= {} {}", high, unit),
            (None, None) => "any".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EquipmentProfile {
    pub equipment_type: EquipmentType,
    pub display_name: &'static str,
    pub sensors: Vec<SensorDescriptor>,
    pub thresholds: BTreeMap<&'static str, ThresholdRule>,
}

impl EquipmentProfile {
    /// Build a profile, rejecting duplicate sensors, rules for unknown sensors and
    /// rules whose low bound exceeds the high bound.
    pub fn new(
        equipment_type: EquipmentType,
        sensors: Vec<SensorDescriptor>,
        thresholds: BTreeMap<&'static str, ThresholdRule>,
    ) -> Result<Self, DiagnosisError> {
        let mut keys = HashSet::new();
        for sensor in &sensors {
            if !keys.insert(sensor.key) {
                return Err(DiagnosisError::DuplicateSensor {
                    equipment: equipment_type.to_string(),
                    sensor: sensor.key.to_string(),
                });
            }
        }

        for (key, rule) in &thresholds {
            if !keys.contains(key) {
                return Err(DiagnosisError::UnknownSensor {
                    equipment: equipment_type.to_string(),
                    sensor: key.to_string(),
                });
            }
            if let (Some(low), Some(high)) = (rule.low, rule.high) {
                if low > high {
                    return Err(DiagnosisError::InvalidThreshold {
                        equipment: equipment_type.to_string(),
                        sensor: key.to_string(),
                        low,
                        high,
                    });
                }
            }
        }

        Ok(Self {
            equipment_type,
            display_name: equipment_type.display_name(),
            sensors,
            thresholds,
        })
    }

    pub fn sensor(&self, key: &str) -> Option<&SensorDescriptor> {
        self.sensors.iter().find(|s| s.key == key)
    }

    pub fn threshold(&self, key: &str) -> Option<&ThresholdRule> {
        self.thresholds.get(key)
    }

    /// Snapshot holding every sensor's simulated default reading
    pub fn default_snapshot(&self) -> SensorSnapshot {
        self.sensors
            .iter()
            .map(|s| (s.key.to_string(), s.default_value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor(key: &'static str) -> SensorDescriptor {
        SensorDescriptor {
            key,
            label: "Test",
            unit: "u",
            min: 0.0,
            max: 10.0,
            default_value: 5.0,
            step: None,
        }
    }

    #[test]
    fn test_equipment_type_parsing() {
        assert_eq!(
            "tractor_engine".parse::<EquipmentType>(),
            Ok(EquipmentType::TractorEngine)
        );
        assert_eq!(
            "wind_turbine".parse::<EquipmentType>(),
            Err(DiagnosisError::UnknownEquipmentType("wind_turbine".to_string()))
        );
    }

    #[test]
    fn test_equipment_type_parsing_is_exact() {
        assert_eq!(
            " solar_water_pump ".parse::<EquipmentType>(),
            Err(DiagnosisError::UnknownEquipmentType(" solar_water_pump ".to_string()))
        );
        assert!("Solar_Water_Pump".parse::<EquipmentType>().is_err());
    }

    #[test]
    fn test_normal_range_rendering() {
        assert_eq!(ThresholdRule::between(2.0, 6.0).normal_range("bar"), "2-6 bar");
        assert_eq!(ThresholdRule::low(50.0).normal_range("L/min"), ">= 50 L/min");
        assert_eq!(ThresholdRule::high(0.8).normal_range("bar"), "<= 0.8 bar");
    }

    #[test]
    fn test_inverted_threshold_rejected() {
        let thresholds = BTreeMap::from([("a", ThresholdRule::between(8.0, 2.0))]);
        let err = EquipmentProfile::new(EquipmentType::SolarWaterPump, vec![sensor("a")], thresholds)
            .unwrap_err();
        assert!(matches!(err, DiagnosisError::InvalidThreshold { low, high, .. } if low == 8.0 && high == 2.0));
    }

    #[test]
    fn test_rule_for_unknown_sensor_rejected() {
        let thresholds = BTreeMap::from([("missing", ThresholdRule::high(1.0))]);
        let err = EquipmentProfile::new(EquipmentType::TractorEngine, vec![sensor("a")], thresholds)
            .unwrap_err();
        assert_eq!(
            err,
            DiagnosisError::UnknownSensor {
                equipment: "tractor_engine".to_string(),
                sensor: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_sensor_rejected() {
        let err = EquipmentProfile::new(
            EquipmentType::IrrigationSystem,
            vec![sensor("a"), sensor("a")],
            BTreeMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, DiagnosisError::DuplicateSensor { .. }));
    }

    #[test]
    fn test_default_snapshot_covers_all_sensors() {
        let profile = EquipmentProfile::new(
            EquipmentType::SolarWaterPump,
            vec![sensor("a"), sensor("b")],
            BTreeMap::new(),
        )
        .unwrap();
        let snapshot = profile.default_snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("b"), Some(5.0));
    }
}
