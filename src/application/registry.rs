// Equipment profile registry - built-in sensor sets and detection thresholds
use crate::domain::equipment::{EquipmentProfile, EquipmentType, SensorDescriptor, ThresholdRule};
use crate::domain::error::DiagnosisError;
use std::collections::{BTreeMap, HashMap};

const fn sensor(
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    min: f64,
    max: f64,
    default_value: f64,
    step: Option<f64>,
) -> SensorDescriptor {
    SensorDescriptor {
        key,
        label,
        unit,
        min,
        max,
        default_value,
        step,
    }
}

static SOLAR_WATER_PUMP_SENSORS: [SensorDescriptor; 6] = [
    sensor("flow_rate_lmin", "Flow Rate", "L/min", 0.0, 200.0, 85.0, Some(1.0)),
    sensor("pressure_bar", "Pressure", "bar", 0.0, 10.0, 3.5, Some(0.1)),
    sensor("bearing_temperature_c", "Bearing Temperature", "°C", 0.0, 150.0, 55.0, Some(1.0)),
    sensor("vibration_mms", "Vibration", "mm/s", 0.0, 30.0, 4.5, Some(0.1)),
    sensor("motor_current_a", "Motor Current", "A", 0.0, 30.0, 8.5, Some(0.1)),
    sensor("solar_irradiance_wm2", "Solar Irradiance", "W/m²", 0.0, 1200.0, 800.0, Some(10.0)),
];

static SOLAR_WATER_PUMP_THRESHOLDS: [(&str, ThresholdRule); 5] = [
    ("flow_rate_lmin", ThresholdRule::low(50.0)),
    ("pressure_bar", ThresholdRule::between(2.0, 6.0)),
    ("bearing_temperature_c", ThresholdRule::high(80.0)),
    ("vibration_mms", ThresholdRule::high(10.0)),
    ("motor_current_a", ThresholdRule::high(15.0)),
];

static IRRIGATION_SYSTEM_SENSORS: [SensorDescriptor; 6] = [
    sensor("pressure_bar", "Line Pressure", "bar", 0.0, 10.0, 3.0, Some(0.1)),
    sensor("flow_rate_lmin", "Flow Rate", "L/min", 0.0, 500.0, 150.0, Some(1.0)),
    sensor("soil_moisture_percent", "Soil Moisture", "%", 0.0, 100.0, 35.0, Some(1.0)),
    sensor("valve_response_ms", "Valve Response Time", "ms", 0.0, 2000.0, 150.0, Some(10.0)),
    sensor("filter_differential_bar", "Filter Differential Pressure", "bar", 0.0, 2.0, 0.3, Some(0.05)),
    sensor("water_temperature_c", "Water Temperature", "°C", 0.0, 50.0, 18.0, None),
];

static IRRIGATION_SYSTEM_THRESHOLDS: [(&str, ThresholdRule); 5] = [
    ("pressure_bar", ThresholdRule::between(2.0, 5.0)),
    ("flow_rate_lmin", ThresholdRule::low(80.0)),
    ("soil_moisture_percent", ThresholdRule::between(20.0, 80.0)),
    ("valve_response_ms", ThresholdRule::high(500.0)),
    ("filter_differential_bar", ThresholdRule::high(0.8)),
];

static TRACTOR_ENGINE_SENSORS: [SensorDescriptor; 7] = [
    sensor("oil_temperature_c", "Oil Temperature", "°C", 0.0, 150.0, 85.0, Some(1.0)),
    sensor("coolant_temperature_c", "Coolant Temperature", "°C", 0.0, 130.0, 82.0, Some(1.0)),
    sensor("oil_pressure_bar", "Oil Pressure", "bar", 0.0, 10.0, 3.5, Some(0.1)),
    sensor("engine_rpm", "Engine Speed", "rpm", 0.0, 3000.0, 1800.0, Some(50.0)),
    sensor("engine_load_percent", "Engine Load", "%", 0.0, 100.0, 65.0, Some(1.0)),
    sensor("vibration_mms", "Vibration", "mm/s", 0.0, 30.0, 5.0, Some(0.1)),
    sensor("fuel_consumption_lph", "Fuel Consumption", "L/h", 0.0, 40.0, 12.0, Some(0.5)),
];

static TRACTOR_ENGINE_THRESHOLDS: [(&str, ThresholdRule); 6] = [
    ("oil_temperature_c", ThresholdRule::high(110.0)),
    ("coolant_temperature_c", ThresholdRule::high(100.0)),
    ("oil_pressure_bar", ThresholdRule::low(1.5)),
    ("engine_rpm", ThresholdRule::between(600.0, 2500.0)),
    ("engine_load_percent", ThresholdRule::high(90.0)),
    ("vibration_mms", ThresholdRule::high(12.0)),
];

/// Read-only lookup of equipment profiles, validated once at construction.
#[derive(Debug, Clone)]
pub struct EquipmentRegistry {
    profiles: HashMap<EquipmentType, EquipmentProfile>,
}

impl EquipmentRegistry {
    pub fn builtin() -> Result<Self, DiagnosisError> {
        let profiles = EquipmentType::ALL
            .into_iter()
            .map(builtin_profile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_profiles(profiles))
    }

    pub fn from_profiles(profiles: impl IntoIterator<Item = EquipmentProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|p| (p.equipment_type, p))
                .collect(),
        }
    }

    pub fn profile(&self, equipment_type: EquipmentType) -> Result<&EquipmentProfile, DiagnosisError> {
        self.profiles
            .get(&equipment_type)
            .ok_or_else(|| DiagnosisError::UnknownEquipmentType(equipment_type.to_string()))
    }

    /// Profiles in declaration order of [`EquipmentType::ALL`]
    pub fn profiles(&self) -> Vec<&EquipmentProfile> {
        EquipmentType::ALL
            .iter()
            .filter_map(|t| self.profiles.get(t))
            .collect()
    }
}

fn builtin_profile(equipment_type: EquipmentType) -> Result<EquipmentProfile, DiagnosisError> {
    let (sensors, thresholds): (&[SensorDescriptor], &[(&'static str, ThresholdRule)]) =
        match equipment_type {
            EquipmentType::SolarWaterPump => {
                (&SOLAR_WATER_PUMP_SENSORS[..], &SOLAR_WATER_PUMP_THRESHOLDS[..])
            }
            EquipmentType::IrrigationSystem => {
                (&IRRIGATION_SYSTEM_SENSORS[..], &IRRIGATION_SYSTEM_THRESHOLDS[..])
            }
            EquipmentType::TractorEngine => {
                (&TRACTOR_ENGINE_SENSORS[..], &TRACTOR_ENGINE_THRESHOLDS[..])
            }
        };

    EquipmentProfile::new(
        equipment_type,
        sensors.to_vec(),
        thresholds.iter().copied().collect::<BTreeMap<_, _>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_validates() {
        let registry = EquipmentRegistry::builtin().unwrap();
        assert_eq!(registry.profiles().len(), 3);

        let pump = registry.profile(EquipmentType::SolarWaterPump).unwrap();
        assert_eq!(pump.sensors[0].key, "flow_rate_lmin");
        assert_eq!(pump.threshold("pressure_bar"), Some(&ThresholdRule::between(2.0, 6.0)));
        assert_eq!(pump.threshold("solar_irradiance_wm2"), None);
    }

    #[test]
    fn test_default_snapshots_are_inside_thresholds() {
        let registry = EquipmentRegistry::builtin().unwrap();
        for profile in registry.profiles() {
            for sensor in &profile.sensors {
                assert!(sensor.default_value >= sensor.min && sensor.default_value <= sensor.max);
                if let Some(rule) = profile.threshold(sensor.key) {
                    assert!(rule.low.is_none_or(|low| sensor.default_value >= low), "{}", sensor.key);
                    assert!(rule.high.is_none_or(|high| sensor.default_value <= high), "{}", sensor.key);
                }
            }
        }
    }

    #[test]
    fn test_missing_profile_is_unknown_type() {
        let registry = EquipmentRegistry::from_profiles(Vec::new());
        assert_eq!(
            registry.profile(EquipmentType::TractorEngine).unwrap_err(),
            DiagnosisError::UnknownEquipmentType("tractor_engine".to_string())
        );
    }
}
