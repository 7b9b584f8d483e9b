// Urgency scorer - secondary severity cutoffs mapped to an urgency tier
use crate::domain::diagnosis::{DetectedFailure, MaintenanceUrgency};
use crate::domain::equipment::EquipmentType;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cutoff {
    Below(f64),
    Above(f64),
}

/// A stricter limit on one sensor that adds `points` to the risk score when crossed.
/// These are independent of the detection thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SeverityRule {
    sensor: &'static str,
    cutoff: Cutoff,
    points: u32,
}

const fn below(sensor: &'static str, limit: f64, points: u32) -> SeverityRule {
    SeverityRule {
        sensor,
        cutoff: Cutoff::Below(limit),
        points,
    }
}

const fn above(sensor: &'static str, limit: f64, points: u32) -> SeverityRule {
    SeverityRule {
        sensor,
        cutoff: Cutoff::Above(limit),
        points,
    }
}

const SOLAR_WATER_PUMP_SEVERITY: &[SeverityRule] = &[
    below("flow_rate_lmin", 30.0, 3),
    above("bearing_temperature_c", 95.0, 3),
    above("vibration_mms", 12.0, 2),
];

const IRRIGATION_SYSTEM_SEVERITY: &[SeverityRule] = &[
    below("pressure_bar", 1.5, 3),
    above("filter_differential_bar", 1.2, 2),
    below("flow_rate_lmin", 50.0, 2),
];

const TRACTOR_ENGINE_SEVERITY: &[SeverityRule] = &[
    below("oil_pressure_bar", 1.0, 3),
    above("coolant_temperature_c", 110.0, 3),
    above("oil_temperature_c", 125.0, 2),
    above("vibration_mms", 18.0, 2),
];

fn severity_rules(equipment_type: EquipmentType) -> &'static [SeverityRule] {
    match equipment_type {
        EquipmentType::SolarWaterPump => SOLAR_WATER_PUMP_SEVERITY,
        EquipmentType::IrrigationSystem => IRRIGATION_SYSTEM_SEVERITY,
        EquipmentType::TractorEngine => TRACTOR_ENGINE_SEVERITY,
    }
}

pub fn risk_score(failures: &[DetectedFailure], equipment_type: EquipmentType) -> u32 {
    severity_rules(equipment_type)
        .iter()
        .filter(|rule| {
            failures.iter().any(|f| {
                f.sensor == rule.sensor
                    && match rule.cutoff {
                        Cutoff::Below(limit) => f.value < limit,
                        Cutoff::Above(limit) => f.value > limit,
                    }
            })
        })
        .map(|rule| rule.points)
        .sum()
}

pub fn score_urgency(failures: &[DetectedFailure], equipment_type: EquipmentType) -> MaintenanceUrgency {
    if failures.is_empty() {
        return MaintenanceUrgency::Low;
    }

    match risk_score(failures, equipment_type) {
        score if score >= 3 => MaintenanceUrgency::Critical,
        2 => MaintenanceUrgency::High,
        _ => MaintenanceUrgency::Medium,
    }
}
