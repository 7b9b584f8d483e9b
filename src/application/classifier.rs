// Failure classifier - first-match priority table per equipment type
use crate::domain::diagnosis::{DetectedFailure, IssueKind};
use crate::domain::equipment::EquipmentType;

pub const NO_FAILURE: &str = "no_failure";
pub const MULTIPLE_ISSUES: &str = "multiple_issues";
pub const GENERAL_FAILURE: &str = "general_failure";

/// One entry in a priority table: a detected (sensor, issue) pair maps to a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationRule {
    pub sensor: &'static str,
    pub issue: IssueKind,
    pub failure_type: &'static str,
}

const fn rule(sensor: &'static str, issue: IssueKind, failure_type: &'static str) -> ClassificationRule {
    ClassificationRule {
        sensor,
        issue,
        failure_type,
    }
}

const SOLAR_WATER_PUMP_RULES: &[ClassificationRule] = &[
    rule("vibration_mms", IssueKind::High, "bearing_failure"),
    rule("flow_rate_lmin", IssueKind::Low, "impeller_clogged"),
    rule("bearing_temperature_c", IssueKind::High, "motor_overheating"),
    rule("pressure_bar", IssueKind::High, "overpressure"),
    rule("pressure_bar", IssueKind::Low, "underpressure"),
];

const IRRIGATION_SYSTEM_RULES: &[ClassificationRule] = &[
    rule("pressure_bar", IssueKind::Low, "pressure_loss"),
    rule("filter_differential_bar", IssueKind::High, "filter_clogged"),
    rule("flow_rate_lmin", IssueKind::Low, "flow_restriction"),
    rule("valve_response_ms", IssueKind::High, "valve_malfunction"),
    rule("pressure_bar", IssueKind::High, "overpressure"),
    rule("soil_moisture_percent", IssueKind::Low, "under_irrigation"),
    rule("soil_moisture_percent", IssueKind::High, "over_irrigation"),
];

const TRACTOR_ENGINE_RULES: &[ClassificationRule] = &[
    rule("oil_pressure_bar", IssueKind::Low, "oil_pressure_loss"),
    rule("coolant_temperature_c", IssueKind::High, "cooling_system_failure"),
    rule("oil_temperature_c", IssueKind::High, "engine_overheating"),
    rule("vibration_mms", IssueKind::High, "mechanical_wear"),
    rule("engine_rpm", IssueKind::High, "overspeed"),
    rule("engine_load_percent", IssueKind::High, "engine_overload"),
];

/// Priority-ordered rules for an equipment type; earlier rules win ties.
pub fn classification_rules(equipment_type: EquipmentType) -> &'static [ClassificationRule] {
    match equipment_type {
        EquipmentType::SolarWaterPump => SOLAR_WATER_PUMP_RULES,
        EquipmentType::IrrigationSystem => IRRIGATION_SYSTEM_RULES,
        EquipmentType::TractorEngine => TRACTOR_ENGINE_RULES,
    }
}

/// Resolve detected failures to one failure-type label.
///
/// Precedence comes from rule position, not from how far a reading is out of range.
pub fn classify(failures: &[DetectedFailure], equipment_type: EquipmentType) -> &'static str {
    if failures.is_empty() {
        return NO_FAILURE;
    }

    let matched = classification_rules(equipment_type).iter().find(|rule| {
        failures
            .iter()
            .any(|f| f.sensor == rule.sensor && f.issue == rule.issue)
    });

    match matched {
        Some(rule) => rule.failure_type,
        None if failures.len() > 1 => MULTIPLE_ISSUES,
        None => GENERAL_FAILURE,
    }
}
