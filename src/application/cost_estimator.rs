// Cost estimator - canned repair estimates per equipment type and failure type
use crate::domain::diagnosis::CostEstimate;
use crate::domain::equipment::EquipmentType;

/// Reference labor rate. Table totals are quoted figures and are never
/// recomputed from it.
pub const NOMINAL_HOURLY_RATE: f64 = 75.0;

struct CostEntry {
    failure_type: &'static str,
    labor_hours: f64,
    parts_cost: f64,
    total_cost: f64,
    description: &'static str,
}

const fn entry(
    failure_type: &'static str,
    labor_hours: f64,
    parts_cost: f64,
    total_cost: f64,
    description: &'static str,
) -> CostEntry {
    CostEntry {
        failure_type,
        labor_hours,
        parts_cost,
        total_cost,
        description,
    }
}

static FALLBACK: CostEntry = entry("", 4.0, 200.0, 500.0, "General inspection and repair");

const SOLAR_WATER_PUMP_COSTS: &[CostEntry] = &[
    entry("bearing_failure", 4.0, 180.0, 480.0, "Replace pump bearings and realign shaft"),
    entry("impeller_clogged", 2.0, 40.0, 190.0, "Clear intake and clean impeller"),
    entry("motor_overheating", 6.0, 350.0, 800.0, "Inspect motor windings and cooling, replace thermal protection"),
    entry("overpressure", 3.0, 120.0, 345.0, "Check discharge valves and relief valve"),
    entry("underpressure", 3.0, 90.0, 315.0, "Inspect seals and suction line for leaks"),
];

const IRRIGATION_SYSTEM_COSTS: &[CostEntry] = &[
    entry("pressure_loss", 5.0, 220.0, 595.0, "Locate and repair main line leak"),
    entry("filter_clogged", 1.5, 60.0, 170.0, "Flush and replace filter cartridges"),
    entry("flow_restriction", 3.0, 80.0, 305.0, "Clear blocked laterals and emitters"),
    entry("valve_malfunction", 2.5, 150.0, 340.0, "Replace solenoid valve actuator"),
    entry("overpressure", 2.0, 130.0, 280.0, "Service pressure regulator"),
    entry("under_irrigation", 1.0, 0.0, 75.0, "Recalibrate irrigation schedule"),
    entry("over_irrigation", 1.0, 0.0, 75.0, "Recalibrate irrigation schedule and moisture sensors"),
];

const TRACTOR_ENGINE_COSTS: &[CostEntry] = &[
    entry("oil_pressure_loss", 6.0, 420.0, 870.0, "Replace oil pump and inspect bearings"),
    entry("cooling_system_failure", 5.0, 380.0, 755.0, "Replace water pump and thermostat, flush coolant"),
    entry("engine_overheating", 4.0, 160.0, 460.0, "Change oil, clean radiator fins, check fan belt"),
    entry("mechanical_wear", 10.0, 1200.0, 1950.0, "Inspect engine mounts, crankshaft and timing gear"),
    entry("overspeed", 3.0, 250.0, 475.0, "Service governor and throttle linkage"),
    entry("engine_overload", 2.0, 50.0, 200.0, "Check hitch load and transmission settings"),
];

fn cost_table(equipment_type: EquipmentType) -> &'static [CostEntry] {
    match equipment_type {
        EquipmentType::SolarWaterPump => SOLAR_WATER_PUMP_COSTS,
        EquipmentType::IrrigationSystem => IRRIGATION_SYSTEM_COSTS,
        EquipmentType::TractorEngine => TRACTOR_ENGINE_COSTS,
    }
}

pub fn estimate_cost(equipment_type: EquipmentType, failure_type: &str) -> CostEstimate {
    let entry = cost_table(equipment_type)
        .iter()
        .find(|e| e.failure_type == failure_type)
        .unwrap_or(&FALLBACK);

    CostEstimate {
        labor_hours: entry.labor_hours,
        parts_cost: entry.parts_cost,
        total_cost: entry.total_cost,
        description: entry.description.to_string(),
    }
}

/// Labor cost at the nominal rate, for reporting alongside the quoted total.
pub fn labor_cost_at_nominal_rate(estimate: &CostEstimate) -> f64 {
    estimate.labor_hours * NOMINAL_HOURLY_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_failure_type() {
        let estimate = estimate_cost(EquipmentType::SolarWaterPump, "bearing_failure");
        assert_eq!(estimate.labor_hours, 4.0);
        assert_eq!(estimate.total_cost, 480.0);
    }

    #[test]
    fn test_unknown_labels_use_fallback() {
        for label in ["no_failure", "multiple_issues", "general_failure", "pressure_loss"] {
            let estimate = estimate_cost(EquipmentType::TractorEngine, label);
            assert_eq!(estimate.total_cost, 500.0, "{}", label);
            assert_eq!(estimate.description, "General inspection and repair");
        }
    }

    #[test]
    fn test_totals_are_not_recomputed() {
        let estimate = estimate_cost(EquipmentType::IrrigationSystem, "valve_malfunction");
        assert_eq!(labor_cost_at_nominal_rate(&estimate), 187.5);
        assert_eq!(estimate.total_cost, 340.0);
        assert_ne!(labor_cost_at_nominal_rate(&estimate) + estimate.parts_cost, estimate.total_cost);
    }
}
