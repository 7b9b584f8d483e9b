// Prognosis composer - time-to-failure window per equipment type and urgency
use crate::domain::diagnosis::MaintenanceUrgency;
use crate::domain::equipment::EquipmentType;

pub fn time_to_failure(equipment_type: EquipmentType, urgency: MaintenanceUrgency) -> &'static str {
    use EquipmentType::*;
    use MaintenanceUrgency::*;

    match (equipment_type, urgency) {
        (SolarWaterPump, Critical) => "1-2 days",
        (SolarWaterPump, High) => "3-7 days",
        (SolarWaterPump, Medium) => "2-4 weeks",
        (SolarWaterPump, Low) => "60+ days",
        (IrrigationSystem, Critical) => "1-3 days",
        (IrrigationSystem, High) => "5-10 days",
        (IrrigationSystem, Medium) => "2-6 weeks",
        (IrrigationSystem, Low) => "90+ days",
        (TractorEngine, Critical) => "1-2 days",
        (TractorEngine, High) => "3-5 days",
        (TractorEngine, Medium) => "1-3 weeks",
        (TractorEngine, Low) => "45+ days",
    }
}

/// Lower bound of a window such as "3-7 days" or "60+ days", in hours.
pub fn window_lower_bound_hours(window: &str) -> Option<f64> {
    let (range, unit) = window.split_once(' ')?;
    let lower = range
        .split(['-', '+'])
        .next()
        .and_then(|n| n.parse::<f64>().ok())?;
    let hours_per_unit = match unit {
        "day" | "days" => 24.0,
        "week" | "weeks" => 168.0,
        _ => return None,
    };
    Some(lower * hours_per_unit)
}
