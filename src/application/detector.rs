// Failure detector - compares a snapshot against profile thresholds
use crate::domain::diagnosis::{DetectedFailure, IssueKind};
use crate::domain::equipment::{EquipmentProfile, SensorDescriptor, ThresholdRule};
use crate::domain::snapshot::SensorSnapshot;

/// Out-of-range readings in the profile's sensor order.
///
/// A sensor yields at most one failure: the low bound is checked first and a
/// breach there skips the high check. Sensors missing from the snapshot or
/// without a threshold rule are not evaluated.
pub fn detect_failures(profile: &EquipmentProfile, snapshot: &SensorSnapshot) -> Vec<DetectedFailure> {
    if snapshot.is_empty() {
        tracing::debug!("Empty snapshot for {}", profile.equipment_type);
        return Vec::new();
    }
    tracing::debug!(
        "Evaluating {} readings against {} thresholds",
        snapshot.len(),
        profile.equipment_type
    );

    for key in snapshot.keys() {
        if profile.sensor(key).is_none() {
            tracing::debug!(
                "Ignoring reading {} - not a {} sensor",
                key,
                profile.equipment_type
            );
        }
    }

    profile
        .sensors
        .iter()
        .filter_map(|sensor| {
            let value = snapshot.get(sensor.key)?;
            let rule = profile.threshold(sensor.key)?;
            check_reading(sensor, rule, value)
        })
        .collect()
}

fn check_reading(sensor: &SensorDescriptor, rule: &ThresholdRule, value: f64) -> Option<DetectedFailure> {
    let issue = match (rule.low, rule.high) {
        (Some(low), _) if value < low => IssueKind::Low,
        (_, Some(high)) if value > high => IssueKind::High,
        _ => return None,
    };

    let normal_range = rule.normal_range(sensor.unit);
    let direction = match issue {
        IssueKind::Low => "too low",
        IssueKind::High => "too high",
    };
    let message = format!(
        "{} {}: {} {} (normal: {})",
        sensor.label, direction, value, sensor.unit, normal_range
    );

    Some(DetectedFailure {
        sensor: sensor.key.to_string(),
        label: sensor.label.to_string(),
        value,
        unit: sensor.unit.to_string(),
        issue,
        normal_range,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::EquipmentRegistry;
    use crate::domain::equipment::EquipmentType;
    use std::collections::BTreeMap;

    fn pump() -> EquipmentProfile {
        EquipmentRegistry::builtin()
            .unwrap()
            .profile(EquipmentType::SolarWaterPump)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_in_range_snapshot_has_no_failures() {
        let profile = pump();
        assert!(detect_failures(&profile, &profile.default_snapshot()).is_empty());
    }

    #[test]
    fn test_failures_follow_profile_order() {
        let snapshot = SensorSnapshot::new()
            .with("bearing_temperature_c", 100.0)
            .with("flow_rate_lmin", 20.0);
        let failures = detect_failures(&pump(), &snapshot);

        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].sensor, "flow_rate_lmin");
        assert_eq!(failures[0].issue, IssueKind::Low);
        assert_eq!(failures[0].message, "Flow Rate too low: 20 L/min (normal: >= 50 L/min)");
        assert_eq!(failures[1].sensor, "bearing_temperature_c");
        assert_eq!(failures[1].issue, IssueKind::High);
        assert_eq!(failures[1].normal_range, "<= 80 °C");
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let snapshot = SensorSnapshot::new()
            .with("pressure_bar", 6.0)
            .with("flow_rate_lmin", 50.0);
        assert!(detect_failures(&pump(), &snapshot).is_empty());
    }

    #[test]
    fn test_unruled_and_unknown_sensors_are_skipped() {
        let snapshot = SensorSnapshot::new()
            .with("solar_irradiance_wm2", 5000.0)
            .with("not_a_sensor", -1.0);
        assert!(detect_failures(&pump(), &snapshot).is_empty());
    }

    #[test]
    fn test_low_check_short_circuits_high() {
        let sensor = SensorDescriptor {
            key: "x",
            label: "X",
            unit: "u",
            min: 0.0,
            max: 10.0,
            default_value: 1.0,
            step: None,
        };
        let rule = ThresholdRule::between(2.0, 2.0);
        let failure = check_reading(&sensor, &rule, 1.0).unwrap();
        assert_eq!(failure.issue, IssueKind::Low);

        let profile = EquipmentProfile::new(
            EquipmentType::TractorEngine,
            vec![sensor],
            BTreeMap::from([("x", rule)]),
        )
        .unwrap();
        let failures = detect_failures(&profile, &SensorSnapshot::new().with("x", 3.0));
        assert_eq!(failures[0].issue, IssueKind::High);
    }
}
