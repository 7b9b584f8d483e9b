// Impact narrator - human-readable summary of a diagnosis
use crate::domain::diagnosis::{DetectedFailure, HealthStatus, IssueKind};
use crate::domain::equipment::EquipmentType;

pub fn narrate(failures: &[DetectedFailure], equipment_type: EquipmentType, status: HealthStatus) -> String {
    let name = equipment_type.display_name();

    if status == HealthStatus::Healthy {
        return format!(
            "{} is operating within normal parameters. No maintenance required.",
            name
        );
    }

    match failures {
        [] => format!("{} requires attention. Run a manual inspection.", name),
        [only] => format!("{}. {}", only.message, status_suffix(status)),
        _ => {
            let high: Vec<String> = failures
                .iter()
                .filter(|f| f.issue == IssueKind::High)
                .take(2)
                .map(|f| title_case(&f.sensor))
                .collect();

            if high.is_empty() {
                format!(
                    "{} issues detected on {}. Schedule a maintenance inspection.",
                    failures.len(),
                    name
                )
            } else {
                format!(
                    "EMERGENCY: {} issues detected on {}. {} above safe limits. Stop operation and inspect immediately.",
                    failures.len(),
                    name,
                    high.join(" and ")
                )
            }
        }
    }
}

fn status_suffix(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Failure => "Immediate maintenance required.",
        HealthStatus::Warning | HealthStatus::Healthy => "Schedule maintenance soon.",
    }
}

/// "bearing_temperature_c" -> "Bearing Temperature C"
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
