// Advisory service - maintenance recommendations, impact, resources and schedule for a prediction
use crate::application::cost_estimator::labor_cost_at_nominal_rate;
use crate::application::prognosis::window_lower_bound_hours;
use crate::domain::diagnosis::{MaintenanceUrgency, PredictionResult};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

// Used when a failure window cannot be read as hours
const DEFAULT_WINDOW_HOURS: f64 = 168.0;
const DOWNTIME_SHARE_OF_WINDOW: f64 = 0.2;
const PRODUCTION_UNITS_PER_HOUR: f64 = 15.0;
const REVENUE_PER_UNIT: f64 = 35.0;
const LATEST_START_SHARE_OF_WINDOW: f64 = 0.9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactAnalysis {
    pub quoted_cost: f64,
    pub urgency_multiplier: f64,
    pub adjusted_cost: f64,
    pub labor_cost_at_nominal_rate: f64,
    pub downtime_hours: f64,
    pub production_loss_units: u32,
    pub revenue_impact: f64,
    pub total_financial_impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourcePlan {
    pub technicians: u32,
    pub hours: u32,
    pub parts_budget: f64,
    pub required_skills: Vec<&'static str>,
    pub tools_needed: Vec<&'static str>,
}

/// When to start work, relative to the moment the advisory was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceSchedule {
    pub recommended_start: DateTime<Utc>,
    pub latest_start: DateTime<Utc>,
    pub estimated_duration_hours: u32,
    pub buffer_hours: f64,
    pub urgency: MaintenanceUrgency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceAdvisory {
    pub recommendations: Vec<String>,
    pub impact: ImpactAnalysis,
    pub resources: ResourcePlan,
    pub schedule: MaintenanceSchedule,
}

fn urgency_multiplier(urgency: MaintenanceUrgency) -> f64 {
    match urgency {
        MaintenanceUrgency::Low => 0.8,
        MaintenanceUrgency::Medium => 1.0,
        MaintenanceUrgency::High => 1.5,
        MaintenanceUrgency::Critical => 2.5,
    }
}

/// Share of the failure window held back as a safety margin
fn safety_buffer(urgency: MaintenanceUrgency) -> f64 {
    match urgency {
        MaintenanceUrgency::Low => 0.5,
        MaintenanceUrgency::Medium => 0.6,
        MaintenanceUrgency::High => 0.7,
        MaintenanceUrgency::Critical => 0.8,
    }
}

const BASE_SKILL: &str = "mechanical_maintenance";
const TOOLS_NEEDED: [&str; 2] = ["Standard toolkit", "Diagnostic equipment"];

// Keyword in the failure-type label -> extra skill
const FAILURE_TYPE_SKILLS: &[(&str, &str)] = &[
    ("motor", "electrical_systems"),
    ("electrical", "electrical_systems"),
    ("hydraulic", "hydraulics"),
    ("pump", "hydraulics"),
    ("impeller", "hydraulics"),
    ("pressure", "hydraulics"),
    ("flow", "hydraulics"),
];

fn required_skills(failure_type: &str) -> Vec<&'static str> {
    let mut skills = vec![BASE_SKILL];
    for (keyword, skill) in FAILURE_TYPE_SKILLS {
        if failure_type.contains(*keyword) && !skills.contains(skill) {
            skills.push(*skill);
        }
    }
    skills
}

fn resource_plan(urgency: MaintenanceUrgency, failure_type: &str) -> ResourcePlan {
    let (technicians, hours, parts_budget) = match urgency {
        MaintenanceUrgency::Low => (1, 2, 500.0),
        MaintenanceUrgency::Medium => (1, 4, 1500.0),
        MaintenanceUrgency::High => (2, 6, 3000.0),
        MaintenanceUrgency::Critical => (3, 8, 5000.0),
    };
    ResourcePlan {
        technicians,
        hours,
        parts_budget,
        required_skills: required_skills(failure_type),
        tools_needed: TOOLS_NEEDED.to_vec(),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn after_hours(now: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    now + Duration::seconds((hours * 3600.0).round() as i64)
}

fn impact_analysis(prediction: &PredictionResult, window_hours: f64) -> ImpactAnalysis {
    let multiplier = urgency_multiplier(prediction.maintenance_urgency);
    let (quoted_cost, labor_cost) = prediction
        .cost_estimate
        .as_ref()
        .map(|c| (c.total_cost, labor_cost_at_nominal_rate(c)))
        .unwrap_or((0.0, 0.0));
    let adjusted_cost = round_to(quoted_cost * multiplier, 2);

    // Healthy equipment has no expected outage
    let downtime_hours = if prediction.is_healthy() {
        0.0
    } else {
        round_to(window_hours * DOWNTIME_SHARE_OF_WINDOW, 1)
    };
    let production_loss_units = (downtime_hours * PRODUCTION_UNITS_PER_HOUR).round() as u32;
    let revenue_impact = round_to(f64::from(production_loss_units) * REVENUE_PER_UNIT, 2);

    ImpactAnalysis {
        quoted_cost,
        urgency_multiplier: multiplier,
        adjusted_cost,
        labor_cost_at_nominal_rate: labor_cost,
        downtime_hours,
        production_loss_units,
        revenue_impact,
        total_financial_impact: round_to(adjusted_cost + revenue_impact, 2),
    }
}

fn maintenance_schedule(
    urgency: MaintenanceUrgency,
    window_hours: f64,
    estimated_duration_hours: u32,
    now: DateTime<Utc>,
) -> MaintenanceSchedule {
    let buffer = safety_buffer(urgency);
    MaintenanceSchedule {
        recommended_start: after_hours(now, window_hours * (1.0 - buffer)),
        latest_start: after_hours(now, window_hours * LATEST_START_SHARE_OF_WINDOW),
        estimated_duration_hours,
        buffer_hours: round_to(window_hours * buffer, 1),
        urgency,
    }
}

// Keyword -> follow-up actions, matched against the failure-type label
const FAILURE_TYPE_ACTIONS: &[(&str, &[&str])] = &[
    ("bearing", &["Inspect bearing housing and lubrication system", "Prepare bearing replacement kit"]),
    ("overheating", &["Check windings and electrical connections", "Verify cooling system functionality"]),
    ("impeller", &["Inspect impeller and seals", "Check intake screen for debris"]),
    ("filter", &["Flush filters and check differential pressure after cleaning"]),
    ("flow", &["Walk the line for blocked emitters or kinked laterals"]),
    ("pressure", &["Check fluid levels, seals and pressure regulator"]),
    ("oil", &["Check oil level and grade, inspect oil pump"]),
    ("cooling", &["Inspect radiator, hoses and water pump"]),
    ("valve", &["Test valve solenoids and controller wiring"]),
    ("wear", &["Schedule a full mechanical inspection"]),
];

pub fn recommendations(prediction: &PredictionResult) -> Vec<String> {
    let mut items: Vec<String> = match prediction.maintenance_urgency {
        MaintenanceUrgency::Critical | MaintenanceUrgency::High => vec![
            "URGENT: Schedule immediate maintenance within 24-48 hours".to_string(),
            "Order critical spare parts with expedited delivery".to_string(),
            "Notify operations team to prepare for downtime".to_string(),
        ],
        MaintenanceUrgency::Medium => vec![
            format!("Schedule maintenance within {}", prediction.time_to_failure),
            "Order standard replacement parts".to_string(),
        ],
        MaintenanceUrgency::Low => {
            vec!["Monitor equipment and keep to the routine maintenance schedule".to_string()]
        }
    };

    for (keyword, actions) in FAILURE_TYPE_ACTIONS {
        if prediction.failure_type.contains(*keyword) {
            items.extend(actions.iter().map(|a| a.to_string()));
        }
    }

    items
}

/// Full advisory for a prediction. Schedule times are offsets from `now`.
pub fn advise(prediction: &PredictionResult, now: DateTime<Utc>) -> MaintenanceAdvisory {
    let urgency = prediction.maintenance_urgency;
    let window_hours = window_lower_bound_hours(&prediction.time_to_failure).unwrap_or_else(|| {
        tracing::warn!(
            "Unreadable failure window '{}', assuming {} hours",
            prediction.time_to_failure,
            DEFAULT_WINDOW_HOURS
        );
        DEFAULT_WINDOW_HOURS
    });
    let resources = resource_plan(urgency, &prediction.failure_type);
    let schedule = maintenance_schedule(urgency, window_hours, resources.hours, now);

    MaintenanceAdvisory {
        recommendations: recommendations(prediction),
        impact: impact_analysis(prediction, window_hours),
        resources,
        schedule,
    }
}
