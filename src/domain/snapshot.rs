// Sensor snapshot - one point-in-time set of readings
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Readings keyed by sensor key. Partial snapshots are valid; absent sensors are
/// simply not evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorSnapshot {
    readings: BTreeMap<String, f64>,
}

impl SensorSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: f64) {
        self.readings.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.readings.get(key).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.readings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl FromIterator<(String, f64)> for SensorSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_plain_map() {
        let snapshot: SensorSnapshot =
            serde_json::from_str(r#"{"pressure_bar": 1.0, "flow_rate_lmin": 120}"#).unwrap();
        assert_eq!(snapshot.get("pressure_bar"), Some(1.0));
        assert_eq!(snapshot.get("flow_rate_lmin"), Some(120.0));
        assert_eq!(snapshot.get("soil_moisture_percent"), None);
    }
}
