use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub history: HistorySettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HistorySettings {
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

impl HistorySettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_ttl_seconds() -> u64 {
    300
}

/// Load `config/service.*` if present, then apply `DIAGNOSTICS__*` overrides
/// (e.g. `DIAGNOSTICS__SERVER__BIND_ADDR`).
pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    load_from("config/service")
}

fn load_from(path: &str) -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("DIAGNOSTICS").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_from("config/does-not-exist").unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.history.ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[history]\nttl_seconds = 30\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: ServiceConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.history.ttl_seconds, 30);
        assert_eq!(config.server, ServerSettings::default());
    }
}
