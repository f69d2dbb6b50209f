//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dashboard presentation settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Snapshot source settings.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Academic year stamped on seeded and loaded snapshots, shown on the dashboard.
    #[serde(default = "default_academic_year")]
    pub academic_year: String,
    /// Utilization percentage at which an entity stops being healthy (exclusive).
    #[serde(default = "default_health_threshold")]
    pub health_threshold_percent: u32,
    /// Currency all budget figures are denominated in.
    #[serde(default)]
    pub currency: Currency,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            academic_year: default_academic_year(),
            health_threshold_percent: default_health_threshold(),
            currency: Currency::default(),
        }
    }
}

fn default_academic_year() -> String {
    "2025-26".to_string()
}

fn default_health_threshold() -> u32 {
    70
}

/// Snapshot configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotConfig {
    /// Path to a JSON snapshot exported from the persistence service.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from config files and `COSA__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COSA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = temp_env::with_vars_unset(
            [
                "COSA__DASHBOARD__ACADEMIC_YEAR",
                "COSA__DASHBOARD__HEALTH_THRESHOLD_PERCENT",
                "COSA__DASHBOARD__CURRENCY",
                "COSA__SNAPSHOT__PATH",
            ],
            AppConfig::load,
        )
        .unwrap();

        assert_eq!(config.dashboard.academic_year, "2025-26");
        assert_eq!(config.dashboard.health_threshold_percent, 70);
        assert_eq!(config.dashboard.currency, Currency::Inr);
        assert!(config.snapshot.path.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let config = temp_env::with_vars(
            [
                ("COSA__DASHBOARD__ACADEMIC_YEAR", Some("2026-27")),
                ("COSA__DASHBOARD__HEALTH_THRESHOLD_PERCENT", Some("80")),
                ("COSA__SNAPSHOT__PATH", Some("/tmp/cosa.json")),
            ],
            AppConfig::load,
        )
        .unwrap();

        assert_eq!(config.dashboard.academic_year, "2026-27");
        assert_eq!(config.dashboard.health_threshold_percent, 80);
        assert_eq!(
            config.snapshot.path.as_deref(),
            Some(std::path::Path::new("/tmp/cosa.json"))
        );
    }
}
