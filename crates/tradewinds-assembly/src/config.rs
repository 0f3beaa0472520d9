//! tradewinds.toml configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use tradewinds_core::CronSpec;

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Every recognized stack option, with a documented default.
///
/// Defaults mirror the production deployment; a config file only needs
/// to list the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Provider region, default `eu-central-1`.
    pub region: String,
    /// Account id used in rendered ARNs. The default placeholder is
    /// substituted by the provisioning engine at deploy time.
    pub account: String,
    /// Name of the analytics table, default `StockAnalytics`.
    pub stock_analytics_table: String,
    /// Name of the portfolio table, default `Portfolio`.
    pub portfolio_table: String,
    /// Build context of the shared agent container image, default `src/`.
    pub container_build_context: String,
    /// Build context of the search function image, default `src/lambda/`.
    pub lambda_build_context: String,
    /// Foundation model the agent role may invoke.
    pub foundation_model: String,
    /// UTC trigger for the analysis workload, default Monday 03:30.
    pub analyst_schedule: CronSpec,
    /// UTC trigger for the decision workload, default Monday 13:30.
    /// Offset after the analyst run by clock time only; nothing enforces
    /// completion ordering between the two tasks.
    pub manager_schedule: CronSpec,
}

impl Default for StackConfig {
    fn default() -> Self {
        StackConfig {
            region: "eu-central-1".to_string(),
            account: "ACCOUNT_ID".to_string(),
            stock_analytics_table: "StockAnalytics".to_string(),
            portfolio_table: "Portfolio".to_string(),
            container_build_context: "src/".to_string(),
            lambda_build_context: "src/lambda/".to_string(),
            foundation_model: "anthropic.claude-v2:1".to_string(),
            analyst_schedule: CronSpec::weekly("MON", 3, 30),
            manager_schedule: CronSpec::weekly("MON", 13, 30),
        }
    }
}

impl StackConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: StackConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = StackConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed: StackConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let toml_str = r#"
region = "us-east-1"

[manager_schedule]
minute = "0"
hour = "14"
weekday = "MON-FRI"
month = "*"
"#;
        let config: StackConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.stock_analytics_table, "StockAnalytics");
        assert_eq!(config.manager_schedule.weekday, "MON-FRI");
        assert_eq!(config.analyst_schedule, CronSpec::weekly("MON", 3, 30));
    }
}
