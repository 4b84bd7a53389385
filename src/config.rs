// ⚙️ Ledger Configuration - defaults for new accounts
// Loaded from JSON when ACCOUNT_LEDGER_CONFIG is set, otherwise built in

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "ACCOUNT_LEDGER_CONFIG";

pub const DEFAULT_INTEREST_RATE: f64 = 0.02;
pub const DEFAULT_OVERDRAFT_LIMIT: f64 = 500.0;

fn default_interest_rate() -> f64 {
    DEFAULT_INTEREST_RATE
}

fn default_overdraft_limit() -> f64 {
    DEFAULT_OVERDRAFT_LIMIT
}

// ============================================================================
// LEDGER CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Fraction applied by `SavingsAccount::apply_interest` (0.02 = 2%)
    #[serde(default = "default_interest_rate")]
    pub default_interest_rate: f64,

    /// How far below zero a current account may go
    #[serde(default = "default_overdraft_limit")]
    pub default_overdraft_limit: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            default_interest_rate: DEFAULT_INTEREST_RATE,
            default_overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
        }
    }
}

impl LedgerConfig {
    /// Load config from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: LedgerConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `ACCOUNT_LEDGER_CONFIG`, or fall back to defaults
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                tracing::info!(path = ?path, "Loading ledger config");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let rate = self.default_interest_rate;
        if !rate.is_finite() || rate < 0.0 {
            bail!("default_interest_rate must be a non-negative number, got {}", rate);
        }

        let limit = self.default_overdraft_limit;
        if !limit.is_finite() || limit < 0.0 {
            bail!("default_overdraft_limit must be a non-negative number, got {}", limit);
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = LedgerConfig::default();
        assert_eq!(config.default_interest_rate, 0.02);
        assert_eq!(config.default_overdraft_limit, 500.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"{ "default_interest_rate": 0.05, "default_overdraft_limit": 1000.0 }"#,
        );

        let config = LedgerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_interest_rate, 0.05);
        assert_eq!(config.default_overdraft_limit, 1000.0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = write_config(r#"{ "default_overdraft_limit": 250.0 }"#);

        let config = LedgerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_interest_rate, DEFAULT_INTEREST_RATE);
        assert_eq!(config.default_overdraft_limit, 250.0);
    }

    #[test]
    fn test_missing_file_fails() {
        let result = LedgerConfig::from_file("/nonexistent/ledger-config.json");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_json_fails() {
        let file = write_config("{ not json");
        let result = LedgerConfig::from_file(file.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config JSON"));
    }

    #[test]
    fn test_negative_limit_rejected() {
        let file = write_config(r#"{ "default_overdraft_limit": -10.0 }"#);
        assert!(LedgerConfig::from_file(file.path()).is_err());
    }

    // One test owns the env var so parallel tests never race on it
    #[test]
    fn test_from_env() {
        let file = write_config(r#"{ "default_interest_rate": 0.07 }"#);

        env::set_var(CONFIG_ENV_VAR, file.path());
        let config = LedgerConfig::from_env().unwrap();
        assert_eq!(config.default_interest_rate, 0.07);
        assert_eq!(config.default_overdraft_limit, DEFAULT_OVERDRAFT_LIMIT);

        env::set_var(CONFIG_ENV_VAR, "/nonexistent/ledger-config.json");
        assert!(LedgerConfig::from_env().is_err());

        env::remove_var(CONFIG_ENV_VAR);
        let config = LedgerConfig::from_env().unwrap();
        assert_eq!(config, LedgerConfig::default());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let config = LedgerConfig {
            default_interest_rate: -0.01,
            ..LedgerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
