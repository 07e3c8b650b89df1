//! Configuration for the library catalog
//!
//! Sources, lowest priority first: built-in defaults, an optional TOML file,
//! then `LIBRARY__*` environment variables (e.g. `LIBRARY__LOANS__FINE_PER_DAY=50`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::domain::LoanPolicy;
use crate::domain::loan::{
    FINE_PER_DAY, LOAN_PERIOD_DAYS, MAX_ACTIVE_LOANS, MAX_FINE_PER_DAY, MAX_LOAN_PERIOD_DAYS,
};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "library-catalog";

const ENV_PREFIX: &str = "LIBRARY";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoansConfig {
    pub max_active_loans: usize,
    pub loan_period_days: i64,
    pub fine_per_day: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub loans: LoansConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the process environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`AppConfig::load`], but reads environment overrides from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .set_default("loans.max_active_loans", MAX_ACTIVE_LOANS as i64)?
            .set_default("loans.loan_period_days", LOAN_PERIOD_DAYS)?
            .set_default("loans.fine_per_day", FINE_PER_DAY as i64)?
            .set_default("logging.level", "info")?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.loans.max_active_loans == 0 {
            return Err(ConfigError::Message(
                "loans.max_active_loans must be at least 1".into(),
            ));
        }
        if !(1..=MAX_LOAN_PERIOD_DAYS).contains(&self.loans.loan_period_days) {
            return Err(ConfigError::Message(format!(
                "loans.loan_period_days must be between 1 and {MAX_LOAN_PERIOD_DAYS}"
            )));
        }
        if self.loans.fine_per_day > MAX_FINE_PER_DAY {
            return Err(ConfigError::Message(format!(
                "loans.fine_per_day must be at most {MAX_FINE_PER_DAY}"
            )));
        }
        Ok(())
    }

    pub fn loan_policy(&self) -> LoanPolicy {
        LoanPolicy {
            max_active_loans: self.loans.max_active_loans,
            loan_period_days: self.loans.loan_period_days,
            fine_per_day: self.loans.fine_per_day,
        }
    }
}
