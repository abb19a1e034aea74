//! Site configuration
//!
//! Timing knobs for the debounced strength display and the simulated
//! system check.

use std::time::Duration;
use thiserror::Error;

pub const ENV_DEBOUNCE_MS: &str = "CYBERAWARE_DEBOUNCE_MS";
pub const ENV_TICK_MS: &str = "CYBERAWARE_TICK_MS";
pub const ENV_SETTLE_MS: &str = "CYBERAWARE_SETTLE_MS";
pub const ENV_MAX_INCREMENT: &str = "CYBERAWARE_MAX_INCREMENT";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("Progress increment must be a positive number, got {0}")]
    ZeroIncrement(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Delay before a keystroke's password is evaluated.
    pub debounce: Duration,
    /// Interval between progress bar ticks.
    pub tick_interval: Duration,
    /// Pause between a full progress bar and the report.
    pub settle_delay: Duration,
    /// Upper bound (exclusive) of a single progress increment, in percent.
    pub max_increment: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            tick_interval: Duration::from_millis(200),
            settle_delay: Duration::from_millis(500),
            max_increment: 15.0,
        }
    }
}

impl SiteConfig {
    /// Builds the configuration from environment variables.
    ///
    /// Unset variables keep their default.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed, or if the
    /// progress increment is not positive.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            debounce: env_millis(ENV_DEBOUNCE_MS)?.unwrap_or(defaults.debounce),
            tick_interval: env_millis(ENV_TICK_MS)?.unwrap_or(defaults.tick_interval),
            settle_delay: env_millis(ENV_SETTLE_MS)?.unwrap_or(defaults.settle_delay),
            max_increment: env_parse::<f64>(ENV_MAX_INCREMENT)?.unwrap_or(defaults.max_increment),
        };
        config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::info!("Site configuration loaded: {:?}", config);

        Ok(config)
    }

    /// Rejects increments that would never fill the progress bar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_increment(self.max_increment)
    }
}

/// A progress increment must be positive and finite.
pub(crate) fn check_increment(max_increment: f64) -> Result<(), ConfigError> {
    if !(max_increment.is_finite() && max_increment > 0.0) {
        return Err(ConfigError::ZeroIncrement(max_increment));
    }
    Ok(())
}

fn env_parse<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(None),
    }
}

fn env_millis(var: &'static str) -> Result<Option<Duration>, ConfigError> {
    Ok(env_parse::<u64>(var)?.map(Duration::from_millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn clear_all() {
        for var in [ENV_DEBOUNCE_MS, ENV_TICK_MS, ENV_SETTLE_MS, ENV_MAX_INCREMENT] {
            remove_env(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_all();
        assert_eq!(SiteConfig::from_env(), Ok(SiteConfig::default()));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_all();
        set_env(ENV_TICK_MS, "50");
        set_env(ENV_MAX_INCREMENT, "40.5");

        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!(config.max_increment, 40.5);
        assert_eq!(config.settle_delay, Duration::from_millis(500));

        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_number() {
        clear_all();
        set_env(ENV_SETTLE_MS, "soon");

        let result = SiteConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber { var: ENV_SETTLE_MS, .. })
        ));

        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_increment() {
        clear_all();
        set_env(ENV_MAX_INCREMENT, "0");

        assert_eq!(SiteConfig::from_env(), Err(ConfigError::ZeroIncrement(0.0)));

        clear_all();
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = SiteConfig { max_increment: f64::NAN, ..SiteConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_and_infinite() {
        for bad in [-1.0, f64::INFINITY] {
            let config = SiteConfig { max_increment: bad, ..SiteConfig::default() };
            assert_eq!(config.validate(), Err(ConfigError::ZeroIncrement(bad)));
        }
        assert_eq!(SiteConfig::default().validate(), Ok(()));
    }
}
