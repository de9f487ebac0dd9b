use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::{
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerLevel, LoggerTimeZone},
};

pub const ENV_LOG_FORMAT: &str = "SCHED_LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "SCHED_LOG_LEVEL";
pub const ENV_LOG_TZ: &str = "SCHED_LOG_TZ";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// Filter expression (e.g. `"info"`, `"sched_core=debug,info"`).
    pub level: LoggerLevel,
    pub tz: LoggerTimeZone,
    /// Include module targets in output.
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults overlaid with `SCHED_LOG_FORMAT`, `SCHED_LOG_LEVEL` and `SCHED_LOG_TZ`.
    ///
    /// Unset or blank variables keep the default; invalid values are errors.
    pub fn from_env() -> LoggerResult<Self> {
        Self::default().overlay(|var| std::env::var(var).ok())
    }

    /// Overlay values produced by `lookup` onto `self`.
    pub fn overlay<F>(mut self, lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |var: &'static str| lookup(var).filter(|v| !v.trim().is_empty());
        let wrap = |var: &'static str| move |e: LoggerError| LoggerError::Env {
            var,
            source: Box::new(e),
        };

        if let Some(v) = get(ENV_LOG_FORMAT) {
            self.format = v.parse::<LoggerFormat>().map_err(wrap(ENV_LOG_FORMAT))?;
        }
        if let Some(v) = get(ENV_LOG_LEVEL) {
            self.level = v.parse::<LoggerLevel>().map_err(wrap(ENV_LOG_LEVEL))?;
        }
        if let Some(v) = get(ENV_LOG_TZ) {
            self.tz = v.parse::<LoggerTimeZone>().map_err(wrap(ENV_LOG_TZ))?;
        }
        Ok(self)
    }

    /// Color only when enabled and stderr, where logs go, is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn default_values() {
        let config = LoggerConfig::default();

        assert_eq!(config.format, LoggerFormat::Text);
        assert_eq!(config.tz, LoggerTimeZone::Utc);
        assert_eq!(config.level.as_str(), "info");
        assert!(config.with_targets);
        assert!(config.use_color);
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let config: LoggerConfig = serde_json::from_str(r#"{"format": "json", "level": "debug"}"#).unwrap();

        assert_eq!(config.format, LoggerFormat::Json);
        assert_eq!(config.level.as_str(), "debug");
        assert_eq!(config.tz, LoggerTimeZone::Utc);
        assert!(config.with_targets);
    }

    #[test]
    fn overlay_applies_set_variables() {
        let config = LoggerConfig::default()
            .overlay(lookup(&[
                (ENV_LOG_FORMAT, "JSON"),
                (ENV_LOG_LEVEL, "sched_core=trace,warn"),
                (ENV_LOG_TZ, "local"),
            ]))
            .unwrap();

        assert_eq!(config.format, LoggerFormat::Json);
        assert_eq!(config.level.as_str(), "sched_core=trace,warn");
        assert_eq!(config.tz, LoggerTimeZone::Local);
    }

    #[test]
    fn overlay_ignores_blank_variables() {
        let config = LoggerConfig::default()
            .overlay(lookup(&[(ENV_LOG_FORMAT, "  "), (ENV_LOG_LEVEL, "")]))
            .unwrap();

        assert_eq!(config.format, LoggerFormat::Text);
        assert_eq!(config.level.as_str(), "info");
    }

    #[test]
    fn overlay_names_the_bad_variable() {
        let err = LoggerConfig::default()
            .overlay(lookup(&[(ENV_LOG_TZ, "mars")]))
            .unwrap_err();

        match err {
            LoggerError::Env { var, source } => {
                assert_eq!(var, ENV_LOG_TZ);
                assert!(matches!(*source, LoggerError::InvalidTimeZone(_)));
            }
            other => panic!("expected Env error, got {other:?}"),
        }
    }
}
