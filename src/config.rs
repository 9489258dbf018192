//! Runtime settings read from the environment

use std::str::FromStr;

use crate::error::ConfigError;

pub const LOG_FILTER_VAR: &str = "BUSCA_CEP_LOG";
pub const LOG_FORMAT_VAR: &str = "BUSCA_CEP_LOG_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "busca_cep_menu=info";

/// Line layout of the native `tracing` output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::UnknownLogFormat {
                var: LOG_FORMAT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing` filter directive used by native builds
    pub log_filter: String,
    /// Ignored on the web, where output goes to the browser console
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// `BUSCA_CEP_LOG` wins over `RUST_LOG`; blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = [LOG_FILTER_VAR, "RUST_LOG"]
            .into_iter()
            .filter_map(&lookup)
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => LogFormat::default(),
        };

        Ok(Self {
            log_filter,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter, "busca_cep_menu=info");
        assert_eq!(config.log_format, LogFormat::Full);
    }

    #[test]
    fn test_own_variable_takes_precedence() {
        let config = AppConfig::from_lookup(|name| match name {
            "BUSCA_CEP_LOG" => Some("busca_cep_menu=debug".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.log_filter, "busca_cep_menu=debug");
    }

    #[test]
    fn test_falls_back_to_rust_log() {
        let config = AppConfig::from_lookup(|name| match name {
            "BUSCA_CEP_LOG" => Some("  ".to_string()),
            "RUST_LOG" => Some("trace".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_log_format() {
        let config = AppConfig::from_lookup(|name| {
            (name == "BUSCA_CEP_LOG_FORMAT").then(|| " Pretty ".to_string())
        })
        .unwrap();
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let err = AppConfig::from_lookup(|name| {
            (name == "BUSCA_CEP_LOG_FORMAT").then(|| "json".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownLogFormat {
                var: "BUSCA_CEP_LOG_FORMAT",
                value: "json".to_string(),
            }
        );
        assert!(err.to_string().starts_with("Unknown log format 'json'"));
    }
}
