//! Error types for the side menu application

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown log format '{value}' in {var} (expected full, compact or pretty)")]
    UnknownLogFormat { var: &'static str, value: String },
}
