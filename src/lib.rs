pub mod components;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod types;

pub use components::navigation::Menu;
pub use config::{AppConfig, LogFormat};
pub use diagnostics::{DiagnosticSink, Diagnostics, TracingSink};
pub use error::ConfigError;
pub use hooks::{FocusedServices, MenuState};
pub use types::{MenuItem, NavTarget, ServiceKey};
