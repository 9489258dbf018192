//! Diagnostic observations emitted by the side menu.
//!
//! The menu reports two things: the focused service set every time it changes, and clicks on
//! the top navigation buttons. Where they end up is decided by the [`DiagnosticSink`] placed in
//! context; without one, the menu falls back to [`TracingSink`].

use std::rc::Rc;

use crate::types::{NavTarget, ServiceKey};

pub trait DiagnosticSink {
    fn focus_changed(&self, focused: &[ServiceKey]);
    fn nav_clicked(&self, target: NavTarget);
}

/// Forwards observations to `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn focus_changed(&self, focused: &[ServiceKey]) {
        tracing::info!(
            count = focused.len(),
            services = %focus_snapshot(focused),
            "Serviços ativos"
        );
    }

    fn nav_clicked(&self, target: NavTarget) {
        tracing::info!(button = target.as_str(), "{}", nav_message(target));
    }
}

/// JSON array of the focused keys, e.g. `["buscar-localizacao"]`
pub fn focus_snapshot(focused: &[ServiceKey]) -> String {
    serde_json::to_string(focused).unwrap_or_else(|err| {
        tracing::warn!("Failed to serialize focused services: {}", err);
        format!("{:?}", focused)
    })
}

pub fn nav_message(target: NavTarget) -> String {
    format!("Foco: {}", target.label())
}

/// Context handle for the active sink
#[derive(Clone)]
pub struct Diagnostics(Rc<dyn DiagnosticSink>);

impl Diagnostics {
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    pub fn tracing() -> Self {
        Self::new(TracingSink)
    }

    pub fn focus_changed(&self, focused: &[ServiceKey]) {
        self.0.focus_changed(focused);
    }

    pub fn nav_clicked(&self, target: NavTarget) {
        self.0.nav_clicked(target);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::tracing()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Observation {
        Focus(Vec<ServiceKey>),
        Nav(NavTarget),
    }

    /// Keeps every observation in memory
    #[derive(Clone, Default)]
    pub struct RecordingSink {
        pub observations: Rc<RefCell<Vec<Observation>>>,
    }

    impl RecordingSink {
        pub fn taken(&self) -> Vec<Observation> {
            self.observations.borrow_mut().drain(..).collect()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn focus_changed(&self, focused: &[ServiceKey]) {
            self.observations
                .borrow_mut()
                .push(Observation::Focus(focused.to_vec()));
        }

        fn nav_clicked(&self, target: NavTarget) {
            self.observations.borrow_mut().push(Observation::Nav(target));
        }
    }
}
