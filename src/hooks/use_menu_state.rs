use dioxus::prelude::*;
use serde::Serialize;

use crate::types::ServiceKey;

/// Services currently expanded in the menu, in the order they were opened.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FocusedServices(Vec<ServiceKey>);

impl FocusedServices {
    /// Remove `key` if present, append it otherwise. Returns whether it is now focused.
    pub fn toggle(&mut self, key: ServiceKey) -> bool {
        if let Some(pos) = self.0.iter().position(|k| *k == key) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(key);
            true
        }
    }

    pub fn contains(&self, key: ServiceKey) -> bool {
        self.0.contains(&key)
    }

    pub fn as_slice(&self) -> &[ServiceKey] {
        &self.0
    }
}

#[derive(Clone, Copy)]
pub struct MenuState {
    pub focused: Signal<FocusedServices>,
}

pub fn use_menu_state() -> MenuState {
    let focused = use_signal(FocusedServices::default);

    MenuState { focused }
}

impl MenuState {
    /// Expand or collapse a service entry
    pub fn toggle_service_focus(&mut self, key: ServiceKey) {
        let expanded = self.focused.write().toggle(key);
        tracing::debug!(service = %key, expanded, "toggled service focus");
    }
}
