use dioxus::prelude::*;

use crate::hooks::FocusedServices;
use crate::types::{MenuItem, ServiceKey};

/// Render data for one service row
#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntryView {
    pub key: ServiceKey,
    pub item: &'static MenuItem,
    pub is_focused: bool,
}

impl MenuEntryView {
    pub fn new(key: ServiceKey, focused: &FocusedServices) -> Self {
        Self {
            key,
            item: key.item(),
            is_focused: focused.contains(key),
        }
    }

    pub fn button_class(&self) -> &'static str {
        if self.is_focused {
            "menu-button focused"
        } else {
            "menu-button"
        }
    }

    pub fn grid_class(&self) -> &'static str {
        if self.is_focused {
            "expandable-grid expanded"
        } else {
            "expandable-grid"
        }
    }

    /// The down arrow is only shown while collapsed
    pub fn shows_arrow(&self) -> bool {
        !self.is_focused
    }
}

/// One view per service, always in declaration order
pub fn menu_entries(focused: &FocusedServices) -> Vec<MenuEntryView> {
    ServiceKey::ALL
        .into_iter()
        .map(|key| MenuEntryView::new(key, focused))
        .collect()
}

#[component]
pub fn MenuEntry(entry: MenuEntryView, on_toggle: EventHandler<ServiceKey>) -> Element {
    let service = entry.key;
    let label = entry.item.label;

    rsx! {
        li {
            class: "menu-item-wrapper",
            button {
                class: entry.button_class(),
                onclick: move |_| on_toggle.call(service),
                span { "{label}" }
                if entry.shows_arrow() {
                    span { class: "arrow-icon", "▼" }
                }
            }

            div {
                class: entry.grid_class(),
                div { class: "expandable-container",
                    div { class: "inner-content",
                        h3 { "{label}" }
                    }
                }
            }
        }
    }
}
