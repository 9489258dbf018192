use dioxus::prelude::*;

use crate::components::navigation::{menu_entries, MenuEntry, NavButton};
use crate::diagnostics::Diagnostics;
use crate::hooks::use_menu_state;
use crate::types::{NavTarget, ServiceKey};

/// Side menu listing the lookup services. Each service expands independently.
#[component]
pub fn Menu() -> Element {
    // Reuse the sink from context when a layout provides one
    let diagnostics = use_hook(|| {
        try_consume_context::<Diagnostics>()
            .unwrap_or_else(|| provide_context(Diagnostics::default()))
    });
    let mut state = use_menu_state();

    use_effect(move || {
        let focused = state.focused.read();
        diagnostics.focus_changed(focused.as_slice());
    });

    let entries: Vec<_> = menu_entries(&state.focused.read())
        .into_iter()
        .map(|entry| (entry.item.id, entry))
        .collect();

    rsx! {
        aside {
            class: "menu-container",
            nav { class: "menu-navbar",
                NavButton { target: NavTarget::Services }
                NavButton { target: NavTarget::Settings }
            }

            main {
                class: "menu-actions",
                h3 { class: "menu-section-title", "Serviços" }
                ul { class: "menu-list",
                    for (id, entry) in entries {
                        MenuEntry {
                            key: "{id}",
                            entry,
                            on_toggle: move |key: ServiceKey| state.toggle_service_focus(key),
                        }
                    }
                }
            }
        }
    }
}
