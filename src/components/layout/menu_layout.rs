use dioxus::prelude::*;

use crate::components::navigation::Menu;
use crate::diagnostics::Diagnostics;

#[component]
pub fn MenuLayout() -> Element {
    use_context_provider(Diagnostics::tracing);

    rsx! {
        div {
            class: "menu-layout",
            Menu {}
        }
    }
}
