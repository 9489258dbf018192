use dioxus::prelude::*;

use crate::diagnostics::Diagnostics;
use crate::types::NavTarget;

#[component]
pub fn NavButton(target: NavTarget) -> Element {
    let diagnostics = use_context::<Diagnostics>();
    let label = target.label();

    rsx! {
        button {
            class: "nav-button",
            onclick: move |_| diagnostics.nav_clicked(target),
            "{label}"
        }
    }
}
