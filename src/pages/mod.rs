use dioxus::prelude::*;
use crate::components::layout::MenuLayout;

#[component]
pub fn Home() -> Element {
    rsx! {
        MenuLayout {}
    }
}
