use dioxus::prelude::*;

use crate::core::motion::cursor_style;
use crate::store::use_ui_store;

/// Ring that trails the pointer on a spring. Not rendered on touch layouts.
#[component]
pub fn CursorFollower() -> Element {
    let store = use_ui_store();
    if store.get().device.is_mobile() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "cursor",
            aria_hidden: "true",
            style: cursor_style(store.cursor()),
            div { class: "cursor__dot" }
        }
    }
}
