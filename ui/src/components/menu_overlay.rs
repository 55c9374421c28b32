use dioxus::prelude::*;

use crate::components::icons::IconSvg;
use crate::core::content::{Icon, NAV_LINKS};
use crate::core::platform;
use crate::core::state::UiAction;
use crate::store::use_ui_store;
use crate::t;

/// Full-screen lime menu sliding in from the right.
#[component]
pub fn MenuOverlay() -> Element {
    let store = use_ui_store();
    let state = store.get();
    if !state.menu_open {
        return rsx! {};
    }
    let lang = state.lang;

    rsx! {
        div { class: "menu-overlay", role: "dialog", aria_modal: "true",
            button {
                r#type: "button",
                class: "menu-overlay__close",
                aria_label: t!(lang, "nav-menu-close"),
                onclick: move |_| store.send(UiAction::CloseMenu),
                IconSvg { icon: Icon::Close, size: 32 }
            }
            div { class: "menu-overlay__links",
                for link in NAV_LINKS.iter() {
                    a {
                        key: "{link.id}",
                        class: "menu-overlay__link",
                        href: link.href,
                        onclick: move |evt| {
                            // Close first, then scroll, so the jump lands on
                            // the section after the overlay is gone.
                            evt.prevent_default();
                            store.send(UiAction::CloseMenu);
                            platform::scroll_to_section(link.id);
                        },
                        {link.label.get(lang)}
                    }
                }
            }
        }
    }
}
