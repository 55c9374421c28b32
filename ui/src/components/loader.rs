use dioxus::prelude::*;

use crate::core::lang::Lang;
use crate::t;

/// Full-screen intro shown until the load timer fires.
#[component]
pub fn Loader(lang: Lang) -> Element {
    rsx! {
        div {
            class: "loader",
            role: "status",
            aria_label: t!(lang, "loader-status"),
            div { class: "loader__inner",
                div { class: "loader__line" }
                div { class: "loader__caption",
                    span { {t!(lang, "loader-studio")} }
                    span { {t!(lang, "loader-year")} }
                }
            }
        }
    }
}
