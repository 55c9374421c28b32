use dioxus::prelude::*;

use crate::components::icons::IconSvg;
use crate::core::content::{MANIFESTO_ICONS, PHILOSOPHY_QUOTE};
use crate::core::motion::reveal_style;
use crate::store::use_ui_store;

#[component]
pub fn Manifesto() -> Element {
    let state = use_ui_store().get();

    rsx! {
        section { class: "manifesto",
            h2 { class: "manifesto__quote reveal reveal--zoom",
                "\u{201C}{PHILOSOPHY_QUOTE.get(state.lang)}\u{201D}"
            }
            div { class: "manifesto__icons",
                for (i, icon) in MANIFESTO_ICONS.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "manifesto__icon reveal reveal--fade",
                        style: reveal_style(i, state.device, 0.1),
                        IconSvg { icon: *icon, size: 18 }
                    }
                }
            }
        }
    }
}
