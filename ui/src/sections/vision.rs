use dioxus::prelude::*;

use crate::components::icons::IconSvg;
use crate::core::content::{Icon, VISION};
use crate::store::use_ui_store;
use crate::t;

#[component]
pub fn Vision() -> Element {
    let store = use_ui_store();
    let state = store.get();
    let lang = state.lang;
    let frame = store.frame();

    let stats = [
        ("001.", t!(lang, "vision-stat-architecture")),
        ("99%", t!(lang, "vision-stat-accuracy")),
    ];

    rsx! {
        section { id: "philosophy", class: "vision",
            div { class: "vision__grid",
                div { class: "vision__copy reveal reveal--from-left",
                    div { class: "vision__label",
                        div { class: "vision__rule" }
                        span { {VISION.label.get(lang)} }
                    }
                    h2 { class: "vision__title", {VISION.title.get(lang)} }
                    p { class: "vision__description", {VISION.description.get(lang)} }
                    div { class: "vision__stats",
                        for (value, label) in stats {
                            div { key: "{value}",
                                div { class: "vision__stat-value", "{value}" }
                                div { class: "vision__stat-label", "{label}" }
                            }
                        }
                    }
                }

                div { class: "vision__art reveal reveal--zoom", style: frame.float_style(),
                    div { class: "vision__orbit",
                        div { class: "vision__orbit-inner",
                            IconSvg { icon: Icon::Activity, size: 128, class: "vision__pulse" }
                        }
                    }
                    div { class: "vision__badge",
                        IconSvg { icon: Icon::Zap, size: 48 }
                    }
                }
            }
        }
    }
}
