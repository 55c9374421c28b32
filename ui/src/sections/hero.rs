use dioxus::prelude::*;

use crate::components::icons::IconSvg;
use crate::core::content::{Icon, HERO};
use crate::core::platform;
use crate::store::use_ui_store;
use crate::t;

/// Full-height opener. Fades, shrinks and drifts up as the page scrolls.
#[component]
pub fn Hero() -> Element {
    let store = use_ui_store();
    let lang = store.get().lang;
    let frame = store.frame();

    rsx! {
        section { class: "hero",
            div { class: "hero__stage", style: frame.hero_style(),
                div { class: "hero__content reveal",
                    div { class: "hero__tag", {HERO.tag.get(lang)} }
                    h1 { class: "hero__title",
                        {HERO.title_lead.get(lang)}
                        br {}
                        span { class: "hero__title-outline", {HERO.title_outline.get(lang)} }
                        br {}
                        span { class: "hero__title-accent", {HERO.title_accent.get(lang)} }
                    }
                    div { class: "hero__row",
                        p { class: "hero__description", {HERO.description.get(lang)} }
                        button {
                            r#type: "button",
                            class: "hero__cta",
                            onclick: move |_| platform::scroll_to_section("contact"),
                            {HERO.cta.get(lang)}
                            IconSvg { icon: Icon::ArrowRight, size: 18, class: "hero__cta-arrow" }
                        }
                    }
                }
            }
            div { class: "hero__scroll", aria_hidden: "true",
                div { class: "hero__scroll-line" }
                span { {t!(lang, "hero-scroll")} }
            }
        }
    }
}
