use dioxus::prelude::*;

use crate::components::icons::IconSvg;
use crate::core::content::{Icon, SERVICES, SERVICES_COPY};
use crate::core::motion::reveal_style;
use crate::core::platform;
use crate::store::use_ui_store;
use crate::t;

/// Three capability cards. Clicking a card returns to the top of the page.
#[component]
pub fn Services() -> Element {
    let state = use_ui_store().get();
    let lang = state.lang;

    rsx! {
        section { id: "services", class: "services",
            div { class: "services__header",
                span { class: "kicker", {t!(lang, "services-kicker")} }
                h2 { class: "section-title reveal", {SERVICES_COPY.heading.get(lang)} }
            }
            div { class: "services__grid",
                for (idx, service) in SERVICES.iter().enumerate() {
                    div {
                        key: "{service.id}",
                        class: "service-card reveal",
                        style: reveal_style(idx, state.device, 0.15),
                        onclick: move |_| platform::scroll_to_top(),
                        div { class: "service-card__top",
                            span { class: "service-card__id", "ID://{service.id}" }
                            div { class: "service-card__icon",
                                IconSvg { icon: service.icon, size: 24 }
                            }
                        }
                        div { class: "service-card__body",
                            h3 { class: "service-card__title", {service.title.get(lang)} }
                            p { class: "service-card__description", {service.description.get(lang)} }
                            ul { class: "service-card__tags",
                                for tag in service.tags.resolve(lang).iter() {
                                    li { key: "{tag}", class: "service-card__tag", "{tag}" }
                                }
                            }
                        }
                        div { class: "service-card__consult",
                            {SERVICES_COPY.consult.get(lang)}
                            IconSvg { icon: Icon::ArrowRight, size: 14 }
                        }
                    }
                }
            }
        }
    }
}
