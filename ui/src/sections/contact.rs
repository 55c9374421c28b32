use dioxus::prelude::*;

use crate::components::icons::IconSvg;
use crate::core::content::Icon;
use crate::store::use_ui_store;
use crate::t;

/// Static call-to-action; there is no form behind it.
#[component]
pub fn Contact() -> Element {
    let lang = use_ui_store().get().lang;

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "contact__card reveal",
                div { class: "contact__grain", aria_hidden: "true" }
                div { class: "contact__row",
                    div { class: "contact__copy",
                        span { class: "contact__kicker", {t!(lang, "contact-kicker")} }
                        h2 { class: "contact__title",
                            {t!(lang, "contact-title-top")}
                            br {}
                            {t!(lang, "contact-title-bottom")}
                        }
                        p { class: "contact__pitch", {t!(lang, "contact-pitch")} }
                    }
                    div { class: "contact__arrow",
                        IconSvg { icon: Icon::ArrowUpRight, size: 48 }
                    }
                }
            }
        }
    }
}
