use dioxus::prelude::*;

use crate::components::logo::JurneLogo;
use crate::core::content::{CONTACT_EMAIL, FOOTER_TAGLINE, SOCIAL_LINKS};
use crate::core::platform;
use crate::store::use_ui_store;
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    let lang = use_ui_store().get().lang;

    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__brand",
                    button {
                        r#type: "button",
                        class: "footer__brand-link",
                        aria_label: t!(lang, "nav-back-to-top"),
                        onclick: move |_| platform::scroll_to_top(),
                        JurneLogo { size: "logo--sm" }
                        span { class: "footer__brand-name", {t!(lang, "footer-brand")} }
                    }
                    p { class: "footer__tagline", {FOOTER_TAGLINE.get(lang)} }
                }

                div { class: "footer__column",
                    h4 { class: "footer__heading", {t!(lang, "footer-status-heading")} }
                    div { class: "footer__status",
                        div { class: "footer__status-dot" }
                        span { class: "footer__status-value", {t!(lang, "footer-status-value")} }
                    }
                    p { class: "footer__detail",
                        a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                    }
                    p { class: "footer__detail", {t!(lang, "footer-location")} }
                }

                div { class: "footer__column",
                    h4 { class: "footer__heading", {t!(lang, "footer-network-heading")} }
                    div { class: "footer__links",
                        for (name, href) in SOCIAL_LINKS.iter() {
                            a { key: "{name}", class: "footer__link", href: *href, "{name}" }
                        }
                    }
                }
            }

            div { class: "footer__legal",
                span { {t!(lang, "footer-legal")} }
                div { class: "footer__legal-links",
                    a { class: "footer__legal-link", href: "#", {t!(lang, "footer-privacy")} }
                    a { class: "footer__legal-link", href: "#", {t!(lang, "footer-terms")} }
                }
            }
        }
    }
}
