use dioxus::prelude::*;

use crate::components::logo::JurneLogo;
use crate::core::content::NAV_LINKS;
use crate::core::motion::nav_is_solid;
use crate::core::platform;
use crate::core::state::UiAction;
use crate::store::use_ui_store;
use crate::t;

/// Fixed top bar: brand (scrolls to top), section anchors, language badge and
/// the menu button.
///
/// The bar is transparent over the hero and turns solid once the page has
/// scrolled past the threshold, or always on mobile.
#[component]
pub fn AppNavbar() -> Element {
    let store = use_ui_store();
    let state = store.get();
    let lang = state.lang;

    let bar_class = if nav_is_solid(&state) {
        "navbar navbar--solid"
    } else {
        "navbar"
    };

    rsx! {
        nav { class: bar_class,
            div { class: "navbar__inner",
                button {
                    r#type: "button",
                    class: "navbar__brand",
                    aria_label: t!(lang, "nav-back-to-top"),
                    onclick: move |_| platform::scroll_to_top(),
                    JurneLogo { size: "logo--sm" }
                    span { class: "navbar__brand-mark", {t!(lang, "nav-brand")} }
                }

                div { class: "navbar__actions",
                    div { class: "navbar__links",
                        for link in NAV_LINKS.iter() {
                            a {
                                key: "{link.id}",
                                class: "navbar__link",
                                href: link.href,
                                {link.label.get(lang)}
                                span { class: "navbar__link-underline" }
                            }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "navbar__lang",
                        aria_label: t!(lang, "nav-language-toggle"),
                        onclick: move |_| store.send(UiAction::ToggleLanguage),
                        {lang.badge()}
                    }

                    button {
                        r#type: "button",
                        class: "navbar__menu",
                        aria_label: t!(lang, "nav-menu-open"),
                        aria_expanded: "{state.menu_open}",
                        onclick: move |_| store.send(UiAction::ToggleMenu),
                        div { class: "navbar__menu-bar" }
                        div { class: "navbar__menu-bar navbar__menu-bar--short" }
                    }
                }
            }
        }
    }
}
