use dioxus::prelude::*;

use crate::components::icons::IconSvg;
use crate::components::logo::JurneLogo;
use crate::core::content::{Icon, PROJECTS};
use crate::core::motion::reveal_style;
use crate::core::state::UiAction;
use crate::store::use_ui_store;
use crate::t;

/// Full-screen index of every project, independent of the gallery filter.
#[component]
pub fn ArchiveOverlay() -> Element {
    let store = use_ui_store();
    let state = store.get();
    if !state.archive_open {
        return rsx! {};
    }
    let lang = state.lang;

    rsx! {
        div { class: "archive", role: "dialog", aria_modal: "true",
            div { class: "archive__bar",
                JurneLogo { size: "logo--sm" }
                button {
                    r#type: "button",
                    class: "archive__close",
                    aria_label: t!(lang, "archive-close"),
                    onclick: move |_| store.send(UiAction::CloseArchive),
                    IconSvg { icon: Icon::Close, size: 18 }
                }
            }
            div { class: "archive__body",
                h2 { class: "archive__title", {t!(lang, "archive-title")} }
                div { class: "archive__grid",
                    for (i, project) in PROJECTS.iter().enumerate() {
                        div {
                            key: "{project.id}",
                            class: "archive-card reveal",
                            style: reveal_style(i, state.device, 0.05),
                            div { class: "archive-card__top",
                                span { class: "archive-card__id", "[{project.id}]" }
                                IconSvg { icon: Icon::ExternalLink, size: 14, class: "archive-card__link" }
                            }
                            h3 { class: "archive-card__title", "{project.title}" }
                            div { class: "archive-card__meta",
                                span { {project.label.get(lang)} }
                                span { "{project.year}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
