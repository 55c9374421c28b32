use dioxus::prelude::*;

use crate::components::icons::IconSvg;
use crate::core::content::{Icon, Project, FILTERS, PROJECTS, WORK};
use crate::core::filter::{count_for, filter_projects, Category};
use crate::core::lang::Lang;
use crate::core::motion::reveal_style;
use crate::core::state::{DeviceClass, UiAction};
use crate::store::use_ui_store;
use crate::t;

/// Filterable project gallery plus the entry point to the archive overlay.
#[component]
pub fn Work() -> Element {
    let store = use_ui_store();
    let state = store.get();
    let lang = state.lang;
    let visible = filter_projects(&PROJECTS, state.filter);

    let chips_class = if state.device.is_mobile() {
        "work__filters work__filters--row"
    } else {
        "work__filters work__filters--column"
    };

    rsx! {
        section { id: "work", class: "work",
            div { class: "work__inner",
                div { class: "work__header",
                    div { class: "reveal reveal--from-left",
                        span { class: "kicker", {WORK.label.get(lang)} }
                        h2 { class: "section-title", {WORK.title.get(lang)} }
                    }
                    div {
                        class: chips_class,
                        role: "group",
                        aria_label: t!(lang, "work-filter-label"),
                        for option in FILTERS.iter() {
                            FilterChip {
                                key: "{option.category}",
                                category: option.category,
                                label: option.label.get(lang),
                                count: count_for(&PROJECTS, option.category),
                                active: option.category == state.filter,
                            }
                        }
                    }
                }

                if visible.is_empty() {
                    p { class: "work__empty", {t!(lang, "work-empty")} }
                } else {
                    div { class: "work__grid",
                        for (idx, project) in visible.into_iter().enumerate() {
                            {render_project(project, idx, lang, state.device)}
                        }
                    }
                }

                div { class: "work__more",
                    button {
                        r#type: "button",
                        class: "work__archive",
                        onclick: move |_| store.send(UiAction::OpenArchive),
                        {WORK.archive_cta.get(lang)}
                    }
                }
            }
        }
    }
}

#[component]
fn FilterChip(category: Category, label: &'static str, count: usize, active: bool) -> Element {
    let store = use_ui_store();
    let class = if active {
        "filter-chip filter-chip--active"
    } else {
        "filter-chip"
    };

    rsx! {
        button {
            r#type: "button",
            class,
            aria_pressed: "{active}",
            "data-category": category.tag(),
            onclick: move |_| store.send(UiAction::SetFilter(category)),
            "{label}"
            span { class: "filter-chip__count", "{count}" }
        }
    }
}

fn render_project(project: &Project, idx: usize, lang: Lang, device: DeviceClass) -> Element {
    rsx! {
        div {
            key: "{project.id}",
            class: "project-card reveal",
            style: reveal_style(idx % 2, device, 0.1),
            div { class: format!("project-card__thumb {}", project.swatch.css_class()),
                div { class: "project-card__glyph",
                    IconSvg { icon: Icon::Command, size: 60 }
                }
            }
            div { class: "project-card__meta",
                div {
                    h3 { class: "project-card__title", "{project.title}" }
                    span { class: "project-card__category", {project.label.get(lang)} }
                }
                span { class: "project-card__year", "{project.year}" }
            }
        }
    }
}
