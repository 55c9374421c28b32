//! Inline stroke icons (24×24 grid, lucide-style paths).

use dioxus::prelude::*;

use crate::core::content::Icon;

pub fn paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Layers => &[
            "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
            "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
            "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
        ],
        Icon::Database => &[
            "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
            "M3 5v14a9 3 0 0 0 18 0V5",
            "M3 12a9 3 0 0 0 18 0",
        ],
        Icon::Workflow => &[
            "M5 3h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M7 11v4a2 2 0 0 0 2 2h4",
            "M15 13h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2h-4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
        ],
        Icon::Command => &[
            "M15 6v12a3 3 0 1 0 3-3H6a3 3 0 1 0 3 3V6a3 3 0 1 0-3 3h12a3 3 0 1 0-3-3",
        ],
        Icon::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        Icon::ShieldCheck => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            "m9 12 2 2 4-4",
        ],
        Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        Icon::ZapOff => &[
            "M12.41 6.75 13 2l-2.43 2.92",
            "M18.57 12.91 21 10h-5.34",
            "M8 8l-5 6h9l-1 8 5-6",
            "m2 2 20 20",
        ],
        Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Icon::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
        Icon::ExternalLink => &[
            "M15 3h6v6",
            "M10 14 21 3",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ],
        Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
    }
}

#[component]
pub fn IconSvg(
    icon: Icon,
    #[props(default = 24)] size: u32,
    #[props(default, into)] class: String,
) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in paths(icon).iter() {
                path { d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_path_data() {
        for icon in Icon::ALL {
            let p = paths(icon);
            assert!(!p.is_empty(), "{icon:?}");
            assert!(p.iter().all(|d| d.starts_with(['M', 'm'])), "{icon:?}");
        }
    }
}
