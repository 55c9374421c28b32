use dioxus::prelude::*;

/// Studio mark: a lime tile with an italic "J" and a pulsing outline.
#[component]
pub fn JurneLogo(#[props(default = "logo--md".to_string(), into)] size: String) -> Element {
    rsx! {
        div { class: "logo {size}",
            div { class: "logo__tile",
                span { class: "logo__letter", "J" }
            }
            div { class: "logo__pulse", aria_hidden: "true" }
        }
    }
}
