use dioxus::prelude::*;

use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    // Unknown paths render the one page rather than a blank screen.
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        document::Title { "Jurne Studio" }

        Router::<Route> {}
    }
}

#[component]
fn Fallback(segments: Vec<String>) -> Element {
    dioxus::logger::tracing::debug!(?segments, "unknown route; rendering home");
    rsx! {
        Home {}
    }
}
