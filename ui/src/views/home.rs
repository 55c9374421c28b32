use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::{AppNavbar, ArchiveOverlay, CursorFollower, Loader, MenuOverlay};
use crate::core::config::{FRAME_INTERVAL_MS, LOADER_DELAY_MS};
use crate::core::motion::{frame_dt_secs, PageMotion};
use crate::core::platform::{self, Platform};
use crate::core::state::UiAction;
use crate::core::theme::THEME;
use crate::core::timing;
use crate::sections::{Contact, Hero, Manifesto, Services, SiteFooter, Vision, Work};
use crate::store::use_ui_store_provider;

/// The whole one-page site. Owns the UI store and the background tasks that
/// feed it (load timer, viewport and keyboard listeners, spring animation).
#[component]
pub fn Home() -> Element {
    let store = use_ui_store_provider();

    use_future(move || async move {
        info!(platform = Platform::current().name(), "preparing document");
        if let Err(err) = platform::prepare_document().await {
            warn!(%err, "document preparation failed");
        }
    });

    use_future(move || async move {
        timing::sleep_ms(LOADER_DELAY_MS).await;
        store.send(UiAction::LoadFinished);
    });

    use_future(move || async move {
        platform::watch_viewport(move |sample| {
            store.send(UiAction::ViewportResized {
                width: sample.width,
            });
            store.send(UiAction::Scrolled(sample.scroll_y));
        })
        .await;
    });

    use_future(move || async move {
        platform::watch_escape(move || store.send(UiAction::Dismiss)).await;
    });

    // Springs run only while something is moving; the loop parks on the
    // channel once every spring has settled.
    let animator = use_coroutine(move |mut wake: UnboundedReceiver<()>| async move {
        let mut motion = PageMotion::default();
        while wake.next().await.is_some() {
            let mut last = timing::now_ms();
            while !motion.is_settled(&store.snapshot()) {
                timing::sleep_ms(FRAME_INTERVAL_MS).await;
                let now = timing::now_ms();
                motion = motion.step(&store.snapshot(), frame_dt_secs(last, now));
                last = now;
                store.set_motion(&motion);
            }
        }
        debug!("animation loop stopped");
    });

    // Any state change may move a spring target.
    use_effect(move || {
        let _state = store.get();
        animator.send(());
    });

    let state = store.get();
    let frame = store.frame();

    rsx! {
        document::Style { {THEME.css_variables()} }

        div {
            class: "site",
            lang: state.lang.code(),
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                store.send(UiAction::PointerMoved { x: point.x, y: point.y });
            },

            if state.loading {
                Loader { lang: state.lang }
            }

            CursorFollower {}

            div {
                class: "backdrop",
                aria_hidden: "true",
                style: frame.backdrop_style(),
                div { class: "backdrop__glow" }
                div { class: "backdrop__grid" }
            }

            AppNavbar {}
            MenuOverlay {}
            ArchiveOverlay {}

            main { class: "site__main", aria_hidden: "{state.overlay_open()}",
                Hero {}
                Vision {}
                Services {}
                Work {}
                Manifesto {}
                Contact {}
            }

            SiteFooter {}
        }
    }
}
