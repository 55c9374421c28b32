//! Host document glue: favicon, scroll restoration, viewport telemetry.
//!
//! On wasm the DOM is reached directly through `web-sys`. Native shells (the
//! desktop webview) go through `document::eval`, which also carries the
//! scroll/resize telemetry stream on both targets.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use serde::Deserialize;

use super::config::FAVICON_HREF;
use super::error::Result;
#[cfg(target_arch = "wasm32")]
use super::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// One scroll/resize sample pushed from the page.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportSample {
    pub scroll_y: f64,
    pub width: f64,
}

/// Registers (or re-registers) window listeners and pushes a sample per event.
/// The handler is parked on `window` so a remount replaces it instead of
/// stacking a second pair of listeners.
const TELEMETRY_SCRIPT: &str = r#"
const previous = window.__jurneViewport;
if (previous) {
    window.removeEventListener('scroll', previous);
    window.removeEventListener('resize', previous);
}
const send = () => dioxus.send({ scrollY: window.scrollY, width: window.innerWidth });
window.__jurneViewport = send;
window.addEventListener('scroll', send, { passive: true });
window.addEventListener('resize', send);
send();
await new Promise(() => {});
"#;

/// Run the one-off startup effects. Both are cosmetic, so callers log the
/// error and keep rendering.
pub async fn prepare_document() -> Result<()> {
    let created = link_favicon(FAVICON_HREF).await?;
    debug!(created, href = FAVICON_HREF, "favicon linked");
    reset_scroll_restoration().await
}

/// Make sure exactly one `link[rel~='icon']` exists and points at `href`.
/// Returns whether the element had to be created.
#[cfg(target_arch = "wasm32")]
pub async fn link_favicon(href: &str) -> Result<bool> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteError::Dom("no document".into()))?;

    let (link, created) = match document.query_selector("link[rel~='icon']")? {
        Some(existing) => (existing, false),
        None => {
            let link = document.create_element("link")?;
            link.set_attribute("rel", "icon")?;
            let head = document
                .head()
                .ok_or_else(|| SiteError::Dom("document has no <head>".into()))?;
            head.append_child(&link)?;
            (link, true)
        }
    };
    link.set_attribute("href", href)?;
    Ok(created)
}

/// Script for shells without direct DOM access. Reuses the first icon link
/// and only creates one when the head has none.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn favicon_script(href: &str) -> String {
    format!(
        r#"
        let link = document.querySelector("link[rel~='icon']");
        const created = !link;
        if (created) {{
            link = document.createElement('link');
            link.rel = 'icon';
            document.head.appendChild(link);
        }}
        link.href = {href:?};
        return created;
        "#
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn link_favicon(href: &str) -> Result<bool> {
    let created = document::eval(&favicon_script(href)).await?;
    Ok(created.as_bool().unwrap_or(false))
}

/// Switch history scroll restoration to manual (when supported) and jump to the top.
#[cfg(target_arch = "wasm32")]
pub async fn reset_scroll_restoration() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| SiteError::Dom("no window".into()))?;
    match window.history() {
        Ok(history) => history.set_scroll_restoration(web_sys::ScrollRestoration::Manual)?,
        Err(err) => debug!(?err, "history API unavailable"),
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn reset_scroll_restoration() -> Result<()> {
    document::eval(
        r#"
        if ('scrollRestoration' in window.history) {
            window.history.scrollRestoration = 'manual';
        }
        window.scrollTo(0, 0);
        return true;
        "#,
    )
    .await?;
    Ok(())
}

/// Stream viewport samples into `on_sample` until the owning task is dropped.
pub async fn watch_viewport(mut on_sample: impl FnMut(ViewportSample)) {
    let mut eval = document::eval(TELEMETRY_SCRIPT);
    debug!("viewport telemetry started");
    loop {
        match eval.recv::<ViewportSample>().await {
            Ok(sample) => on_sample(sample),
            Err(err) => {
                warn!(?err, "viewport telemetry stopped");
                break;
            }
        }
    }
}

/// Forwards Escape presses from anywhere in the document. Like the viewport
/// script, the handler is parked on `window` so a remount replaces it.
const ESCAPE_SCRIPT: &str = r#"
const previous = window.__jurneEscape;
if (previous) {
    document.removeEventListener('keydown', previous);
}
const onKey = (event) => {
    if (event.key === 'Escape' || event.key === 'Esc') {
        dioxus.send(true);
    }
};
window.__jurneEscape = onKey;
document.addEventListener('keydown', onKey);
await new Promise(() => {});
"#;

/// Call `on_escape` for every Escape keydown on the document, wherever focus
/// is, until the owning task is dropped.
pub async fn watch_escape(mut on_escape: impl FnMut()) {
    let mut eval = document::eval(ESCAPE_SCRIPT);
    loop {
        match eval.recv::<bool>().await {
            Ok(_) => on_escape(),
            Err(err) => {
                warn!(?err, "escape listener stopped");
                break;
            }
        }
    }
}

pub fn scroll_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

pub fn scroll_to_section(id: &str) {
    let _ = document::eval(&format!(
        "document.getElementById({id:?})?.scrollIntoView({{ behavior: 'smooth' }});"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sample_uses_camel_case_keys() {
        let sample: ViewportSample =
            serde_json::from_value(json!({ "scrollY": 412.5, "width": 1280 })).unwrap();
        assert_eq!(
            sample,
            ViewportSample {
                scroll_y: 412.5,
                width: 1280.0
            }
        );
    }

    #[test]
    fn malformed_sample_is_rejected() {
        assert!(serde_json::from_value::<ViewportSample>(json!({ "scroll_y": 1 })).is_err());
    }

    #[test]
    fn telemetry_script_replaces_previous_listeners() {
        assert!(TELEMETRY_SCRIPT.contains("removeEventListener('scroll', previous)"));
        assert!(TELEMETRY_SCRIPT.contains("{ passive: true }"));
        assert!(TELEMETRY_SCRIPT.contains("dioxus.send"));
    }

    #[test]
    fn favicon_script_reuses_an_existing_link() {
        let script = favicon_script(FAVICON_HREF);
        let query = script
            .find("querySelector(\"link[rel~='icon']\")")
            .expect("looks up the existing icon link");
        let guard = script.find("if (created)").expect("creation is guarded");
        let create = script.find("createElement('link')").expect("can create");
        assert!(query < guard && guard < create);
        // exactly one element is ever created, and only inside the guard
        assert_eq!(script.matches("createElement").count(), 1);
        assert_eq!(script.matches("appendChild").count(), 1);
        assert!(script.contains("link.href = \"/logo.svg\";"));
        assert!(script.contains("return created;"));
    }

    #[test]
    fn favicon_script_escapes_the_href() {
        let script = favicon_script("/a\"b.svg");
        assert!(script.contains(r#"link.href = "/a\"b.svg";"#));
    }

    #[test]
    fn escape_listener_is_document_wide_and_replaced_on_remount() {
        assert!(ESCAPE_SCRIPT.contains("document.addEventListener('keydown', onKey)"));
        assert!(ESCAPE_SCRIPT.contains("document.removeEventListener('keydown', previous)"));
        assert!(ESCAPE_SCRIPT.contains("event.key === 'Escape'"));
    }

    #[test]
    fn native_build_reports_desktop() {
        #[cfg(not(target_arch = "wasm32"))]
        assert_eq!(Platform::current(), Platform::Desktop);
        assert!(!Platform::current().name().is_empty());
    }
}
