//! Fluent bundles for the site chrome.
//!
//! Structured, bilingual content (services, projects, hero copy) is typed and
//! lives in [`crate::core::content`]. Short UI labels that sit around it
//! (loader, footer headings, aria labels, the empty gallery message) are
//! fluent messages instead:
//! - `i18n-embed` (bundle loading + language negotiation)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro, message IDs checked at compile time
//!   against the fallback bundle)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   es-ES/jurne-ui.ftl   (fallback/reference)
//!   en-US/jurne-ui.ftl
//! ```
//!
//! There is one loader per [`Lang`], built lazily. Components never switch a
//! global language; they pass the language from the UI state:
//! ```ignore
//! let label = t!(state.lang, "footer-status-heading");
//! ```
use dioxus::logger::tracing::{info, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::lang::Lang;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Look up a chrome label for a language:
/// `t!(Lang::En, "nav-menu-open")`.
///
/// Expands to `fl!(loader(lang), key)`, so the key is validated at compile
/// time against the fallback bundle.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
}

/// Fluent "domain" (matches the package name and the FTL filename).
const DOMAIN: &str = "jurne-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static ES_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::Es));
static EN_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::En));

fn fallback_language() -> LanguageIdentifier {
    Lang::default().language_identifier()
}

fn build_loader(lang: Lang) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, fallback_language());
    match i18n_embed::select(&loader, &Localizations, &[lang.language_identifier()]) {
        Ok(selected) => info!(?selected, requested = lang.locale(), "fluent bundle loaded"),
        Err(err) => warn!(%err, requested = lang.locale(), "bundle selection failed; using fallback"),
    }
    loader
}

/// The loader holding the bundle for `lang`.
pub fn loader(lang: Lang) -> &'static FluentLanguageLoader {
    match lang {
        Lang::Es => &*ES_LOADER,
        Lang::En => &*EN_LOADER,
    }
}

/// Warm both loaders so the first language toggle doesn't parse FTL mid-click.
pub fn init() {
    for lang in Lang::ALL {
        let _ = loader(lang);
    }
}

/// List available (embedded) locale folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
