//! Typed bilingual lookup.
//!
//! The site ships in exactly two languages. Instead of indexing a string map
//! by a runtime code, every translatable value is a [`Localized`] record with
//! one field per [`Lang`], so a missing translation fails to compile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use super::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Es, Lang::En];

    /// Two-letter code (`es` / `en`).
    pub fn code(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// Upper-case code shown on the navbar toggle.
    pub fn badge(self) -> &'static str {
        match self {
            Lang::Es => "ES",
            Lang::En => "EN",
        }
    }

    /// Locale folder of the fluent bundle for this language.
    pub fn locale(self) -> &'static str {
        match self {
            Lang::Es => "es-ES",
            Lang::En => "en-US",
        }
    }

    pub fn language_identifier(self) -> LanguageIdentifier {
        match self {
            Lang::Es => unic_langid::langid!("es-ES"),
            Lang::En => unic_langid::langid!("en-US"),
        }
    }

    /// The other language.
    pub fn toggle(self) -> Self {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = SiteError;

    /// Accepts `es`, `en` and regional variants such as `es-AR` or `en_GB`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let primary = raw
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "es" => Ok(Lang::Es),
            "en" => Ok(Lang::En),
            _ => Err(SiteError::UnknownLanguage(raw.to_string())),
        }
    }
}

/// A value available in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T> {
    pub es: T,
    pub en: T,
}

/// Bilingual display string.
pub type LocalizedStr = Localized<&'static str>;

impl<T> Localized<T> {
    pub const fn new(es: T, en: T) -> Self {
        Self { es, en }
    }

    pub fn resolve(&self, lang: Lang) -> &T {
        match lang {
            Lang::Es => &self.es,
            Lang::En => &self.en,
        }
    }

    /// Iterate `(lang, value)` pairs, mostly useful for completeness checks.
    pub fn iter(&self) -> impl Iterator<Item = (Lang, &T)> {
        Lang::ALL.into_iter().map(move |lang| (lang, self.resolve(lang)))
    }
}

impl<T: Copy> Localized<T> {
    /// Same value for both languages (brand names, technical tags).
    pub const fn same(value: T) -> Self {
        Self { es: value, en: value }
    }
}

impl Localized<&'static str> {
    pub fn get(&self, lang: Lang) -> &'static str {
        *self.resolve(lang)
    }
}
