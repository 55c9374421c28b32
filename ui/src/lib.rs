//! Shared UI crate for the Jurne Studio site. Platform shells (`web`,
//! `desktop`) only launch [`views::Home`]; everything else lives here.

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod store;
pub mod views;

/// Site stylesheet, bundled by the asset pipeline (web).
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// Same stylesheet embedded as text for shells that inline it (desktop).
pub const MAIN_CSS_INLINE: &str = include_str!("../assets/theme/main.css");
