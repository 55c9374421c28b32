//! Platform-agnostic site logic: content, language, filtering, state and motion.

pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod lang;
pub mod motion;
pub mod platform;
pub mod state;
pub mod theme;
pub mod timing;

pub use error::{Result, SiteError};
