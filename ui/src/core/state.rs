//! UI state container.
//!
//! All transient page state lives in one `Copy` struct. Event handlers build a
//! [`UiAction`] and swap the state for `state.apply(action)`; nothing mutates
//! fields in place, which keeps the transitions testable without a renderer.

use super::config::{MOBILE_BREAKPOINT_PX, SCROLLED_THRESHOLD_PX};
use super::filter::Category;
use super::lang::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceClass {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiState {
    pub lang: Lang,
    pub filter: Category,
    pub menu_open: bool,
    pub archive_open: bool,
    pub loading: bool,
    pub scrolled: bool,
    pub scroll_y: f64,
    pub pointer: Pointer,
    pub device: DeviceClass,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            filter: Category::default(),
            menu_open: false,
            archive_open: false,
            loading: true,
            scrolled: false,
            scroll_y: 0.0,
            pointer: Pointer::default(),
            device: DeviceClass::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    ToggleLanguage,
    SetFilter(Category),
    ToggleMenu,
    CloseMenu,
    OpenArchive,
    CloseArchive,
    /// Escape key: close whichever overlay is open.
    Dismiss,
    LoadFinished,
    Scrolled(f64),
    PointerMoved { x: f64, y: f64 },
    ViewportResized { width: f64 },
}

impl UiState {
    pub fn apply(self, action: UiAction) -> Self {
        match action {
            UiAction::ToggleLanguage => Self {
                lang: self.lang.toggle(),
                ..self
            },
            UiAction::SetFilter(filter) => Self { filter, ..self },
            UiAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            UiAction::CloseMenu => Self {
                menu_open: false,
                ..self
            },
            UiAction::OpenArchive => Self {
                archive_open: true,
                ..self
            },
            UiAction::CloseArchive => Self {
                archive_open: false,
                ..self
            },
            UiAction::Dismiss => Self {
                menu_open: false,
                archive_open: false,
                ..self
            },
            UiAction::LoadFinished => Self {
                loading: false,
                ..self
            },
            UiAction::Scrolled(y) => {
                let scroll_y = if y.is_finite() { y.max(0.0) } else { 0.0 };
                Self {
                    scroll_y,
                    scrolled: scroll_y > SCROLLED_THRESHOLD_PX,
                    ..self
                }
            }
            // The cursor follower is hidden on touch layouts, so skip the work.
            UiAction::PointerMoved { .. } if self.device.is_mobile() => self,
            UiAction::PointerMoved { x, y } => Self {
                pointer: Pointer { x, y },
                ..self
            },
            UiAction::ViewportResized { width } => Self {
                device: DeviceClass::from_width(width),
                ..self
            },
        }
    }

    /// Whether any full-screen overlay currently covers the page.
    pub fn overlay_open(&self) -> bool {
        self.menu_open || self.archive_open
    }
}
