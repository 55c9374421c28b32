//! Reactive handle around [`UiState`].
//!
//! The page owns one store, provided through context by the `Home` view.
//! Components read a snapshot with [`UiStore::get`] (which subscribes them)
//! and feed actions back with [`UiStore::send`].

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::motion::{PageMotion, ParallaxFrame};
use crate::core::state::{Pointer, UiAction, UiState};

#[derive(Clone, Copy, PartialEq)]
pub struct UiStore {
    state: Signal<UiState>,
    frame: Signal<ParallaxFrame>,
    cursor: Signal<Pointer>,
}

impl UiStore {
    /// Current state; subscribes the calling component.
    pub fn get(&self) -> UiState {
        (self.state)()
    }

    /// Current state without subscribing (for async loops and handlers).
    pub fn snapshot(&self) -> UiState {
        *self.state.peek()
    }

    /// Smoothed parallax parameters; subscribes the calling component.
    pub fn frame(&self) -> ParallaxFrame {
        (self.frame)()
    }

    pub fn send(self, action: UiAction) {
        let current = self.snapshot();
        let next = current.apply(action);
        if next == current {
            return;
        }
        if !is_telemetry(&action) {
            debug!(?action, "ui action");
        }
        let mut state = self.state;
        state.set(next);
    }

    /// Spring-smoothed cursor follower position; subscribes the caller.
    pub fn cursor(&self) -> Pointer {
        (self.cursor)()
    }

    /// Publish one animation step.
    pub fn set_motion(self, motion: &PageMotion) {
        let (mut frame, mut cursor) = (self.frame, self.cursor);
        frame.set(motion.frame());
        cursor.set(motion.cursor());
    }
}

fn is_telemetry(action: &UiAction) -> bool {
    matches!(
        action,
        UiAction::Scrolled(_) | UiAction::PointerMoved { .. } | UiAction::ViewportResized { .. }
    )
}

/// Create the page store and provide it to descendants.
pub fn use_ui_store_provider() -> UiStore {
    let state = use_signal(UiState::default);
    let frame = use_signal(ParallaxFrame::default);
    let cursor = use_signal(Pointer::default);
    use_context_provider(|| UiStore {
        state,
        frame,
        cursor,
    })
}

/// The store provided by the nearest `Home` view.
pub fn use_ui_store() -> UiStore {
    use_context::<UiStore>()
}
