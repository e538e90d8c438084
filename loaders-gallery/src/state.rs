//! Page state managed via Dioxus context.
//!
//! `GalleryState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<GalleryState>()`.

use crate::config::GalleryConfig;
use dioxus::prelude::*;

/// Shared state for the gallery page.
#[derive(Clone, Copy)]
pub struct GalleryState {
    /// Whether every spinner is currently shown
    pub loading: Signal<bool>,
    /// Configuration error, if the bundled config failed to parse
    pub error_msg: Signal<Option<String>>,
}

impl GalleryState {
    pub fn new(config: &GalleryConfig, error_msg: Option<String>) -> Self {
        Self {
            loading: Signal::new(config.initially_loading),
            error_msg: Signal::new(error_msg),
        }
    }

    /// Flip the loading flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        let next = !(self.loading)();
        self.loading.set(next);
        next
    }
}
